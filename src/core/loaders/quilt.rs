use super::context::MatchContext;
use super::fabric::identify_knot;
use super::matcher::{LoaderMatcher, MatchResult};
use super::model::LoaderKind;

const QUILT_MAIN_CLASS: &str = "org.quiltmc.loader.impl.launch.knot.KnotClient";
const QUILT_GROUP: &str = "org.quiltmc";
const QUILT_LOADER_ARTIFACT: &str = "quilt-loader";

pub struct QuiltMatcher;

impl LoaderMatcher for QuiltMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        identify_knot(
            ctx,
            QUILT_MAIN_CLASS,
            QUILT_GROUP,
            QUILT_LOADER_ARTIFACT,
            LoaderKind::Quilt,
        )
    }
}

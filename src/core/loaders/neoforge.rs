use super::context::MatchContext;
use super::forge::identify_bootstrap;
use super::matcher::{LoaderMatcher, MatchResult};
use super::model::LoaderKind;

const NEOFORGE_LAUNCH_TARGET: &str = "neoforgeclient";
const NEOFORGE_VERSION_FLAG: &str = "--fml.neoForgeVersion";

/// NeoForge. Shares Forge's bootstrap main class; only the launch target differs.
pub struct NeoForgeMatcher;

impl LoaderMatcher for NeoForgeMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        identify_bootstrap(
            ctx,
            NEOFORGE_LAUNCH_TARGET,
            NEOFORGE_VERSION_FLAG,
            LoaderKind::NeoForge,
        )
    }
}

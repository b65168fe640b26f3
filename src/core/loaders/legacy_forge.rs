use super::context::MatchContext;
use super::matcher::{Decline, LoaderMatcher, MatchResult};
use super::model::{LoaderIdentification, LoaderKind};

const LAUNCHWRAPPER_MAIN_CLASS: &str = "net.minecraft.launchwrapper.Launch";
const FORGE_GROUP: &str = "net.minecraftforge";
const FORGE_ARTIFACT: &str = "forge";

/// Forge before 1.13, launched through launchwrapper.
///
/// Other launchwrapper users (LiteLoader and friends) are told apart by the
/// `net.minecraftforge:forge` library. Old Forge versions are written
/// `<minecraft>-<forge>` (`1.12.2-14.23.5.2860`), which supplies the
/// Minecraft version when the JSON has no `inheritsFrom`.
pub struct LegacyForgeMatcher;

impl LoaderMatcher for LegacyForgeMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        ctx.require_main_class(LAUNCHWRAPPER_MAIN_CLASS)?;
        let library = ctx.find_library(FORGE_GROUP, FORGE_ARTIFACT)?;
        let minecraft_version_type = ctx.version_type()?;

        let minecraft_version = match ctx.descriptor.inherits_from() {
            Some(parent) => parent,
            None => minecraft_prefix(&library.version)
                .ok_or(Decline::MissingField("inheritsFrom"))?,
        };

        Ok(LoaderIdentification {
            minecraft_version: minecraft_version.to_string(),
            minecraft_version_type,
            loader_version: Some(library.version.clone()),
            loader: LoaderKind::LegacyForge,
        })
    }
}

/// Everything before the first `-`, or the whole version if there is none.
fn minecraft_prefix(forge_version: &str) -> Option<&str> {
    forge_version
        .split('-')
        .next()
        .filter(|prefix| !prefix.is_empty())
}

use super::context::MatchContext;
use super::matcher::{Decline, LoaderMatcher, MatchResult};
use super::model::{LoaderIdentification, LoaderKind};

/// Main class shared by modern Forge and NeoForge (1.17+).
pub(super) const BOOTSTRAP_MAIN_CLASS: &str = "cpw.mods.bootstraplauncher.BootstrapLauncher";
const LAUNCH_TARGET_FLAG: &str = "--launchTarget";

const FORGE_LAUNCH_TARGET: &str = "forgeclient";
const FORGE_VERSION_FLAG: &str = "--fml.forgeVersion";

/// Modern Forge, identified by its bootstrap launcher and `forgeclient` target.
pub struct ForgeMatcher;

impl LoaderMatcher for ForgeMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        identify_bootstrap(
            ctx,
            FORGE_LAUNCH_TARGET,
            FORGE_VERSION_FLAG,
            LoaderKind::Forge,
        )
    }
}

/// Shared by Forge and NeoForge, which differ only in launch target and the
/// flag carrying their version.
pub(super) fn identify_bootstrap(
    ctx: &MatchContext<'_>,
    launch_target: &'static str,
    version_flag: &str,
    loader: LoaderKind,
) -> MatchResult {
    ctx.require_main_class(BOOTSTRAP_MAIN_CLASS)?;

    match ctx.flag(LAUNCH_TARGET_FLAG) {
        Some(found) if found == launch_target => {}
        found => {
            return Err(Decline::LaunchTarget {
                expected: launch_target,
                found: found.map(ToString::to_string),
            })
        }
    }

    Ok(LoaderIdentification {
        minecraft_version_type: ctx.version_type()?,
        minecraft_version: ctx.inherits_from()?.to_string(),
        loader_version: ctx.flag(version_flag).map(ToString::to_string),
        loader,
    })
}

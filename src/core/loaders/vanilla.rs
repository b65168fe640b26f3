use super::context::MatchContext;
use super::matcher::{Decline, LoaderMatcher, MatchResult};
use super::model::{LoaderIdentification, LoaderKind};

/// Catch-all tried last: vanilla, or a distribution no other candidate knows.
///
/// Still needs a version to report and a `type`; without either it declines.
pub struct UnknownMatcher;

impl LoaderMatcher for UnknownMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        let descriptor = ctx.descriptor;
        let minecraft_version = descriptor
            .id()
            .or_else(|| descriptor.inherits_from())
            .ok_or(Decline::MissingField("id"))?;

        Ok(LoaderIdentification {
            minecraft_version: minecraft_version.to_string(),
            minecraft_version_type: ctx.version_type()?,
            loader_version: None,
            loader: LoaderKind::Unknown,
        })
    }
}

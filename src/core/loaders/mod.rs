pub mod context;
pub mod fabric;
pub mod forge;
pub mod legacy_forge;
pub mod matcher;
pub mod model;
pub mod neoforge;
pub mod quilt;
pub mod vanilla;

pub use context::MatchContext;
pub use matcher::{identify, Decline, LoaderMatcher, MatchResult, Matcher};
pub use model::{LoaderIdentification, LoaderKind};

#[cfg(test)]
pub(crate) fn test_descriptor(
    value: serde_json::Value,
) -> crate::core::version::VersionDescriptor {
    crate::core::version::VersionDescriptor::from_value(&value).unwrap()
}

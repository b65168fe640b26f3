use thiserror::Error;
use tracing::{debug, trace};

use crate::core::version::VersionDescriptor;

use super::{
    context::MatchContext, fabric::FabricMatcher, forge::ForgeMatcher,
    legacy_forge::LegacyForgeMatcher, model::LoaderIdentification, model::LoaderKind,
    neoforge::NeoForgeMatcher, quilt::QuiltMatcher, vanilla::UnknownMatcher,
};

/// Why a candidate did not claim a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Decline {
    #[error("main class is {found:?}, expected {expected}")]
    MainClass {
        expected: &'static str,
        found: Option<String>,
    },

    #[error("launch target is {found:?}, expected {expected}")]
    LaunchTarget {
        expected: &'static str,
        found: Option<String>,
    },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("no {group}:{artifact} library")]
    LoaderLibrary {
        group: &'static str,
        artifact: &'static str,
    },
}

pub type MatchResult = Result<LoaderIdentification, Decline>;

pub trait LoaderMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult;
}

/// Static dispatch over the candidate set, no `Box<dyn>`.
pub enum Matcher {
    Forge(ForgeMatcher),
    NeoForge(NeoForgeMatcher),
    Fabric(FabricMatcher),
    Quilt(QuiltMatcher),
    LegacyForge(LegacyForgeMatcher),
    Unknown(UnknownMatcher),
}

impl Matcher {
    pub fn new(kind: LoaderKind) -> Self {
        match kind {
            LoaderKind::Forge => Self::Forge(ForgeMatcher),
            LoaderKind::NeoForge => Self::NeoForge(NeoForgeMatcher),
            LoaderKind::Fabric => Self::Fabric(FabricMatcher),
            LoaderKind::Quilt => Self::Quilt(QuiltMatcher),
            LoaderKind::LegacyForge => Self::LegacyForge(LegacyForgeMatcher),
            LoaderKind::Unknown => Self::Unknown(UnknownMatcher),
        }
    }

    pub fn kind(&self) -> LoaderKind {
        match self {
            Matcher::Forge(_) => LoaderKind::Forge,
            Matcher::NeoForge(_) => LoaderKind::NeoForge,
            Matcher::Fabric(_) => LoaderKind::Fabric,
            Matcher::Quilt(_) => LoaderKind::Quilt,
            Matcher::LegacyForge(_) => LoaderKind::LegacyForge,
            Matcher::Unknown(_) => LoaderKind::Unknown,
        }
    }

    pub fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        match self {
            Matcher::Forge(m) => m.identify(ctx),
            Matcher::NeoForge(m) => m.identify(ctx),
            Matcher::Fabric(m) => m.identify(ctx),
            Matcher::Quilt(m) => m.identify(ctx),
            Matcher::LegacyForge(m) => m.identify(ctx),
            Matcher::Unknown(m) => m.identify(ctx),
        }
    }
}

/// Try every candidate in [`LoaderKind::PRIORITY`] order and return the first
/// identification. `None` only if even the vanilla fallback declines.
pub fn identify(descriptor: &VersionDescriptor) -> Option<LoaderIdentification> {
    let ctx = MatchContext::new(descriptor);

    for kind in LoaderKind::PRIORITY {
        match Matcher::new(kind).identify(&ctx) {
            Ok(found) => {
                debug!("Identified {:?} as {}", descriptor.id(), found);
                return Some(found);
            }
            Err(decline) => trace!("{} declined {:?}: {}", kind, descriptor.id(), decline),
        }
    }

    debug!("No loader candidate matched {:?}", descriptor.id());
    None
}

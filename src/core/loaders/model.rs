use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::version::VersionType;

/// Loader identities the detector can report, strongly typed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    Forge,
    NeoForge,
    Fabric,
    Quilt,
    /// Forge before 1.13, launched through launchwrapper.
    LegacyForge,
    /// Vanilla, or a distribution none of the other candidates recognize.
    Unknown,
}

impl LoaderKind {
    /// Every kind, in the order candidates are tried.
    pub const PRIORITY: [LoaderKind; 6] = [
        LoaderKind::Forge,
        LoaderKind::NeoForge,
        LoaderKind::Fabric,
        LoaderKind::Quilt,
        LoaderKind::LegacyForge,
        LoaderKind::Unknown,
    ];
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderKind::Forge => write!(f, "FORGE"),
            LoaderKind::NeoForge => write!(f, "NEOFORGE"),
            LoaderKind::Fabric => write!(f, "FABRIC"),
            LoaderKind::Quilt => write!(f, "QUILT"),
            LoaderKind::LegacyForge => write!(f, "LEGACY_FORGE"),
            LoaderKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// What a version JSON was identified as.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct LoaderIdentification {
    /// Never empty.
    pub minecraft_version: String,
    pub minecraft_version_type: VersionType,
    /// `None` for [`LoaderKind::Unknown`].
    pub loader_version: Option<String>,
    pub loader: LoaderKind,
}

impl fmt::Display for LoaderIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (minecraft {} [{}], loader {})",
            self.loader,
            self.minecraft_version,
            self.minecraft_version_type,
            self.loader_version.as_deref().unwrap_or("none")
        )
    }
}

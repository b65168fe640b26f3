pub mod core;

use std::path::Path;

use tracing_subscriber::EnvFilter;

pub use crate::core::error::{DetectorError, DetectorResult};
pub use crate::core::loaders::{LoaderIdentification, LoaderKind};
pub use crate::core::maven::MavenCoordinate;
pub use crate::core::version::{VersionDescriptor, VersionType};

/// Install the `tracing` subscriber used by the binary.
///
/// Honors `RUST_LOG`; safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,modloader_detector=debug")),
        )
        .try_init();
}

/// Identify loader, Minecraft version and loader version from version JSON text.
///
/// Errors only when the text is not a JSON object; `Ok(None)` when no
/// candidate, not even the vanilla fallback, matches.
pub fn identify(json: &str) -> DetectorResult<Option<LoaderIdentification>> {
    Ok(VersionDescriptor::from_json_str(json)?.identify())
}

/// Like [`identify`], reporting only the loader.
pub fn find_loader(json: &str) -> DetectorResult<Option<LoaderKind>> {
    Ok(identify(json)?.map(|found| found.loader))
}

pub fn identify_value(json: &serde_json::Value) -> DetectorResult<Option<LoaderIdentification>> {
    Ok(VersionDescriptor::from_value(json)?.identify())
}

/// Read a version JSON file and identify it.
pub async fn identify_file(path: impl AsRef<Path>) -> DetectorResult<Option<LoaderIdentification>> {
    Ok(VersionDescriptor::read(path.as_ref()).await?.identify())
}

// ─── Mod Loader Detector Core ───
// Classifies a launcher version JSON into the mod loader that produced it.
//
// Architecture:
//   core/
//     maven/    — group:artifact:version coordinate parser
//     version/  — version JSON view, launch argument flattening, version types
//     loaders/  — Forge, NeoForge, Fabric, Quilt, LegacyForge, Unknown candidates
//     error.rs  — input-level errors

pub mod error;
pub mod loaders;
pub mod maven;
pub mod version;

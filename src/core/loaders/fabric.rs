use super::context::MatchContext;
use super::matcher::{LoaderMatcher, MatchResult};
use super::model::{LoaderIdentification, LoaderKind};

const FABRIC_MAIN_CLASS: &str = "net.fabricmc.loader.impl.launch.knot.KnotClient";
const FABRIC_GROUP: &str = "net.fabricmc";
const FABRIC_LOADER_ARTIFACT: &str = "fabric-loader";

/// Fabric, identified by its Knot client and the `fabric-loader` library.
pub struct FabricMatcher;

impl LoaderMatcher for FabricMatcher {
    fn identify(&self, ctx: &MatchContext<'_>) -> MatchResult {
        identify_knot(
            ctx,
            FABRIC_MAIN_CLASS,
            FABRIC_GROUP,
            FABRIC_LOADER_ARTIFACT,
            LoaderKind::Fabric,
        )
    }
}

/// Knot-based loaders (Fabric and its Quilt fork) carry their own version
/// only as the loader library coordinate.
pub(super) fn identify_knot(
    ctx: &MatchContext<'_>,
    main_class: &'static str,
    group: &'static str,
    artifact: &'static str,
    loader: LoaderKind,
) -> MatchResult {
    ctx.require_main_class(main_class)?;
    let library = ctx.find_library(group, artifact)?;

    Ok(LoaderIdentification {
        minecraft_version_type: ctx.version_type()?,
        minecraft_version: ctx.inherits_from()?.to_string(),
        loader_version: Some(library.version.clone()),
        loader,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loaders::matcher::Decline;
    use crate::core::loaders::test_descriptor as descriptor;
    use crate::core::version::VersionType;

    #[test]
    fn identifies_fabric() {
        let d = descriptor(serde_json::json!({
            "id": "fabric-loader-0.16.0-1.21",
            "inheritsFrom": "1.21",
            "type": "release",
            "mainClass": "net.fabricmc.loader.impl.launch.knot.KnotClient",
            "arguments": { "game": [], "jvm": ["-DFabricMcEmu= net.minecraft.client.main.Main "] },
            "libraries": [
                { "name": "org.ow2.asm:asm:9.7", "url": "https://maven.fabricmc.net/" },
                { "name": "net.fabricmc:intermediary:1.21", "url": "https://maven.fabricmc.net/" },
                { "name": "net.fabricmc:fabric-loader:0.16.0", "url": "https://maven.fabricmc.net/" }
            ]
        }));

        let found = FabricMatcher.identify(&MatchContext::new(&d)).unwrap();
        assert_eq!(found.loader, LoaderKind::Fabric);
        assert_eq!(found.minecraft_version, "1.21");
        assert_eq!(found.minecraft_version_type, VersionType::RELEASE);
        assert_eq!(found.loader_version.as_deref(), Some("0.16.0"));
    }

    #[test]
    fn library_lookup_ignores_case_and_first_wins() {
        let d = descriptor(serde_json::json!({
            "inheritsFrom": "24w14a",
            "type": "snapshot",
            "mainClass": "net.fabricmc.loader.impl.launch.knot.KnotClient",
            "libraries": [
                { "name": "broken" },
                { "name": "Net.FabricMC:Fabric-Loader:0.15.11" },
                { "name": "net.fabricmc:fabric-loader:0.16.0" }
            ]
        }));

        let found = FabricMatcher.identify(&MatchContext::new(&d)).unwrap();
        assert_eq!(found.loader_version.as_deref(), Some("0.15.11"));
        assert_eq!(found.minecraft_version_type, VersionType::SNAPSHOT);
    }

    #[test]
    fn declines_without_loader_library() {
        let d = descriptor(serde_json::json!({
            "inheritsFrom": "1.21",
            "type": "release",
            "mainClass": "net.fabricmc.loader.impl.launch.knot.KnotClient",
            "libraries": [{ "name": "net.fabricmc:intermediary:1.21" }]
        }));

        assert_eq!(
            FabricMatcher.identify(&MatchContext::new(&d)),
            Err(Decline::LoaderLibrary {
                group: "net.fabricmc",
                artifact: "fabric-loader",
            })
        );
    }

    #[test]
    fn declines_library_without_main_class() {
        let d = descriptor(serde_json::json!({
            "inheritsFrom": "1.21",
            "type": "release",
            "mainClass": "net.minecraft.client.main.Main",
            "libraries": [{ "name": "net.fabricmc:fabric-loader:0.16.0" }]
        }));

        assert!(matches!(
            FabricMatcher.identify(&MatchContext::new(&d)),
            Err(Decline::MainClass { .. })
        ));
    }
}

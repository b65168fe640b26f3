// ─── Version Type ───
// Release channel of a Minecraft version (`type` field of a version JSON).

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

/// Known channels keyed by lowercase name. Built on first lookup, read-only after.
static KNOWN_TYPES: OnceLock<HashMap<&'static str, VersionType>> = OnceLock::new();

/// A version type as published on piston-meta, or any other label carried
/// verbatim (lowercased) with `known == false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionType {
    name: Cow<'static, str>,
    known: bool,
}

impl VersionType {
    pub const RELEASE: VersionType = VersionType::registered("release");
    pub const SNAPSHOT: VersionType = VersionType::registered("snapshot");
    pub const OLD_BETA: VersionType = VersionType::registered("old_beta");
    pub const OLD_ALPHA: VersionType = VersionType::registered("old_alpha");

    const fn registered(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            known: true,
        }
    }

    /// Classify a raw type label. Capitalization is ignored.
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        match known_types().get(lowered.as_str()) {
            Some(known) => known.clone(),
            None => Self {
                name: Cow::Owned(lowered),
                known: false,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is one of `release`, `snapshot`, `old_beta`, `old_alpha`.
    pub fn is_known(&self) -> bool {
        self.known
    }
}

fn known_types() -> &'static HashMap<&'static str, VersionType> {
    KNOWN_TYPES.get_or_init(|| {
        ["release", "snapshot", "old_beta", "old_alpha"]
            .into_iter()
            .map(|name| (name, VersionType::registered(name)))
            .collect()
    })
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(VersionType::from_name("RELEASE"), VersionType::RELEASE);
        assert_eq!(VersionType::from_name("release"), VersionType::RELEASE);
        assert_eq!(VersionType::from_name("Old_Alpha"), VersionType::OLD_ALPHA);
    }

    #[test]
    fn all_four_channels_are_known() {
        for name in ["release", "snapshot", "old_beta", "old_alpha"] {
            let t = VersionType::from_name(name);
            assert!(t.is_known(), "{name} should be known");
            assert_eq!(t.name(), name);
        }
    }

    #[test]
    fn unknown_label_is_kept_lowercased() {
        let t = VersionType::from_name("Pending");
        assert!(!t.is_known());
        assert_eq!(t.name(), "pending");
    }

    #[test]
    fn empty_label_is_unknown() {
        let t = VersionType::from_name("");
        assert!(!t.is_known());
        assert_eq!(t.name(), "");
    }

    #[test]
    fn registry_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| VersionType::from_name("SNAPSHOT")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), VersionType::SNAPSHOT);
        }
    }

    #[test]
    fn serializes_name_and_flag() {
        let json = serde_json::to_value(VersionType::from_name("pending")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "pending", "known": false}));
    }
}

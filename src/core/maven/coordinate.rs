use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{DetectorError, DetectorResult};

/// A `groupId:artifactId:version` library coordinate as it appears in the
/// `libraries[].name` field of a version JSON.
///
/// Segments past the third (classifiers, `@packaging` suffixes glued onto the
/// version) are not interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenCoordinate {
    /// Parse a coordinate string.
    ///
    /// The first three `:`-separated segments are taken verbatim, without
    /// trimming or case folding. Fewer than three segments is an error.
    pub fn parse(coord: &str) -> DetectorResult<Self> {
        let mut parts = coord.split(':');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(group_id), Some(artifact_id), Some(version)) => Ok(Self {
                group_id: group_id.to_string(),
                artifact_id: artifact_id.to_string(),
                version: version.to_string(),
            }),
            _ => Err(DetectorError::InvalidCoordinate(coord.to_string())),
        }
    }

    /// Case-insensitive comparison of group and artifact.
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id.eq_ignore_ascii_case(group_id)
            && self.artifact_id.eq_ignore_ascii_case(artifact_id)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

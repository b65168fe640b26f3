use crate::core::maven::MavenCoordinate;
use crate::core::version::{arguments, VersionDescriptor, VersionType};

use super::matcher::Decline;

/// Everything a candidate needs, derived once per classification so that
/// candidates sharing a main class don't re-flatten arguments.
pub struct MatchContext<'a> {
    pub descriptor: &'a VersionDescriptor,
    pub game_args: Vec<String>,
    pub coordinates: Vec<MavenCoordinate>,
}

impl<'a> MatchContext<'a> {
    pub fn new(descriptor: &'a VersionDescriptor) -> Self {
        Self {
            descriptor,
            game_args: descriptor.game_arguments(),
            coordinates: descriptor.coordinates(),
        }
    }

    pub fn require_main_class(&self, expected: &'static str) -> Result<(), Decline> {
        match self.descriptor.main_class() {
            Some(found) if found == expected => Ok(()),
            found => Err(Decline::MainClass {
                expected,
                found: found.map(ToString::to_string),
            }),
        }
    }

    pub fn flag(&self, flag: &str) -> Option<&str> {
        arguments::flag_value(&self.game_args, flag)
    }

    /// First library matching `group:artifact`, case-insensitively.
    pub fn find_library(
        &self,
        group: &'static str,
        artifact: &'static str,
    ) -> Result<&MavenCoordinate, Decline> {
        self.coordinates
            .iter()
            .find(|coord| coord.matches(group, artifact))
            .ok_or(Decline::LoaderLibrary { group, artifact })
    }

    pub fn version_type(&self) -> Result<VersionType, Decline> {
        self.descriptor
            .version_type()
            .ok_or(Decline::MissingField("type"))
    }

    pub fn inherits_from(&self) -> Result<&str, Decline> {
        self.descriptor
            .inherits_from()
            .ok_or(Decline::MissingField("inheritsFrom"))
    }
}

pub mod arguments;
pub mod descriptor;
pub mod version_type;

pub use arguments::Argument;
pub use descriptor::VersionDescriptor;
pub use version_type::VersionType;

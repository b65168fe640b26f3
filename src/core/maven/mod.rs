mod coordinate;

pub use coordinate::MavenCoordinate;

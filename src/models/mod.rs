//! Core data models for coordinate resolution.

pub mod address;
pub mod coordinate;
pub mod outcome;

pub use address::{AddressComponent, AddressType, GeocodeResponse, GeocodeResult};
pub use coordinate::Coordinate;
pub use outcome::{ResolutionOutcome, SpatialRow};

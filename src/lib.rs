//! locstate - resolve a coordinate to its enclosing state or province
//!
//! Two interchangeable strategies share one output contract: a PostGIS
//! point-in-polygon query, or a reverse-geocode request followed by
//! extraction of the first-level administrative area.

pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod output;
pub mod resolver;
pub mod spatial;

pub use config::Config;
pub use error::{ConfigError, CoordinateError, ResolveError, UsageError};
pub use models::{AddressType, Coordinate, ResolutionOutcome};
pub use output::{render, PrimaryKey};
pub use resolver::{locate, Resolver, Strategy};

//! Spatial (PostGIS) region lookup.
//!
//! Runs a single parameterized `ST_Contains` query against a table of
//! named administrative polygons.

mod query;
mod resolver;

pub use query::{containment_query, quote_identifier, SRID};
pub use resolver::{health_check, SpatialResolver};

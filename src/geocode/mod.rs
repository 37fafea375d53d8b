//! Reverse geocoding over HTTP.
//!
//! Sends one `latlng` request and extracts the first-level administrative
//! area from the best result's address components.

mod client;
mod extract;

pub use client::GeocodeResolver;
pub use extract::{extract_component, find_component, NameForm};

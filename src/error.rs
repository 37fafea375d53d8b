//! Error types for argument parsing, configuration, and resolution.

use std::error::Error as StdError;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::AddressType;

/// A coordinate that cannot describe a point on the globe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinate values must be finite numbers")]
    NotFinite,
}

/// Malformed command-line input. Nothing runs after one of these.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("must have 2 arguments: you are passing {}", count_arguments(*.0))]
    WrongArgumentCount(usize),

    #[error("invalid coordinate {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Configuration that cannot be loaded or does not describe a usable backend.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid SQL identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid geocode endpoint {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure of a single resolution against either backend.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connect, execute, or row decode failure from the spatial database.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The geocoding endpoint could not be reached.
    #[error("{}", error_chain(.0))]
    Http(#[from] reqwest::Error),

    #[error("request failed with status code {status}: {query}")]
    Status { status: u16, query: String },

    #[error("failed to decode geocode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered 200 but reported an error in its body.
    #[error("geocode service returned {status}: {message}")]
    Service { status: String, message: String },

    #[error("no results for request {query}")]
    NoResults { query: String },

    #[error("could not find state ({0} component missing)")]
    ComponentNotFound(AddressType),
}

fn count_arguments(n: usize) -> String {
    if n == 1 {
        "1 argument".to_string()
    } else {
        format!("{} arguments", n)
    }
}

/// `err: cause: root cause`. reqwest keeps the transport failure in `source()`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

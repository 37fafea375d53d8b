//! Strategy selection and the single-invocation resolution pipeline.

use clap::ValueEnum;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ConfigError, ResolveError};
use crate::geocode::GeocodeResolver;
use crate::models::{Coordinate, ResolutionOutcome};
use crate::spatial::SpatialResolver;

/// Which backend answers the query. The two are never combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Point-in-polygon query against PostGIS
    #[default]
    Spatial,
    /// Reverse geocoding over HTTP
    Geocode,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Spatial => write!(f, "spatial"),
            Strategy::Geocode => write!(f, "geocode"),
        }
    }
}

pub enum Resolver {
    Spatial(SpatialResolver),
    Geocode(GeocodeResolver),
}

impl Resolver {
    pub fn from_config(strategy: Strategy, config: &Config) -> Result<Self, ConfigError> {
        Ok(match strategy {
            Strategy::Spatial => Resolver::Spatial(SpatialResolver::new(&config.database)?),
            Strategy::Geocode => Resolver::Geocode(GeocodeResolver::new(&config.geocode)?),
        })
    }

    /// Resolve one coordinate. `Ok(None)` means a successful lookup with no match.
    pub async fn lookup(&self, coordinate: Coordinate) -> Result<Option<String>, ResolveError> {
        match self {
            Resolver::Spatial(spatial) => spatial.resolve(coordinate).await,
            Resolver::Geocode(geocode) => geocode.resolve(coordinate).await.map(Some),
        }
    }

    /// Resolve and normalize
    pub async fn resolve(&self, coordinate: Coordinate) -> ResolutionOutcome {
        ResolutionOutcome::from_result(self.lookup(coordinate).await)
    }
}

/// Run the whole pipeline for raw `<lat> <lng>` arguments.
///
/// Usage and configuration errors are reported before any backend is contacted.
pub async fn locate<S: AsRef<str>>(
    args: &[S],
    strategy: Strategy,
    config: &Config,
) -> ResolutionOutcome {
    let outcome = ResolutionOutcome::from_result(run(args, strategy, config).await);
    if let ResolutionOutcome::Failed(message) = &outcome {
        error!("Resolution failed: {}", message);
    }
    outcome
}

async fn run<S: AsRef<str>>(
    args: &[S],
    strategy: Strategy,
    config: &Config,
) -> Result<Option<String>, ResolveError> {
    let coordinate = Coordinate::from_args(args)?;
    let resolver = Resolver::from_config(strategy, config)?;

    info!(
        "Resolving ({}, {}) with {} strategy",
        coordinate.latitude, coordinate.longitude, strategy
    );

    resolver.lookup(coordinate).await
}

//! Spatial resolver backed by a PostGIS polygon table.

use sqlx::{Connection, PgConnection};
use tracing::{debug, info, warn};

use super::query::containment_query;
use crate::config::DatabaseConfig;
use crate::error::{ConfigError, ResolveError};
use crate::models::{Coordinate, SpatialRow};

/// Point-in-polygon lookup against an administrative boundary table
#[derive(Debug, Clone)]
pub struct SpatialResolver {
    url: String,
    sql: String,
    health_check: bool,
}

impl SpatialResolver {
    pub fn new(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            url: config.url.clone(),
            sql: containment_query(config)?,
            health_check: config.health_check,
        })
    }

    /// Find the region containing `coordinate`.
    ///
    /// Returns `Ok(None)` when no polygon contains the point. The connection
    /// is opened for this call only and closed before returning on every path.
    pub async fn resolve(&self, coordinate: Coordinate) -> Result<Option<String>, ResolveError> {
        debug!("Connecting to spatial database");
        let mut conn = PgConnection::connect(&self.url).await?;

        let result = self.query(&mut conn, coordinate).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }

        let row = result?;
        Ok(row.and_then(|r| r.name))
    }

    async fn query(
        &self,
        conn: &mut PgConnection,
        coordinate: Coordinate,
    ) -> Result<Option<SpatialRow>, ResolveError> {
        if self.health_check {
            health_check(conn).await?;
        }

        let point = coordinate.to_point();
        let row: Option<SpatialRow> = sqlx::query_as::<_, SpatialRow>(&self.sql)
            .bind(point.x())
            .bind(point.y())
            .fetch_optional(&mut *conn)
            .await?;

        match &row {
            Some(r) => info!(
                "Point ({}, {}) is inside {:?}",
                point.x(),
                point.y(),
                r.name
            ),
            None => info!("Point ({}, {}) is outside all polygons", point.x(), point.y()),
        }

        Ok(row)
    }
}

/// Verify the server has PostGIS available
pub async fn health_check(conn: &mut PgConnection) -> Result<String, ResolveError> {
    let version: String = sqlx::query_scalar::<_, String>("SELECT PostGIS_Version()")
        .fetch_one(&mut *conn)
        .await?;
    debug!("PostGIS version {}", version);
    Ok(version)
}

//! Containment query construction.
//!
//! Identifiers come from configuration and cannot be bound as parameters,
//! so they are validated and quoted here. The point itself is always bound.

use crate::config::DatabaseConfig;
use crate::error::ConfigError;

/// EPSG:4326 (WGS 84)
pub const SRID: i32 = 4326;

/// Quote a possibly schema-qualified identifier (`table` or `schema.table`).
pub fn quote_identifier(raw: &str) -> Result<String, ConfigError> {
    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| is_plain_identifier(p)) {
        return Err(ConfigError::InvalidIdentifier(raw.to_string()));
    }

    Ok(parts
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join("."))
}

fn is_plain_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build the point-in-polygon query. `$1` is longitude, `$2` latitude.
pub fn containment_query(config: &DatabaseConfig) -> Result<String, ConfigError> {
    let table = quote_identifier(&config.table)?;
    let name = quote_identifier(&config.name_column)?;
    let geom = quote_identifier(&config.geometry_column)?;

    Ok(format!(
        "SELECT {name}::text AS name FROM {table} \
         WHERE ST_Contains({geom}, ST_SetSRID(ST_MakePoint($1, $2), {SRID})) \
         LIMIT 1"
    ))
}

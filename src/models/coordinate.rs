//! Input coordinate and command-line parsing.

use geo::Point;

use crate::error::{CoordinateError, UsageError};

/// Geographic point (lat/lon), validated on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse the `<latitude> <longitude>` positional arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        if args.len() != 2 {
            return Err(UsageError::WrongArgumentCount(args.len()));
        }

        let latitude = parse_component(args[0].as_ref())?;
        let longitude = parse_component(args[1].as_ref())?;

        Ok(Self::new(latitude, longitude)?)
    }

    /// Point in (x = longitude, y = latitude) order, as PostGIS expects
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// `lat,lng` form used by reverse-geocode requests
    pub fn latlng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

fn parse_component(raw: &str) -> Result<f64, UsageError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| UsageError::InvalidNumber {
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_args() {
        let coord = Coordinate::from_args(&["28.1", "-81.6"]).unwrap();
        assert_eq!(coord.latitude, 28.1);
        assert_eq!(coord.longitude, -81.6);
        assert_eq!(coord.latlng(), "28.1,-81.6");
    }

    #[test]
    fn test_point_is_lon_lat() {
        let coord = Coordinate::new(28.1, -81.6).unwrap();
        let point = coord.to_point();
        assert_eq!(point.x(), -81.6);
        assert_eq!(point.y(), 28.1);
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = Coordinate::from_args(&["1", "2", "3", "4"]).unwrap_err();
        assert!(matches!(err, UsageError::WrongArgumentCount(4)));
        assert_eq!(
            err.to_string(),
            "must have 2 arguments: you are passing 4 arguments"
        );

        let none: [&str; 0] = [];
        assert!(matches!(
            Coordinate::from_args(&none),
            Err(UsageError::WrongArgumentCount(0))
        ));
    }

    #[test]
    fn test_unparsable_number() {
        let err = Coordinate::from_args(&["north", "-81.6"]).unwrap_err();
        assert!(matches!(err, UsageError::InvalidNumber { ref value, .. } if value == "north"));
    }

    #[test]
    fn test_range_validation() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(CoordinateError::LongitudeOutOfRange(-180.5))
        );
        assert_eq!(Coordinate::new(f64::NAN, 0.0), Err(CoordinateError::NotFinite));
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_infinite_literal_is_rejected() {
        let err = Coordinate::from_args(&["inf", "0"]).unwrap_err();
        assert!(matches!(
            err,
            UsageError::Coordinate(CoordinateError::NotFinite)
        ));
    }
}

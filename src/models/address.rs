//! Reverse-geocoding address hierarchy types.

use serde::{Deserialize, Serialize};

/// Geocoder address classification.
/// See: https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressType {
    StreetNumber,
    Route,
    Premise,
    Neighborhood,
    Sublocality,
    /// City / town
    Locality,
    /// State / province
    AdministrativeAreaLevel1,
    /// County
    AdministrativeAreaLevel2,
    AdministrativeAreaLevel3,
    AdministrativeAreaLevel4,
    AdministrativeAreaLevel5,
    Country,
    PostalCode,
    PostalTown,
    Political,
    /// Any classification not listed above, kept verbatim
    Other(String),
}

impl AddressType {
    /// Get the wire name for this classification
    pub fn as_str(&self) -> &str {
        match self {
            AddressType::StreetNumber => "street_number",
            AddressType::Route => "route",
            AddressType::Premise => "premise",
            AddressType::Neighborhood => "neighborhood",
            AddressType::Sublocality => "sublocality",
            AddressType::Locality => "locality",
            AddressType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            AddressType::AdministrativeAreaLevel2 => "administrative_area_level_2",
            AddressType::AdministrativeAreaLevel3 => "administrative_area_level_3",
            AddressType::AdministrativeAreaLevel4 => "administrative_area_level_4",
            AddressType::AdministrativeAreaLevel5 => "administrative_area_level_5",
            AddressType::Country => "country",
            AddressType::PostalCode => "postal_code",
            AddressType::PostalTown => "postal_town",
            AddressType::Political => "political",
            AddressType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for AddressType {
    fn from(raw: &str) -> Self {
        match raw {
            "street_number" => AddressType::StreetNumber,
            "route" => AddressType::Route,
            "premise" => AddressType::Premise,
            "neighborhood" => AddressType::Neighborhood,
            "sublocality" => AddressType::Sublocality,
            "locality" => AddressType::Locality,
            "administrative_area_level_1" => AddressType::AdministrativeAreaLevel1,
            "administrative_area_level_2" => AddressType::AdministrativeAreaLevel2,
            "administrative_area_level_3" => AddressType::AdministrativeAreaLevel3,
            "administrative_area_level_4" => AddressType::AdministrativeAreaLevel4,
            "administrative_area_level_5" => AddressType::AdministrativeAreaLevel5,
            "country" => AddressType::Country,
            "postal_code" => AddressType::PostalCode,
            "postal_town" => AddressType::PostalTown,
            "political" => AddressType::Political,
            other => AddressType::Other(other.to_string()),
        }
    }
}

impl From<String> for AddressType {
    fn from(raw: String) -> Self {
        AddressType::from(raw.as_str())
    }
}

impl From<AddressType> for String {
    fn from(kind: AddressType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One semantic fragment of a geocoded address (a city, a state, a country...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,

    #[serde(default)]
    pub short_name: String,

    /// Classification list; only membership matters
    #[serde(default)]
    pub types: Vec<AddressType>,
}

impl AddressComponent {
    pub fn has_type(&self, kind: &AddressType) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

/// One candidate match returned by the geocoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: String,

    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Full reverse-geocode response document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,

    /// Service-level status ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Whether the service itself reported a failure.
    ///
    /// Absent status is accepted so that geocoders which only return
    /// `results` still decode.
    pub fn service_error(&self) -> Option<(&str, &str)> {
        match self.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => None,
            Some(status) => Some((status, self.error_message.as_deref().unwrap_or(""))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_round_trip_through_str() {
        let kind = AddressType::from("administrative_area_level_1");
        assert_eq!(kind, AddressType::AdministrativeAreaLevel1);
        assert_eq!(kind.as_str(), "administrative_area_level_1");
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let kind = AddressType::from("colloquial_area");
        assert_eq!(kind, AddressType::Other("colloquial_area".to_string()));
        assert_eq!(kind.to_string(), "colloquial_area");
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let kind = AddressType::from("Administrative_Area_Level_1");
        assert_ne!(kind, AddressType::AdministrativeAreaLevel1);
    }

    #[test]
    fn test_decode_response_document() {
        let body = r#"{
            "results": [{
                "formatted_address": "Lake Wales, FL, USA",
                "address_components": [
                    {"long_name": "Polk County", "short_name": "Polk County",
                     "types": ["administrative_area_level_2", "political"]},
                    {"long_name": "Florida", "short_name": "FL",
                     "types": ["administrative_area_level_1", "political"]}
                ]
            }],
            "status": "OK"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);
        let components = &response.results[0].address_components;
        assert!(components[1].has_type(&AddressType::AdministrativeAreaLevel1));
        assert!(components[0].has_type(&AddressType::Political));
        assert!(response.service_error().is_none());
    }

    #[test]
    fn test_service_error_status() {
        let body = r#"{"results": [], "status": "REQUEST_DENIED",
                       "error_message": "The provided API key is invalid."}"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.service_error(),
            Some(("REQUEST_DENIED", "The provided API key is invalid."))
        );
    }

    #[test]
    fn test_zero_results_status_is_not_a_service_error() {
        let body = r#"{"results": [], "status": "ZERO_RESULTS"}"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        assert!(response.service_error().is_none());
    }
}

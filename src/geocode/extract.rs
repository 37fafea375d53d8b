//! Address component extraction from reverse-geocode responses.

use tracing::debug;

use crate::error::ResolveError;
use crate::models::{AddressComponent, AddressType, GeocodeResponse};

/// First component whose types contain `kind`, scanning in order
pub fn find_component<'a>(
    components: &'a [AddressComponent],
    kind: &AddressType,
) -> Option<&'a AddressComponent> {
    components.iter().find(|c| c.has_type(kind))
}

/// Which of a component's names to report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameForm {
    #[default]
    Long,
    Short,
}

impl NameForm {
    fn pick(self, component: &AddressComponent) -> &str {
        match self {
            NameForm::Long => &component.long_name,
            NameForm::Short => &component.short_name,
        }
    }
}

/// Pull the `kind` component out of the first result of a decoded response.
///
/// `query` is only used to describe the request in error messages.
pub fn extract_component(
    response: &GeocodeResponse,
    kind: &AddressType,
    form: NameForm,
    query: &str,
) -> Result<String, ResolveError> {
    if let Some((status, message)) = response.service_error() {
        return Err(ResolveError::Service {
            status: status.to_string(),
            message: message.to_string(),
        });
    }

    debug!("Geocode response has {} results", response.results.len());

    // Only the first (best) candidate is consulted
    let first = response.results.first().ok_or_else(|| ResolveError::NoResults {
        query: query.to_string(),
    })?;

    find_component(&first.address_components, kind)
        .map(|c| form.pick(c).to_string())
        .ok_or_else(|| ResolveError::ComponentNotFound(kind.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeocodeResult;

    fn component(long: &str, short: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: types.iter().map(|t| AddressType::from(*t)).collect(),
        }
    }

    fn response(components: Vec<AddressComponent>) -> GeocodeResponse {
        GeocodeResponse {
            results: vec![GeocodeResult {
                formatted_address: "somewhere".to_string(),
                address_components: components,
            }],
            status: Some("OK".to_string()),
            error_message: None,
        }
    }

    #[test]
    fn test_state_found_at_any_position() {
        let state = component("Florida", "FL", &["administrative_area_level_1", "political"]);
        let others = [
            component("Lake Wales", "Lake Wales", &["locality", "political"]),
            component("Polk County", "Polk County", &["administrative_area_level_2"]),
            component("United States", "US", &["country", "political"]),
        ];

        for pos in 0..=others.len() {
            let mut components = others.to_vec();
            components.insert(pos, state.clone());
            let name = extract_component(
                &response(components),
                &AddressType::AdministrativeAreaLevel1,
                NameForm::Long,
                "latlng=28.1,-81.6",
            )
            .unwrap();
            assert_eq!(name, "Florida");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let components = vec![
            component("First", "1", &["administrative_area_level_1"]),
            component("Second", "2", &["administrative_area_level_1"]),
        ];
        let found = find_component(&components, &AddressType::AdministrativeAreaLevel1).unwrap();
        assert_eq!(found.long_name, "First");
    }

    #[test]
    fn test_short_name() {
        let components = vec![component("Florida", "FL", &["administrative_area_level_1"])];
        let name = extract_component(
            &response(components),
            &AddressType::AdministrativeAreaLevel1,
            NameForm::Short,
            "",
        )
        .unwrap();
        assert_eq!(name, "FL");
    }

    #[test]
    fn test_missing_state() {
        let components = vec![
            component("Atlantic Ocean", "Atlantic Ocean", &["natural_feature"]),
            component("Polk County", "Polk County", &["administrative_area_level_2"]),
        ];
        let err = extract_component(
            &response(components),
            &AddressType::AdministrativeAreaLevel1,
            NameForm::Long,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::ComponentNotFound(_)));
        assert!(err.to_string().starts_with("could not find state"));
    }

    #[test]
    fn test_only_first_result_is_consulted() {
        let mut resp = response(vec![component("Nowhere", "NW", &["locality"])]);
        resp.results.push(GeocodeResult {
            formatted_address: "second".to_string(),
            address_components: vec![component("Florida", "FL", &["administrative_area_level_1"])],
        });

        let err = extract_component(
            &resp,
            &AddressType::AdministrativeAreaLevel1,
            NameForm::Long,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::ComponentNotFound(_)));
    }

    #[test]
    fn test_zero_results() {
        let resp = GeocodeResponse {
            results: vec![],
            status: Some("ZERO_RESULTS".to_string()),
            error_message: None,
        };
        let err = extract_component(
            &resp,
            &AddressType::AdministrativeAreaLevel1,
            NameForm::Long,
            "latlng=0,0",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "no results for request latlng=0,0");
    }

    #[test]
    fn test_service_error_wins_over_counting() {
        let resp = GeocodeResponse {
            results: vec![],
            status: Some("OVER_QUERY_LIMIT".to_string()),
            error_message: Some("You have exceeded your daily request quota".to_string()),
        };
        let err = extract_component(
            &resp,
            &AddressType::AdministrativeAreaLevel1,
            NameForm::Long,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::Service { ref status, .. } if status == "OVER_QUERY_LIMIT"));
    }
}

//! Human-readable summary of a locations query.

use serde_json::Value;

/// Summarize location results for an ISO country code.
///
/// Records without a usable `name` are skipped in the sample but still
/// counted in the total.
pub fn build_locations_summary(locations: &[Value], iso_code: &str) -> String {
    if locations.is_empty() {
        return format!("No locations found for ISO code {}.", iso_code);
    }

    let names: Vec<&str> = locations
        .iter()
        .filter_map(|loc| loc.get("name").and_then(Value::as_str))
        .filter(|name| !name.is_empty())
        .collect();
    let sample = if names.is_empty() {
        "No names available".to_string()
    } else {
        names[..names.len().min(3)].join(", ")
    };

    format!("{} locations found. Sample: {}.", locations.len(), sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_list() {
        assert_eq!(
            build_locations_summary(&[], "HK"),
            "No locations found for ISO code HK."
        );
    }

    #[test]
    fn test_sample_is_first_three_names() {
        let locations = vec![
            json!({"name": "Tung Chung"}),
            json!({"name": "Mong Kok"}),
            json!({"name": "Central/Western"}),
            json!({"name": "Causeway Bay"}),
        ];
        assert_eq!(
            build_locations_summary(&locations, "HK"),
            "4 locations found. Sample: Tung Chung, Mong Kok, Central/Western."
        );
    }

    #[test]
    fn test_nameless_records_counted_but_skipped() {
        let locations = vec![
            json!({"id": 7727}),
            json!({"name": null}),
            json!({"name": "Tung Chung"}),
        ];
        assert_eq!(
            build_locations_summary(&locations, "HK"),
            "3 locations found. Sample: Tung Chung."
        );
    }

    #[test]
    fn test_no_usable_names() {
        let locations = vec![json!({"id": 1}), json!({"id": 2})];
        assert_eq!(
            build_locations_summary(&locations, "HK"),
            "2 locations found. Sample: No names available."
        );
    }
}

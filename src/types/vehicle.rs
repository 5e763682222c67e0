use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CarHubError;

/// A single vehicle record as returned by the catalog endpoint.
///
/// Deserialization is tolerant: the endpoint's shape is not guaranteed, so
/// missing fields fall back to their defaults instead of failing the decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    pub city_mpg: Option<f64>,
    pub class: Option<String>,
    pub combination_mpg: Option<f64>,
    pub cylinders: Option<f64>,
    pub displacement: Option<f64>,
    pub drive: Option<String>,
    pub fuel_type: Option<String>,
    pub highway_mpg: Option<f64>,
    pub make: String,
    pub model: String,
    pub transmission: Option<String>,
    pub year: u32,
}

impl VehicleRecord {
    /// Decode a raw catalog payload into a list of records.
    ///
    /// The fetch path hands back unvalidated JSON; callers that want typed
    /// records opt in here.
    pub fn list_from_value(value: &Value) -> Result<Vec<VehicleRecord>, CarHubError> {
        serde_json::from_value(value.clone()).map_err(CarHubError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_catalog_payload() {
        let payload = json!([
            {
                "city_mpg": 28,
                "class": "compact car",
                "combination_mpg": 31,
                "cylinders": 4,
                "displacement": 1.8,
                "drive": "fwd",
                "fuel_type": "gas",
                "highway_mpg": 36,
                "make": "toyota",
                "model": "corolla",
                "transmission": "a",
                "year": 2020
            }
        ]);
        let records = VehicleRecord::list_from_value(&payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].make, "toyota");
        assert_eq!(records[0].city_mpg, Some(28.0));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let payload = json!([{ "make": "tesla", "model": "model 3" }]);
        let records = VehicleRecord::list_from_value(&payload).unwrap();
        assert_eq!(records[0].year, 0);
        assert!(records[0].fuel_type.is_none());
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let payload = json!({ "error": "rate limited" });
        assert!(matches!(
            VehicleRecord::list_from_value(&payload),
            Err(CarHubError::Json(_))
        ));
    }
}

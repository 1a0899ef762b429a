use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Body of a forward geocoding response.
///
/// Only `results` is required to interpret a response;
/// `status` and `error_message` are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default, deserialize_with = "present")]
    pub results: Option<Results>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

// Distinguishes `"results": null` from a missing field.
fn present<'de, D>(deserializer: D) -> Result<Option<Results>, D::Error>
where
    D: Deserializer<'de>,
{
    Results::deserialize(deserializer).map(Some)
}

/// The shapes the `results` field is known to take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Results {
    Single(Map<String, Value>),
    List(Vec<Value>),
    Other(Value),
}

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub formatted_address  : String,
    pub geometry           : Geometry,
    pub address_components : Vec<AddressComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_results_field() {
        let res: GeocodeResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(res.results.is_none());
        assert_eq!(res.status.as_deref(), Some("OK"));
    }

    #[test]
    fn null_results_field() {
        let res: GeocodeResponse = serde_json::from_str(r#"{"results":null}"#).unwrap();
        assert_eq!(res.results, Some(Results::Other(Value::Null)));
    }

    #[test]
    fn results_shapes() {
        let res: GeocodeResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert_eq!(res.results, Some(Results::List(vec![])));

        let res: GeocodeResponse =
            serde_json::from_str(r#"{"results":{"formatted_address":"x"}}"#).unwrap();
        assert!(matches!(res.results, Some(Results::Single(_))));

        let res: GeocodeResponse = serde_json::from_str(r#"{"results":"nope"}"#).unwrap();
        assert_eq!(res.results, Some(Results::Other(Value::from("nope"))));
    }

    #[test]
    fn candidate_without_short_name() {
        let json = r#"{
            "formatted_address": "350 Jay St, Brooklyn, NY 11201, USA",
            "geometry": { "location": { "lat": 40.6928, "lng": -73.9872 } },
            "address_components": [ { "long_name": "Jay Street", "types": ["route"] } ]
        }"#;
        let c: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.address_components[0].short_name, None);
        assert_eq!(c.geometry.location.lng, -73.9872);
    }
}

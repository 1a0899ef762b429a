use crate::{entities::AddressQuery, gateways::geocode::GeoCodingGateway};
use anyhow::anyhow;
use std::{cell::RefCell, collections::HashMap};

/// Answers lookups with canned bodies and records every request.
#[derive(Default)]
pub struct MockGeoCodingGateway {
    responses: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MockGeoCodingGateway {
    pub fn respond(mut self, address: &str, body: impl Into<String>) -> Self {
        self.responses.insert(address.to_owned(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoCodingGateway {
    fn forward(&self, address: &AddressQuery) -> anyhow::Result<String> {
        self.requests.borrow_mut().push(address.to_string());
        self.responses
            .get(address.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("connection refused"))
    }
}

pub mod fixtures {

    pub const JAY_ST_CANDIDATE: &str = r#"{
        "address_components": [
            { "long_name": "350", "short_name": "350", "types": ["street_number"] },
            { "long_name": "Jay Street", "short_name": "Jay St", "types": ["route"] },
            { "long_name": "Downtown Brooklyn", "short_name": "Downtown Brooklyn", "types": ["neighborhood", "political"] },
            { "long_name": "Brooklyn", "short_name": "Brooklyn", "types": ["political", "sublocality", "sublocality_level_1"] },
            { "long_name": "New York", "short_name": "New York", "types": ["locality", "political"] },
            { "long_name": "11201", "short_name": "11201", "types": ["postal_code"] }
        ],
        "formatted_address": "350 Jay St, Brooklyn, NY 11201, USA",
        "geometry": {
            "location": { "lat": 40.6928, "lng": -73.9872 },
            "location_type": "ROOFTOP"
        },
        "place_id": "ChIJ3bH4Xk9awokR2tDaTN0jfEk",
        "types": ["street_address"]
    }"#;

    pub fn jay_st() -> String {
        format!(r#"{{ "results": [{JAY_ST_CANDIDATE}], "status": "OK" }}"#)
    }

    pub const ZERO_RESULTS: &str = r#"{ "results": [], "status": "ZERO_RESULTS" }"#;

    pub const PROSPECT_PARK: &str = r#"{
        "results": [
            {
                "address_components": [
                    { "long_name": "Prospect Park", "short_name": "Prospect Park", "types": ["establishment", "park", "point_of_interest"] },
                    { "long_name": "Brooklyn", "short_name": "Brooklyn", "types": ["political", "sublocality", "sublocality_level_1"] },
                    { "long_name": "New York", "short_name": "New York", "types": ["locality", "political"] }
                ],
                "formatted_address": "Prospect Park, Brooklyn, NY, USA",
                "geometry": { "location": { "lat": 40.6602, "lng": -73.969 } },
                "types": ["establishment", "park", "point_of_interest"]
            }
        ],
        "status": "OK"
    }"#;

    /// Five candidates for "Main St".
    pub fn main_st() -> String {
        let candidates: Vec<_> = ["NY", "NJ", "CT", "PA", "MA"]
            .iter()
            .enumerate()
            .map(|(i, state)| {
                format!(
                    r#"{{
                        "address_components": [
                            {{ "long_name": "Main Street", "short_name": "Main St", "types": ["route"] }}
                        ],
                        "formatted_address": "Main St, {state}, USA",
                        "geometry": {{ "location": {{ "lat": 4{i}.0, "lng": -7{i}.0 }} }}
                    }}"#
                )
            })
            .collect();
        format!(r#"{{ "results": [{}], "status": "OK" }}"#, candidates.join(","))
    }
}

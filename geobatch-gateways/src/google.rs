use geobatch_core::gateways::geocode::GeoCodingGateway;
use geobatch_entities::address::AddressQuery;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Everything except unreserved characters and `/` gets encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Error)]
pub enum Error {
    #[error("No Google Maps API key configured")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Forward geocoding with the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocoding {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl GoogleGeocoding {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let client = Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self, address: &AddressQuery, api_key: &str) -> String {
        format!(
            "{endpoint}?address={address}&key={api_key}",
            endpoint = self.endpoint,
            address = encode_query_value(address.as_str()),
            api_key = encode_query_value(api_key),
        )
    }
}

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

impl GeoCodingGateway for GoogleGeocoding {
    fn forward(&self, address: &AddressQuery) -> anyhow::Result<String> {
        log::debug!("GET {}", self.request_url(address, "***"));
        let url = self.request_url(address, &self.api_key);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Geocoding provider responded with HTTP status {status}");
        }
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_address_as_query_value() {
        assert_eq!(
            encode_query_value("350 Jay St, Brooklyn, NY"),
            "350%20Jay%20St%2C%20Brooklyn%2C%20NY"
        );
        assert_eq!(encode_query_value("1/2 Main-St."), "1/2%20Main-St.");
        assert_eq!(encode_query_value("A&B #3"), "A%26B%20%233");
        assert_eq!(encode_query_value("Straße"), "Stra%C3%9Fe");
        assert_eq!(encode_query_value(""), "");
    }

    #[test]
    fn build_request_url() {
        let gw = GoogleGeocoding::new(DEFAULT_ENDPOINT, "secret").unwrap();
        assert_eq!(
            gw.request_url(&"350 Jay St".into(), &gw.api_key),
            "https://maps.googleapis.com/maps/api/geocode/json?address=350%20Jay%20St&key=secret"
        );
    }

    #[test]
    fn reject_empty_api_key() {
        assert!(matches!(
            GoogleGeocoding::new(DEFAULT_ENDPOINT, "  "),
            Err(Error::MissingApiKey)
        ));
    }
}

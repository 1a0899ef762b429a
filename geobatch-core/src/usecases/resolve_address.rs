use super::{Error, Result};
use crate::{entities::*, gateways::geocode::GeoCodingGateway};
use geobatch_boundary as json;
use serde_json::Value;

/// Look up a single address and interpret the provider's answer.
///
/// Exactly one request is sent. Transport and parse errors are
/// returned as is, there are no retries.
pub fn resolve_address<G>(gateway: &G, query: AddressQuery) -> Result<GeocodeResult>
where
    G: GeoCodingGateway + ?Sized,
{
    log::info!("Processing {query}");
    let body = gateway.forward(&query)?;
    interpret_response(query, &body)
}

/// Turn a raw response body into a [`GeocodeResult`].
pub fn interpret_response(query: AddressQuery, body: &str) -> Result<GeocodeResult> {
    let response: json::GeocodeResponse = serde_json::from_str(body)?;
    warn_on_error_status(&query, &response);
    let results = response.results.ok_or(Error::MissingResults)?;
    let Some(value) = sole_candidate(results) else {
        log::debug!("No unique match for '{query}'");
        return Ok(GeocodeResult::no_match(query));
    };
    let candidate: json::Candidate = serde_json::from_value(value.clone())?;
    let raw_response = match value {
        Value::Object(map) => Some(map),
        _ => None,
    };
    let res = GeocodeResult::new(query, Some(candidate.into()), raw_response);
    if !res.is_valid() {
        log::debug!("Match for '{}' has no street name", res.query());
    }
    Ok(res)
}

fn sole_candidate(results: json::Results) -> Option<Value> {
    use json::Results as R;
    match results {
        R::Single(obj) => Some(Value::Object(obj)),
        R::List(mut list) if list.len() == 1 => list.pop(),
        R::List(_) | R::Other(_) => None,
    }
}

fn warn_on_error_status(query: &AddressQuery, response: &json::GeocodeResponse) {
    let Some(status) = response.status.as_deref() else {
        return;
    };
    if status == json::STATUS_OK || status == json::STATUS_ZERO_RESULTS {
        return;
    }
    match &response.error_message {
        Some(msg) => log::warn!("Geocoding '{query}' returned status {status}: {msg}"),
        None => log::warn!("Geocoding '{query}' returned status {status}"),
    }
}

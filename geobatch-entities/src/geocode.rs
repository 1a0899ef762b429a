use crate::{address::AddressQuery, geo::MapPoint};

/// Type tag of a street name component.
pub const ROUTE: &str = "route";

/// Rendered in place of a value when an address could not be matched.
pub const NO_MATCH: &str = "No match";

/// The unmodified JSON object of a provider candidate.
pub type RawResponse = serde_json::Map<String, serde_json::Value>;

/// A structured sub-field of an address, e.g. a street or a locality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: Option<String>,
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// `true` if *every* type tag of this component is contained
    /// in `filter`. A component without any tags always matches.
    pub fn types_within(&self, filter: &[&str]) -> bool {
        self.types.iter().all(|t| filter.contains(&t.as_str()))
    }
}

/// One address match returned by a geocoding provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    pub formatted_address: String,
    pub pos: MapPoint,
    pub address_components: Vec<AddressComponent>,
}

impl Candidate {
    pub fn has_route(&self) -> bool {
        self.address_components.iter().any(|c| c.has_type(ROUTE))
    }
}

/// The outcome of resolving a single [`AddressQuery`].
///
/// A result is valid if the provider returned exactly one candidate
/// and that candidate contains a street name. The candidate itself is
/// kept even when it is not valid, but all accessors report
/// "no match" in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    query: AddressQuery,
    candidate: Option<Candidate>,
    raw_response: Option<RawResponse>,
    valid: bool,
}

impl GeocodeResult {
    pub fn new(
        query: AddressQuery,
        candidate: Option<Candidate>,
        raw_response: Option<RawResponse>,
    ) -> Self {
        let valid = candidate.as_ref().is_some_and(Candidate::has_route);
        Self {
            query,
            candidate,
            raw_response,
            valid,
        }
    }

    pub fn no_match(query: AddressQuery) -> Self {
        Self::new(query, None, None)
    }

    pub fn query(&self) -> &AddressQuery {
        &self.query
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The selected candidate, regardless of validity.
    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    pub fn raw_response(&self) -> Option<&RawResponse> {
        self.raw_response.as_ref()
    }

    fn valid_candidate(&self) -> Option<&Candidate> {
        if self.valid {
            self.candidate.as_ref()
        } else {
            None
        }
    }

    /// The provider's formatted address or [`NO_MATCH`].
    pub fn cleaned_address(&self) -> &str {
        self.valid_candidate()
            .map(|c| c.formatted_address.as_str())
            .unwrap_or(NO_MATCH)
    }

    /// Long names of all components whose type tags are all contained
    /// in `types`, or `None` if there is no match.
    pub fn address_components<'a>(&'a self, types: &[&str]) -> Option<Vec<&'a str>> {
        self.valid_candidate().map(|c| {
            c.address_components
                .iter()
                .filter(|comp| comp.types_within(types))
                .map(|comp| comp.long_name.as_str())
                .collect()
        })
    }

    pub fn lat_lng(&self) -> Option<MapPoint> {
        self.valid_candidate().map(|c| c.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    fn jay_st() -> Candidate {
        Candidate::build()
            .formatted_address("350 Jay St, Brooklyn, NY 11201, USA")
            .pos(40.6928, -73.9872)
            .component("350", &["street_number"])
            .component("Jay Street", &["route"])
            .component("Brooklyn", &["political", "sublocality", "sublocality_level_1"])
            .component("New York", &["locality", "political"])
            .finish()
    }

    #[test]
    fn valid_with_route() {
        let res = GeocodeResult::new("350 Jay St".into(), Some(jay_st()), None);
        assert!(res.is_valid());
        assert_eq!(res.cleaned_address(), "350 Jay St, Brooklyn, NY 11201, USA");
        assert_eq!(
            res.lat_lng(),
            Some(MapPoint::from_lat_lng_deg(40.6928, -73.9872))
        );
    }

    #[test]
    fn no_candidate() {
        let res = GeocodeResult::no_match("asdfasdf nonsense".into());
        assert!(!res.is_valid());
        assert!(res.candidate().is_none());
        assert_eq!(res.cleaned_address(), NO_MATCH);
        assert_eq!(res.lat_lng(), None);
        assert_eq!(res.address_components(&["route"]), None);
    }

    #[test]
    fn candidate_without_route_is_kept_but_hidden() {
        let park = Candidate::build()
            .formatted_address("Prospect Park, Brooklyn, NY, USA")
            .pos(40.6602, -73.969)
            .component("Prospect Park", &["establishment", "park", "point_of_interest"])
            .component("Brooklyn", &["political", "sublocality"])
            .finish();
        let res = GeocodeResult::new("Prospect Park".into(), Some(park), None);
        assert!(!res.is_valid());
        assert_eq!(
            res.candidate().map(|c| c.formatted_address.as_str()),
            Some("Prospect Park, Brooklyn, NY, USA")
        );
        assert_eq!(res.cleaned_address(), NO_MATCH);
        assert_eq!(res.lat_lng(), None);
        assert_eq!(res.address_components(&["park"]), None);
    }

    #[test]
    fn components_require_all_tags_in_filter() {
        let res = GeocodeResult::new("350 Jay St".into(), Some(jay_st()), None);
        assert_eq!(res.address_components(&["route"]), Some(vec!["Jay Street"]));
        // "locality" alone does not match ["locality", "political"]
        assert_eq!(res.address_components(&["locality"]), Some(vec![]));
        assert_eq!(
            res.address_components(&["locality", "political"]),
            Some(vec!["New York"])
        );
        assert_eq!(
            res.address_components(&["street_number", "route"]),
            Some(vec!["350", "Jay Street"])
        );
    }

    #[test]
    fn component_without_tags_always_matches() {
        let c = Candidate::build()
            .component("Jay Street", &["route"])
            .component("untagged", &[])
            .finish();
        let res = GeocodeResult::new("x".into(), Some(c), None);
        assert_eq!(res.address_components(&[]), Some(vec!["untagged"]));
    }
}

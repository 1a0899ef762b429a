use super::*;
use geobatch_entities as e;

impl From<AddressComponent> for e::geocode::AddressComponent {
    fn from(from: AddressComponent) -> Self {
        let AddressComponent {
            long_name,
            short_name,
            types,
        } = from;
        Self {
            long_name,
            short_name,
            types,
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(from: Coordinate) -> Self {
        let Coordinate { lat, lng } = from;
        Self::from_lat_lng_deg(lat, lng)
    }
}

impl From<Candidate> for e::geocode::Candidate {
    fn from(from: Candidate) -> Self {
        let Candidate {
            formatted_address,
            geometry,
            address_components,
        } = from;
        Self {
            formatted_address,
            pos: geometry.location.into(),
            address_components: address_components.into_iter().map(Into::into).collect(),
        }
    }
}

use geobatch_entities::address::AddressQuery;

/// A forward geocoding provider.
pub trait GeoCodingGateway {
    /// Send exactly one lookup request for `address` and
    /// return the unparsed response body.
    fn forward(&self, address: &AddressQuery) -> anyhow::Result<String>;
}

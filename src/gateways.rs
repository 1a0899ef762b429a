use crate::config;
use anyhow::Result;
use geobatch_core::{entities::AddressQuery, gateways::geocode::GeoCodingGateway};
use geobatch_gateways::google::GoogleGeocoding;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeocodingGw> {
    match &cfg.gateway {
        config::GeocodingGateway::Google { endpoint, api_key } => {
            let gw = GoogleGeocoding::new(endpoint.clone(), api_key.clone())?;
            log::info!("Use Google geocoding gateway ({})", gw.endpoint());
            Ok(GeocodingGw::new(gw))
        }
    }
}

pub struct GeocodingGw(Box<dyn GeoCodingGateway + 'static>);

impl GeocodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeocodingGw {
    fn forward(&self, address: &AddressQuery) -> anyhow::Result<String> {
        self.0.forward(address)
    }
}

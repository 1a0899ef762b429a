use anyhow::{anyhow, Result};
use geobatch_core::usecases::RowsWithoutCoordinates;
use geobatch_gateways::google;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geobatch.toml";

const ENV_NAME_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

pub struct Config {
    pub geocoding: Geocoding,
    pub input: Input,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_API_KEY) {
            cfg.geocoding.gateway.set_api_key(api_key);
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Google { endpoint: String, api_key: String },
}

impl GeocodingGateway {
    fn set_api_key(&mut self, key: String) {
        match self {
            Self::Google { api_key, .. } => *api_key = key,
        }
    }
}

pub struct Input {
    pub address_column: String,
    pub delimiter: u8,
}

pub struct Output {
    pub rows_without_coordinates: RowsWithoutCoordinates,
}

fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(anyhow!(
            "Invalid delimiter '{delimiter}': expected a single ASCII character"
        )),
    }
}

impl From<raw::RowsWithoutCoordinates> for RowsWithoutCoordinates {
    fn from(from: raw::RowsWithoutCoordinates) -> Self {
        match from {
            raw::RowsWithoutCoordinates::Abort => Self::Abort,
            raw::RowsWithoutCoordinates::Skip => Self::Skip,
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            input,
            output,
        } = from;

        let raw::Geocoding { gateway: gw_name } = geocoding.unwrap_or_default();
        let gateway = gateway.unwrap_or_default();

        let gateway = match gw_name {
            Some(raw::GeocodingGateway::Google) | None => {
                let raw::Google { endpoint, api_key } = gateway
                    .google
                    .ok_or_else(|| anyhow!("Missing 'google' gateway configuration"))?;
                let endpoint = endpoint.unwrap_or_else(|| google::DEFAULT_ENDPOINT.to_owned());
                GeocodingGateway::Google {
                    endpoint,
                    api_key: api_key.unwrap_or_default(),
                }
            }
        };
        let geocoding = Geocoding { gateway };

        let raw::Input {
            address_column,
            delimiter,
        } = input.unwrap_or_default();
        if address_column.is_empty() {
            return Err(anyhow!("No address column defined"));
        }
        let input = Input {
            address_column,
            delimiter: parse_delimiter(&delimiter)?,
        };

        let raw::Output {
            rows_without_coordinates,
        } = output.unwrap_or_default();
        let output = Output {
            rows_without_coordinates: rows_without_coordinates.into(),
        };

        Ok(Self {
            geocoding,
            input,
            output,
        })
    }
}

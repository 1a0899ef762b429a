use crate::{adapters, config::Config};
use anyhow::{Context, Result};
use geobatch_core::{
    gateways::geocode::GeoCodingGateway,
    usecases::{self, GeocodedTable},
};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

const OUTPUT_SUFFIX: &str = "_Geo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub csv_out: PathBuf,
    pub vector_out: PathBuf,
}

impl Paths {
    /// Missing output paths are placed next to the input,
    /// e.g. `stations.csv` => `stations_Geo.csv` and `stations_Geo.geojson`.
    pub fn new(input: PathBuf, csv_out: Option<PathBuf>, vector_out: Option<PathBuf>) -> Self {
        let csv_out = csv_out.unwrap_or_else(|| derived_path(&input, "csv"));
        let vector_out = vector_out.unwrap_or_else(|| derived_path(&input, "geojson"));
        Self {
            input,
            csv_out,
            vector_out,
        }
    }
}

fn derived_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{extension}"))
}

/// Geocode all rows of the input file and write both output files.
///
/// The CSV file is written before any point geometry is derived,
/// so it exists even if the GeoJSON export fails.
pub fn run<G>(gateway: &G, cfg: &Config, paths: &Paths) -> Result<GeocodedTable>
where
    G: GeoCodingGateway + ?Sized,
{
    let Paths {
        input,
        csv_out,
        vector_out,
    } = paths;

    let file =
        File::open(input).with_context(|| format!("Unable to open {}", input.display()))?;
    let table = adapters::csv::read_table(BufReader::new(file), cfg.input.delimiter)
        .with_context(|| format!("Unable to read {}", input.display()))?;

    let geocoded = usecases::geocode_table(gateway, table, &cfg.input.address_column)?;
    let valid = geocoded.valid_count();
    log::info!(
        "{valid} of {} addresses are valid ({} invalid)",
        geocoded.len(),
        geocoded.len() - valid
    );

    let mut wtr = BufWriter::new(
        File::create(csv_out)
            .with_context(|| format!("Unable to create {}", csv_out.display()))?,
    );
    adapters::csv::write_table(&mut wtr, &geocoded)?;
    wtr.flush()?;
    log::info!("Wrote {}", csv_out.display());

    let points = geocoded.points(cfg.output.rows_without_coordinates)?;
    let collection = adapters::geojson::feature_collection(&geocoded, points);
    let mut wtr = BufWriter::new(
        File::create(vector_out)
            .with_context(|| format!("Unable to create {}", vector_out.display()))?,
    );
    adapters::geojson::write_feature_collection(&mut wtr, &collection)?;
    wtr.flush()?;
    log::info!(
        "Wrote {} features to {}",
        collection.features.len(),
        vector_out.display()
    );

    Ok(geocoded)
}

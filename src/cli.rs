use crate::{batch, config::Config, gateways};
use anyhow::Result;
use clap::{Parser, Subcommand};
use geobatch_core::{entities::NO_MATCH, gateways::geocode::GeoCodingGateway, usecases};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Geocode the addresses of a CSV file")]
struct Args {
    /// Configuration file (default: geobatch.toml)
    #[arg(long, short, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode every row of a CSV file and write CSV and GeoJSON output
    Run {
        /// CSV file with an address column
        input: PathBuf,
        /// Enriched CSV output (default: <INPUT>_Geo.csv)
        #[arg(long, value_name = "PATH")]
        csv_out: Option<PathBuf>,
        /// GeoJSON output (default: <INPUT>_Geo.geojson)
        #[arg(long, value_name = "PATH")]
        vector_out: Option<PathBuf>,
    },
    /// Geocode a single address
    Resolve {
        address: String,
        /// Print the names of components with these type tags, e.g. route,street_number
        #[arg(long, value_name = "TYPES", value_delimiter = ',')]
        components: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;

    match args.command {
        Command::Run {
            input,
            csv_out,
            vector_out,
        } => {
            let paths = batch::Paths::new(input, csv_out, vector_out);
            batch::run(&gateway, &cfg, &paths)?;
        }
        Command::Resolve {
            address,
            components,
        } => {
            resolve(&gateway, address, &components)?;
        }
    }
    Ok(())
}

fn resolve<G>(gateway: &G, address: String, components: &[String]) -> Result<()>
where
    G: GeoCodingGateway + ?Sized,
{
    let res = usecases::resolve_address(gateway, address.into())?;
    println!("Valid:      {}", res.is_valid());
    println!("Address:    {}", res.cleaned_address());
    match res.lat_lng() {
        Some(pos) => println!("Lat/Long:   {}, {}", pos.lat(), pos.lng()),
        None => println!("Lat/Long:   {NO_MATCH}"),
    }
    if !components.is_empty() {
        let types: Vec<_> = components.iter().map(String::as_str).collect();
        match res.address_components(&types) {
            Some(names) => println!("Components: {}", names.join(", ")),
            None => println!("Components: {NO_MATCH}"),
        }
    }
    Ok(())
}

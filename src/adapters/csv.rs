use geobatch_core::{entities::*, usecases::GeocodedTable};
use std::io;

const TRUE: &str = "True";
const FALSE: &str = "False";

/// Read a delimited table with a header line.
///
/// All fields are kept verbatim; rows of differing length are rejected.
pub fn read_table<R: io::Read>(reader: R, delimiter: u8) -> Result<Table, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);
    let headers = rdr.headers()?.iter().map(ToString::to_string).collect();
    let rows = rdr
        .records()
        .map(|r| r.map(|record| record.iter().map(ToString::to_string).collect()))
        .collect::<Result<_, _>>()?;
    Ok(Table { headers, rows })
}

fn format_bool(b: bool) -> &'static str {
    if b {
        TRUE
    } else {
        FALSE
    }
}

fn format_coord(coord: Option<f64>) -> String {
    coord.map(|c| c.to_string()).unwrap_or_default()
}

fn enriched_record<'a>(row: &EnrichedRow<'a>) -> impl Iterator<Item = String> + 'a {
    let derived = [
        format_bool(row.address_valid).to_owned(),
        row.clean_address.to_owned(),
        format_coord(row.lat()),
        format_coord(row.lng()),
    ];
    row.fields.iter().cloned().chain(derived)
}

/// Write the input columns followed by the derived columns.
///
/// No index column is written.
pub fn write_table<W: io::Write>(writer: W, table: &GeocodedTable) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(enriched_record(&row))?;
    }
    wtr.flush()?;
    Ok(())
}

use super::{resolve_address, Error, Result};
use crate::{entities::*, gateways::geocode::GeoCodingGateway};

/// How to treat rows without coordinates when deriving point geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowsWithoutCoordinates {
    /// Fail on the first row that has no coordinates.
    #[default]
    Abort,
    /// Leave such rows out.
    Skip,
}

/// The input table together with one [`GeocodeResult`] per row.
///
/// Results are aligned with the input rows by position.
#[derive(Debug, Clone)]
pub struct GeocodedTable {
    input: Table,
    results: Vec<GeocodeResult>,
}

impl GeocodedTable {
    pub fn input(&self) -> &Table {
        &self.input
    }

    pub fn results(&self) -> &[GeocodeResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid()).count()
    }

    /// Original headers followed by the derived columns.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.input
            .headers
            .iter()
            .map(String::as_str)
            .chain(ENRICHED_COLUMNS)
    }

    pub fn rows(&self) -> impl Iterator<Item = EnrichedRow<'_>> {
        self.input
            .rows
            .iter()
            .zip(&self.results)
            .map(|(fields, res)| EnrichedRow {
                fields,
                address_valid: res.is_valid(),
                clean_address: res.cleaned_address(),
                pos: res.lat_lng(),
            })
    }

    /// Rows paired with their position, for building point geometries.
    pub fn points(&self, policy: RowsWithoutCoordinates) -> Result<Vec<(EnrichedRow<'_>, MapPoint)>> {
        let mut points = Vec::with_capacity(self.len());
        for (row, enriched) in self.rows().enumerate() {
            match (enriched.pos, policy) {
                (Some(pos), _) => points.push((enriched, pos)),
                (None, RowsWithoutCoordinates::Skip) => {
                    log::debug!("Skipping row {row} without coordinates");
                }
                (None, RowsWithoutCoordinates::Abort) => {
                    return Err(Error::MissingCoordinates { row });
                }
            }
        }
        Ok(points)
    }
}

/// Resolve the address of every row, strictly one after another.
///
/// The first fatal error aborts the whole table.
pub fn geocode_table<G>(gateway: &G, input: Table, address_column: &str) -> Result<GeocodedTable>
where
    G: GeoCodingGateway + ?Sized,
{
    let idx = input
        .column_index(address_column)
        .ok_or_else(|| Error::MissingColumn(address_column.to_owned()))?;
    log::info!("Geocoding {} rows", input.len());
    let results = input
        .rows
        .iter()
        .map(|fields| {
            let address = fields.get(idx).cloned().unwrap_or_default();
            resolve_address(gateway, address.into())
        })
        .collect::<Result<Vec<_>>>()?;
    debug_assert_eq!(results.len(), input.len());
    Ok(GeocodedTable { input, results })
}

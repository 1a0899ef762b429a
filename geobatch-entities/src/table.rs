use crate::geo::MapPoint;

pub const ADDRESS_VALID_COLUMN: &str = "Address.Valid";
pub const CLEAN_ADDRESS_COLUMN: &str = "Clean.Address";
pub const LAT_COLUMN: &str = "Lat";
pub const LNG_COLUMN: &str = "Long";

/// Columns appended to every input table, in this order.
pub const ENRICHED_COLUMNS: [&str; 4] = [
    ADDRESS_VALID_COLUMN,
    CLEAN_ADDRESS_COLUMN,
    LAT_COLUMN,
    LNG_COLUMN,
];

/// An untyped table: named columns and rows of text fields,
/// both kept in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single input row together with its derived geocoding columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow<'a> {
    pub fields: &'a [String],
    pub address_valid: bool,
    pub clean_address: &'a str,
    pub pos: Option<MapPoint>,
}

impl EnrichedRow<'_> {
    pub fn lat(&self) -> Option<f64> {
        self.pos.map(MapPoint::lat)
    }

    pub fn lng(&self) -> Option<f64> {
        self.pos.map(MapPoint::lng)
    }
}

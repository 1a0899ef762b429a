use geobatch_core::{entities::*, usecases::GeocodedTable};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use std::io;

fn properties(headers: &[String], row: &EnrichedRow<'_>, pos: MapPoint) -> JsonObject {
    let mut props = JsonObject::new();
    for (name, value) in headers.iter().zip(row.fields) {
        props.insert(name.clone(), JsonValue::from(value.as_str()));
    }
    props.insert(ADDRESS_VALID_COLUMN.into(), row.address_valid.into());
    props.insert(CLEAN_ADDRESS_COLUMN.into(), row.clean_address.into());
    props.insert(LAT_COLUMN.into(), pos.lat().into());
    props.insert(LNG_COLUMN.into(), pos.lng().into());
    props
}

fn point_geometry(pos: MapPoint) -> Geometry {
    let (x, y) = pos.to_lng_lat();
    let point = geo_types::Point::new(x, y);
    Geometry::new(geojson::Value::from(&point))
}

/// One point feature per row, carrying all columns as properties.
pub fn feature_collection(
    table: &GeocodedTable,
    points: Vec<(EnrichedRow<'_>, MapPoint)>,
) -> FeatureCollection {
    let headers = &table.input().headers;
    let features = points
        .into_iter()
        .map(|(row, pos)| {
            if !pos.is_valid() {
                log::warn!(
                    "Coordinates of '{}' are out of range: {:?}",
                    row.clean_address,
                    pos
                );
            }
            Feature {
                bbox: None,
                geometry: Some(point_geometry(pos)),
                id: None,
                properties: Some(properties(headers, &row, pos)),
                foreign_members: None,
            }
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn write_feature_collection<W: io::Write>(
    writer: W,
    collection: &FeatureCollection,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, collection)
}

pub type LatDeg = f64;
pub type LngDeg = f64;

/// A geographical position in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: LatDeg,
    lng: LngDeg,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: LatDeg, lng: LngDeg) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatDeg {
        self.lat
    }

    pub const fn lng(self) -> LngDeg {
        self.lng
    }

    /// Coordinates in conventional point order, i.e. `(x, y)` = `(lng, lat)`.
    pub const fn to_lng_lat(self) -> (LngDeg, LatDeg) {
        (self.lng, self.lat)
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<MapPoint> for (LatDeg, LngDeg) {
    fn from(from: MapPoint) -> Self {
        (from.lat, from.lng)
    }
}

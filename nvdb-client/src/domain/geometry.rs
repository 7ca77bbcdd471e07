//! Geometry, projections and bounding boxes.

use std::fmt;

/// Spatial reference systems supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    Utm32,
    Utm33,
    Utm35,
    Wgs84,
}

impl Projection {
    pub fn srid(&self) -> i32 {
        match self {
            Projection::Utm32 => 5972,
            Projection::Utm33 => 5973,
            Projection::Utm35 => 5975,
            Projection::Wgs84 => 4326,
        }
    }

    pub fn from_srid(srid: i32) -> Option<Self> {
        match srid {
            5972 | 25832 => Some(Projection::Utm32),
            5973 | 25833 => Some(Projection::Utm33),
            5975 | 25835 => Some(Projection::Utm35),
            4326 => Some(Projection::Wgs84),
            _ => None,
        }
    }
}

/// A geometry as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Well-known text.
    pub wkt: String,
    pub projection: Option<Projection>,
    /// Whether the server simplified the geometry (see `geometry-tolerance`).
    pub simplified: bool,
    /// Whether the geometry belongs to the object itself or was derived
    /// from the road network.
    pub own_geometry: Option<bool>,
}

/// An axis-aligned bounding box in the request projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srid_roundtrip() {
        for p in [
            Projection::Utm32,
            Projection::Utm33,
            Projection::Utm35,
            Projection::Wgs84,
        ] {
            assert_eq!(Projection::from_srid(p.srid()), Some(p));
        }
    }

    #[test]
    fn legacy_srids_map_to_utm() {
        assert_eq!(Projection::from_srid(25833), Some(Projection::Utm33));
        assert_eq!(Projection::from_srid(32633), None);
    }

    #[test]
    fn bbox_display() {
        let bbox = BoundingBox::new(250000.0, 6600000.0, 260000.5, 6610000.0);
        assert_eq!(bbox.to_string(), "250000,6600000,260000.5,6610000");
    }
}

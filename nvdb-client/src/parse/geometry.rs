//! Geometry parsing.

use serde_json::Value;
use tracing::trace;

use crate::domain::{Geometry, Projection};

use super::json::{bool_member, int_member, string_member};

/// Parse a geometry object. Returns `None` when there is no WKT.
pub fn parse_geometry(value: &Value) -> Option<Geometry> {
    let obj = value.as_object()?;
    let wkt = string_member(obj, "wkt")?;

    let projection = int_member(obj, "srid").and_then(|srid| {
        let projection = Projection::from_srid(srid);
        if projection.is_none() {
            trace!(srid, "unsupported srid");
        }
        projection
    });

    Some(Geometry {
        wkt,
        projection,
        simplified: bool_member(obj, "simplified").unwrap_or(false),
        own_geometry: bool_member(obj, "own-geometry"),
    })
}

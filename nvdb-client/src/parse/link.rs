//! Link parsing.

use serde_json::Value;

use crate::domain::Link;

use super::geometry::parse_geometry;
use super::json::{date_member, double_member, int_member, long_member};
use super::road_sys_ref::parse_road_sys_ref;

/// Parse a road network link. Returns `None` when the link has no id.
pub fn parse_link(value: &Value) -> Option<Link> {
    let obj = value.as_object()?;
    let id = long_member(obj, "id")?;

    Some(Link {
        id,
        start_position: double_member(obj, "start-position"),
        end_position: double_member(obj, "end-position"),
        length: double_member(obj, "length"),
        start_node: node_member(value, "start-node"),
        end_node: node_member(value, "end-node"),
        start_date: date_member(obj, "start-date"),
        end_date: date_member(obj, "end-date"),
        municipality: int_member(obj, "municipality"),
        county: int_member(obj, "county"),
        region: int_member(obj, "region"),
        road_department: int_member(obj, "road-department"),
        geometry: obj.get("geometry").and_then(parse_geometry),
        road_sys_ref: obj.get("road-sys-ref").and_then(parse_road_sys_ref),
    })
}

// Node ids come as strings or numbers depending on API revision.
fn node_member(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn full_link() {
        let link = parse_link(&json!({
            "id": 319_527,
            "start-position": 0.0,
            "end-position": 0.25,
            "length": 118.3,
            "start-node": "1234",
            "end-node": 5678,
            "start-date": "2018-01-01",
            "municipality": 5001,
            "county": 50,
            "region": 4,
            "road-department": 16,
            "geometry": {"wkt": "LINESTRING(1 2, 3 4)", "srid": 5973},
            "road-sys-ref": {
                "road-system": {"number": 6, "road-category": "E", "phase": "V"},
                "section": {"section": 1, "sub-section": 1, "from-meter": 0.0, "to-meter": 118.3}
            }
        }))
        .unwrap();

        assert_eq!(link.id, 319_527);
        assert_eq!(link.end_position, Some(0.25));
        assert_eq!(link.start_node.as_deref(), Some("1234"));
        assert_eq!(link.end_node.as_deref(), Some("5678"));
        assert_eq!(link.start_date, NaiveDate::from_ymd_opt(2018, 1, 1));
        assert!(link.end_date.is_none());
        assert_eq!(link.municipality, Some(5001));
        assert_eq!(link.road_department, Some(16));
        assert!(link.geometry.is_some());
        assert_eq!(link.road_sys_ref.unwrap().to_meter(), Some(118.3));
    }

    #[test]
    fn minimal_link() {
        let link = parse_link(&json!({"id": 1})).unwrap();
        assert!(link.geometry.is_none());
        assert!(link.road_sys_ref.is_none());
        assert!(link.start_node.is_none());
    }

    #[test]
    fn link_without_id_is_absent() {
        assert!(parse_link(&json!({"start-position": 0.0})).is_none());
    }

    #[test]
    fn unlocated_road_sys_ref_is_dropped() {
        let link = parse_link(&json!({
            "id": 1,
            "road-sys-ref": {"road-system": {"number": 6}}
        }))
        .unwrap();
        assert!(link.road_sys_ref.is_none());
    }
}

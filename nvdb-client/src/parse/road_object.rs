//! Road object parsing.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Attribute, AttributeValue, Location, RoadObject, ValueKind};

use super::geometry::parse_geometry;
use super::json::{
    Object, array_member, date_member, double_member, int_list_member, int_member, long_member,
    object_member, string_member,
};
use super::road_sys_ref::parse_road_sys_ref;

/// Parse a road object. Returns `None` when it has no id.
pub fn parse_road_object(value: &Value) -> Option<RoadObject> {
    let obj = value.as_object()?;
    let id = long_member(obj, "id")?;
    let metadata = object_member(obj, "metadata");

    let attributes = array_member(obj, "attributes")
        .map(|values| {
            values
                .iter()
                .filter_map(|v| {
                    let attribute = parse_attribute(v);
                    if attribute.is_none() {
                        debug!(object = id, "skipping malformed attribute");
                    }
                    attribute
                })
                .collect()
        })
        .unwrap_or_default();

    Some(RoadObject {
        id,
        type_id: metadata
            .and_then(|m| object_member(m, "type"))
            .and_then(|t| int_member(t, "id")),
        version: metadata.and_then(|m| int_member(m, "version")),
        href: string_member(obj, "href"),
        start_date: metadata.and_then(|m| date_member(m, "start-date")),
        end_date: metadata.and_then(|m| date_member(m, "end-date")),
        attributes,
        geometry: obj.get("geometry").and_then(parse_geometry),
        location: object_member(obj, "location").map(parse_location),
    })
}

/// Parse a single attribute.
///
/// The value is interpreted according to the attribute's `data-type`;
/// attributes carrying an `enum-id` become [`AttributeValue::Enum`].
pub fn parse_attribute(value: &Value) -> Option<Attribute> {
    let obj = value.as_object()?;
    let id = int_member(obj, "id")?;
    let raw = obj.get("value")?;

    let value = match int_member(obj, "enum-id") {
        Some(enum_id) => AttributeValue::Enum {
            id: enum_id,
            value: render(raw),
        },
        None => typed_value(obj, raw),
    };

    Some(Attribute {
        id,
        name: string_member(obj, "name"),
        value,
    })
}

fn typed_value(obj: &Object, raw: &Value) -> AttributeValue {
    let kind = string_member(obj, "data-type")
        .map(|name| ValueKind::from_name(&name))
        .unwrap_or(ValueKind::Other);

    let typed = match kind {
        ValueKind::Text => raw.as_str().map(|s| AttributeValue::Text(s.to_string())),
        ValueKind::Integer => raw.as_i64().map(AttributeValue::Integer),
        ValueKind::Double => raw.as_f64().map(AttributeValue::Double),
        ValueKind::Boolean => raw.as_bool().map(AttributeValue::Boolean),
        ValueKind::Date => raw
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .map(AttributeValue::Date),
        ValueKind::Time | ValueKind::Geometry | ValueKind::Other => None,
    };

    typed.unwrap_or_else(|| AttributeValue::Other(raw.clone()))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse the location block of a road object.
pub fn parse_location(obj: &Object) -> Location {
    let road_sys_refs = array_member(obj, "road-sys-refs")
        .map(|values| values.iter().filter_map(parse_road_sys_ref).collect())
        .unwrap_or_default();

    Location {
        municipalities: int_list_member(obj, "municipalities"),
        counties: int_list_member(obj, "counties"),
        road_sys_refs,
        length: double_member(obj, "length"),
    }
}

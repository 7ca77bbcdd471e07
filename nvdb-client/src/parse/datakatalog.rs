//! Datakatalog parsing.

use serde_json::Value;
use tracing::debug;

use crate::domain::{
    AttributeKind, AttributeType, DataType, EnumValue, FeatureType, NumericBounds, Unit,
    ValueKind,
};

use super::json::{
    Object, array_member, bool_member, date_member, double_member, int_member, long_member,
    string_member,
};

/// Parse a data type. Requires `id` and `name`.
pub fn parse_data_type(value: &Value) -> Option<DataType> {
    let obj = value.as_object()?;
    Some(DataType {
        id: int_member(obj, "id")?,
        name: string_member(obj, "name")?,
        short_name: string_member(obj, "short-name"),
        description: string_member(obj, "description"),
        kind: string_member(obj, "value-type")
            .map(|name| ValueKind::from_name(&name))
            .unwrap_or(ValueKind::Other),
    })
}

pub fn parse_unit(value: &Value) -> Option<Unit> {
    let obj = value.as_object()?;
    Some(Unit {
        id: int_member(obj, "id")?,
        name: string_member(obj, "name"),
        short_name: string_member(obj, "short-name"),
    })
}

pub fn parse_enum_value(value: &Value) -> Option<EnumValue> {
    let obj = value.as_object()?;
    let rendered = match obj.get("value")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(EnumValue {
        id: int_member(obj, "id")?,
        value: rendered,
        short_value: string_member(obj, "short-value"),
        description: string_member(obj, "description"),
        sort_number: int_member(obj, "sort-number"),
    })
}

/// Parse an attribute type.
///
/// The `data-type` member selects the [`AttributeKind`]; only the fields
/// that kind uses are read.
pub fn parse_attribute_type(value: &Value) -> Option<AttributeType> {
    let obj = value.as_object()?;
    let id = int_member(obj, "id")?;
    let kind_name = string_member(obj, "data-type").unwrap_or_default();

    let kind = match ValueKind::from_name(&kind_name) {
        ValueKind::Boolean => AttributeKind::Boolean {
            default_value: bool_member(obj, "default"),
        },
        ValueKind::Text => AttributeKind::Text {
            default_value: string_member(obj, "default"),
            field_length: int_member(obj, "field-length"),
            values: enum_values(obj),
        },
        ValueKind::Integer => AttributeKind::Integer {
            bounds: NumericBounds {
                default_value: long_member(obj, "default"),
                min_value: long_member(obj, "min"),
                max_value: long_member(obj, "max"),
                abs_min_value: long_member(obj, "abs-min"),
                abs_max_value: long_member(obj, "abs-max"),
            },
            field_length: int_member(obj, "field-length"),
            unit: obj.get("unit").and_then(parse_unit),
            values: enum_values(obj),
        },
        ValueKind::Double => AttributeKind::Double {
            bounds: NumericBounds {
                default_value: double_member(obj, "default"),
                min_value: double_member(obj, "min"),
                max_value: double_member(obj, "max"),
                abs_min_value: double_member(obj, "abs-min"),
                abs_max_value: double_member(obj, "abs-max"),
            },
            field_length: int_member(obj, "field-length"),
            decimal_count: int_member(obj, "decimal-count"),
            unit: obj.get("unit").and_then(parse_unit),
            values: enum_values(obj),
        },
        ValueKind::Date => AttributeKind::Date {
            default_value: date_member(obj, "default"),
            min_value: date_member(obj, "min"),
            max_value: date_member(obj, "max"),
        },
        ValueKind::Time => AttributeKind::Time,
        ValueKind::Geometry => AttributeKind::Geometry,
        ValueKind::Other => AttributeKind::Other { kind_name },
    };

    Some(AttributeType {
        id,
        name: string_member(obj, "name").unwrap_or_default(),
        description: string_member(obj, "description"),
        sort_number: int_member(obj, "sort-number"),
        required: bool_member(obj, "required").unwrap_or(false),
        kind,
    })
}

fn enum_values(obj: &Object) -> Vec<EnumValue> {
    array_member(obj, "allowed-values")
        .map(|values| values.iter().filter_map(parse_enum_value).collect())
        .unwrap_or_default()
}

/// Parse a feature type with its attribute types.
pub fn parse_feature_type(value: &Value) -> Option<FeatureType> {
    let obj = value.as_object()?;
    let id = int_member(obj, "id")?;

    let attribute_types = array_member(obj, "attribute-types")
        .map(|values| {
            values
                .iter()
                .filter_map(|v| {
                    let parsed = parse_attribute_type(v);
                    if parsed.is_none() {
                        debug!(feature_type = id, "skipping attribute type without id");
                    }
                    parsed
                })
                .collect()
        })
        .unwrap_or_default();

    Some(FeatureType {
        id,
        name: string_member(obj, "name").unwrap_or_default(),
        description: string_member(obj, "description"),
        attribute_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn data_type() {
        let dt = parse_data_type(&json!({
            "id": 2, "name": "Flyttall", "short-name": "Tall", "value-type": "Double"
        }))
        .unwrap();
        assert_eq!(dt.id, 2);
        assert_eq!(dt.kind, ValueKind::Double);
        assert_eq!(dt.short_name.as_deref(), Some("Tall"));
        assert!(dt.description.is_none());

        assert!(parse_data_type(&json!({"id": 2})).is_none());
    }

    #[test]
    fn double_attribute_type() {
        let at = parse_attribute_type(&json!({
            "id": 5277,
            "name": "Bredde",
            "data-type": "Double",
            "required": true,
            "default": 3.5,
            "min": 0.0,
            "max": 50.0,
            "abs-max": 100.0,
            "field-length": 5,
            "decimal-count": 1,
            "unit": {"id": 1, "name": "Meter", "short-name": "m"}
        }))
        .unwrap();

        assert!(at.required);
        assert!(!at.is_enum());
        match at.kind {
            AttributeKind::Double {
                bounds,
                field_length,
                decimal_count,
                unit,
                values,
            } => {
                assert_eq!(bounds.default_value, Some(3.5));
                assert_eq!(bounds.max_value, Some(50.0));
                assert_eq!(bounds.abs_min_value, None);
                assert_eq!(bounds.abs_max_value, Some(100.0));
                assert_eq!(field_length, Some(5));
                assert_eq!(decimal_count, Some(1));
                assert_eq!(unit.unwrap().short_name.as_deref(), Some("m"));
                assert!(values.is_empty());
            }
            other => panic!("expected double kind, got {other:?}"),
        }
    }

    #[test]
    fn enumerated_text_attribute_type() {
        let at = parse_attribute_type(&json!({
            "id": 1216,
            "name": "Dekketype",
            "data-type": "Text",
            "allowed-values": [
                {"id": 3614, "value": "Asfalt", "sort-number": 1},
                {"id": 3615, "value": 12, "short-value": "Grus"},
                {"value": "no id"}
            ]
        }))
        .unwrap();

        assert!(at.is_enum());
        let values = at.kind.enum_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value, "Asfalt");
        assert_eq!(values[1].value, "12");
        assert_eq!(values[1].short_value.as_deref(), Some("Grus"));
    }

    #[test]
    fn date_attribute_type() {
        let at = parse_attribute_type(&json!({
            "id": 1, "name": "Åpnet", "data-type": "Date", "min": "1900-01-01"
        }))
        .unwrap();
        assert_eq!(
            at.kind,
            AttributeKind::Date {
                default_value: None,
                min_value: NaiveDate::from_ymd_opt(1900, 1, 1),
                max_value: None,
            }
        );
    }

    #[test]
    fn unknown_kind_keeps_its_name() {
        let at = parse_attribute_type(&json!({"id": 1, "data-type": "Struct"})).unwrap();
        assert_eq!(
            at.kind,
            AttributeKind::Other {
                kind_name: "Struct".to_string()
            }
        );
        assert_eq!(at.name, "");
        assert!(!at.required);
    }

    #[test]
    fn feature_type_skips_bad_attribute_types() {
        let ft = parse_feature_type(&json!({
            "id": 105,
            "name": "Fartsgrense",
            "attribute-types": [
                {"id": 2021, "name": "Fartsgrense", "data-type": "Integer"},
                {"name": "missing id"}
            ]
        }))
        .unwrap();
        assert_eq!(ft.attribute_types.len(), 1);
        assert!(ft.attribute_type(2021).is_some());
        assert!(ft.attribute_type(1).is_none());
    }
}

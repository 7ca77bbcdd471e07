//! Datakatalog (data catalogue) metadata.
//!
//! The datakatalog describes which feature types exist and which attribute
//! types each feature type carries. Attribute types differ only in the
//! extra fields their kind needs, so they are modelled as common
//! properties plus an [`AttributeKind`] sum type.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

/// Primitive value kind of a datakatalog data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Text,
    Integer,
    Double,
    Date,
    Time,
    Geometry,
    Other,
}

impl ValueKind {
    /// Map the API's kind name to a value kind. Unknown names map to
    /// [`ValueKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Boolean" | "Boolsk" => ValueKind::Boolean,
            "Text" | "Tekst" | "String" => ValueKind::Text,
            "Integer" | "Heltall" | "Long" => ValueKind::Integer,
            "Double" | "Flyttall" => ValueKind::Double,
            "Date" | "Dato" | "ShortDate" | "PartialDate" => ValueKind::Date,
            "Time" | "Klokkeslett" => ValueKind::Time,
            "Geometry" | "Geometri" => ValueKind::Geometry,
            _ => ValueKind::Other,
        }
    }
}

/// A datakatalog data type. Two data types are equal when their ids are.
#[derive(Debug, Clone)]
pub struct DataType {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub kind: ValueKind,
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DataType {}

impl Hash for DataType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Unit of measure for numeric attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub name: Option<String>,
    pub short_name: Option<String>,
}

/// One allowed value of an enumerated attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub id: i32,
    /// The value rendered as text, whatever its underlying kind.
    pub value: String,
    pub short_value: Option<String>,
    pub description: Option<String>,
    pub sort_number: Option<i32>,
}

/// Numeric constraints shared by integer and double attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericBounds<T> {
    pub default_value: Option<T>,
    pub min_value: Option<T>,
    pub max_value: Option<T>,
    pub abs_min_value: Option<T>,
    pub abs_max_value: Option<T>,
}

/// Kind-specific part of an attribute type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    Boolean {
        default_value: Option<bool>,
    },
    Text {
        default_value: Option<String>,
        field_length: Option<i32>,
        values: Vec<EnumValue>,
    },
    Integer {
        bounds: NumericBounds<i64>,
        field_length: Option<i32>,
        unit: Option<Unit>,
        values: Vec<EnumValue>,
    },
    Double {
        bounds: NumericBounds<f64>,
        field_length: Option<i32>,
        decimal_count: Option<i32>,
        unit: Option<Unit>,
        values: Vec<EnumValue>,
    },
    Date {
        default_value: Option<NaiveDate>,
        min_value: Option<NaiveDate>,
        max_value: Option<NaiveDate>,
    },
    Time,
    Geometry,
    Other {
        kind_name: String,
    },
}

impl AttributeKind {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            AttributeKind::Boolean { .. } => ValueKind::Boolean,
            AttributeKind::Text { .. } => ValueKind::Text,
            AttributeKind::Integer { .. } => ValueKind::Integer,
            AttributeKind::Double { .. } => ValueKind::Double,
            AttributeKind::Date { .. } => ValueKind::Date,
            AttributeKind::Time => ValueKind::Time,
            AttributeKind::Geometry => ValueKind::Geometry,
            AttributeKind::Other { .. } => ValueKind::Other,
        }
    }

    /// Allowed values, for enumerated kinds. Empty otherwise.
    pub fn enum_values(&self) -> &[EnumValue] {
        match self {
            AttributeKind::Text { values, .. }
            | AttributeKind::Integer { values, .. }
            | AttributeKind::Double { values, .. } => values,
            _ => &[],
        }
    }
}

/// An attribute type of a feature type.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sort_number: Option<i32>,
    pub required: bool,
    pub kind: AttributeKind,
}

impl AttributeType {
    pub fn is_enum(&self) -> bool {
        !self.kind.enum_values().is_empty()
    }
}

/// A feature type (road object type) and its attribute types.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub attribute_types: Vec<AttributeType>,
}

impl FeatureType {
    pub fn attribute_type(&self, id: i32) -> Option<&AttributeType> {
        self.attribute_types.iter().find(|a| a.id == id)
    }
}

//! Road objects (features registered along the road network).

use chrono::NaiveDate;

use super::{Geometry, RoadSysRef};

/// Typed value of a road object attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Date(NaiveDate),
    /// Enumerated value, identified by the enum value id.
    Enum { id: i32, value: String },
    /// Anything the SDK does not model (geometry attributes, structs, ...).
    Other(serde_json::Value),
}

/// A single attribute of a road object.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute type id from the datakatalog.
    pub id: i32,
    pub name: Option<String>,
    pub value: AttributeValue,
}

/// Where a road object is located.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub municipalities: Vec<i32>,
    pub counties: Vec<i32>,
    pub road_sys_refs: Vec<RoadSysRef>,
    /// Length in meters, for linear objects.
    pub length: Option<f64>,
}

/// A road object instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadObject {
    pub id: i64,
    pub type_id: Option<i32>,
    pub version: Option<i32>,
    pub href: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub attributes: Vec<Attribute>,
    pub geometry: Option<Geometry>,
    pub location: Option<Location>,
}

impl RoadObject {
    /// Look up an attribute by its type id.
    pub fn attribute(&self, id: i32) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }
}

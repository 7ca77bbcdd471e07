//! Domain types for the road network API.
//!
//! All types are immutable values built once from a parsed response.
//! Fields the API may omit are `Option`s; nothing here performs I/O.

mod datakatalog;
mod geometry;
mod link;
mod road_object;
mod road_sys_ref;

pub use datakatalog::{
    AttributeKind, AttributeType, DataType, EnumValue, FeatureType, NumericBounds, Unit,
    ValueKind,
};
pub use geometry::{BoundingBox, Geometry, Projection};
pub use link::Link;
pub use road_object::{Attribute, AttributeValue, Location, RoadObject};
pub use road_sys_ref::{
    Anchor, Intersection, Phase, RoadCategory, RoadSysRef, RoadSystem, Section, SideArea,
};

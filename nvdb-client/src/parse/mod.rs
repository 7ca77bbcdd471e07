//! Conversion from API JSON to domain types.
//!
//! Responses are read as `serde_json::Value` trees rather than derived
//! DTOs: the API omits members freely and some objects (road-system
//! references) change meaning depending on which members are present.
//! Parsers return `None` for objects missing their identifying fields and
//! never fail on missing optional data.

mod datakatalog;
mod geometry;
mod json;
mod link;
mod road_object;
mod road_sys_ref;

pub use datakatalog::{
    parse_attribute_type, parse_data_type, parse_enum_value, parse_feature_type, parse_unit,
};
pub use geometry::parse_geometry;
pub use link::parse_link;
pub use road_object::{parse_attribute, parse_location, parse_road_object};
pub use road_sys_ref::{parse_road_sys_ref, road_sys_ref_to_json};

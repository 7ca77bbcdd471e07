//! Parsing of road-system references.
//!
//! A reference object always carries a `road-system`. Its location is
//! described by a `section`, and optionally by an `intersection` or a
//! `side-area` when the point lies at a junction or a rest area. Which of
//! these is meant is only visible from which keys are present.

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::{Intersection, Phase, RoadCategory, RoadSysRef, RoadSystem, Section, SideArea};

use super::json::{
    Object, bool_member, double_member, int_member, long_member, object_member, put_opt,
    string_member,
};

const ROAD_SYSTEM: &str = "road-system";
const SECTION: &str = "section";
const INTERSECTION: &str = "intersection";
const INTERSECTION_NUMBER: &str = "intersection-system";
const SIDE_AREA: &str = "side-area";
const SIDE_AREA_NUMBER: &str = "side-area";
const SHORT_FORM: &str = "short-form";
const FROM_METER: &str = "from-meter";
const TO_METER: &str = "to-meter";
const METER: &str = "meter";

/// Parse a road-system reference.
///
/// Returns `None` when the value is not an object, has no road system, or
/// carries no meter information on the sub-object it is located on.
pub fn parse_road_sys_ref(value: &Value) -> Option<RoadSysRef> {
    let obj = value.as_object()?;
    let road_system = object_member(obj, ROAD_SYSTEM)?;

    let side_area = object_member(obj, SIDE_AREA).and_then(parse_side_area);
    let intersection = object_member(obj, INTERSECTION).and_then(parse_intersection);

    let section_element = if side_area.is_some() {
        object_member(obj, SIDE_AREA)
    } else if intersection.is_some() {
        object_member(obj, INTERSECTION)
    } else {
        object_member(obj, SECTION)
    };

    let has_extent = section_element.is_some_and(|e| {
        double_member(e, FROM_METER).is_some()
            || double_member(e, TO_METER).is_some()
            || double_member(e, METER).is_some()
    });
    if !has_extent {
        return None;
    }

    Some(RoadSysRef {
        road_system: parse_road_system(road_system),
        section: object_member(obj, SECTION).map(parse_section),
        intersection,
        side_area,
        short_form: string_member(obj, SHORT_FORM),
    })
}

fn parse_road_system(obj: &Object) -> RoadSystem {
    let category = string_member(obj, "road-category");
    let phase = string_member(obj, "phase");
    RoadSystem {
        id: long_member(obj, "id"),
        version: int_member(obj, "version"),
        number: int_member(obj, "number"),
        category: category.as_deref().and_then(|code| {
            let parsed = RoadCategory::from_code(code);
            if parsed.is_none() {
                trace!(code, "unknown road category");
            }
            parsed
        }),
        phase: phase.as_deref().and_then(|code| {
            let parsed = Phase::from_code(code);
            if parsed.is_none() {
                trace!(code, "unknown road system phase");
            }
            parsed
        }),
    }
}

fn from_meter(obj: &Object) -> Option<f64> {
    double_member(obj, FROM_METER).or_else(|| double_member(obj, METER))
}

// Falls back to `meter` whenever `to-meter` is absent, regardless of
// `from-meter`.
fn to_meter(obj: &Object) -> Option<f64> {
    double_member(obj, TO_METER).or_else(|| double_member(obj, METER))
}

fn parse_section(obj: &Object) -> Section {
    Section {
        id: long_member(obj, "id"),
        version: int_member(obj, "version"),
        section_number: int_member(obj, "section"),
        sub_section_number: int_member(obj, "sub-section"),
        arm: bool_member(obj, "arm"),
        separate_carriageways: string_member(obj, "separate-carriageways"),
        traffic_group: string_member(obj, "traffic-group"),
        from_meter: from_meter(obj),
        to_meter: to_meter(obj),
    }
}

fn parse_intersection(obj: &Object) -> Option<Intersection> {
    let intersection_number = int_member(obj, INTERSECTION_NUMBER)?;
    Some(Intersection {
        id: long_member(obj, "id"),
        version: int_member(obj, "version"),
        intersection_number,
        intersection_part: int_member(obj, "intersection-part"),
        from_meter: from_meter(obj),
        to_meter: to_meter(obj),
    })
}

fn parse_side_area(obj: &Object) -> Option<SideArea> {
    let side_area_number = int_member(obj, SIDE_AREA_NUMBER)?;
    Some(SideArea {
        id: long_member(obj, "id"),
        version: int_member(obj, "version"),
        side_area_number,
        side_area_part: int_member(obj, "side-area-part"),
        from_meter: from_meter(obj),
        to_meter: to_meter(obj),
    })
}

/// Render a reference in the shape [`parse_road_sys_ref`] reads.
pub fn road_sys_ref_to_json(r: &RoadSysRef) -> Value {
    let mut obj = Map::new();

    let mut road_system = Map::new();
    put_opt(&mut road_system, "id", r.road_system.id);
    put_opt(&mut road_system, "version", r.road_system.version);
    put_opt(&mut road_system, "number", r.road_system.number);
    put_opt(&mut road_system, "road-category", r.road_system.category.map(|c| c.code()));
    put_opt(&mut road_system, "phase", r.road_system.phase.map(|p| p.code()));
    obj.insert(ROAD_SYSTEM.to_string(), Value::Object(road_system));

    if let Some(s) = &r.section {
        let mut section = Map::new();
        put_opt(&mut section, "id", s.id);
        put_opt(&mut section, "version", s.version);
        put_opt(&mut section, "section", s.section_number);
        put_opt(&mut section, "sub-section", s.sub_section_number);
        put_opt(&mut section, "arm", s.arm);
        put_opt(&mut section, "separate-carriageways", s.separate_carriageways.clone());
        put_opt(&mut section, "traffic-group", s.traffic_group.clone());
        put_opt(&mut section, FROM_METER, s.from_meter);
        put_opt(&mut section, TO_METER, s.to_meter);
        obj.insert(SECTION.to_string(), Value::Object(section));
    }

    if let Some(i) = &r.intersection {
        let mut intersection = Map::new();
        put_opt(&mut intersection, "id", i.id);
        put_opt(&mut intersection, "version", i.version);
        intersection.insert(INTERSECTION_NUMBER.to_string(), i.intersection_number.into());
        put_opt(&mut intersection, "intersection-part", i.intersection_part);
        put_opt(&mut intersection, FROM_METER, i.from_meter);
        put_opt(&mut intersection, TO_METER, i.to_meter);
        obj.insert(INTERSECTION.to_string(), Value::Object(intersection));
    }

    if let Some(a) = &r.side_area {
        let mut side_area = Map::new();
        put_opt(&mut side_area, "id", a.id);
        put_opt(&mut side_area, "version", a.version);
        side_area.insert(SIDE_AREA_NUMBER.to_string(), a.side_area_number.into());
        put_opt(&mut side_area, "side-area-part", a.side_area_part);
        put_opt(&mut side_area, FROM_METER, a.from_meter);
        put_opt(&mut side_area, TO_METER, a.to_meter);
        obj.insert(SIDE_AREA.to_string(), Value::Object(side_area));
    }

    put_opt(&mut obj, SHORT_FORM, r.short_form.clone());
    Value::Object(obj)
}

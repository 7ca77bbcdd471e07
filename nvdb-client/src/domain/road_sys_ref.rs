//! Road-system references.
//!
//! A road-system reference locates something on the classified road
//! network. The location is anchored either on a plain section of a road
//! system, on an intersection, or on a side area (rest/service area).

use std::fmt;

/// Road category of a road system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadCategory {
    European,
    National,
    County,
    Municipal,
    Private,
    Forest,
}

impl RoadCategory {
    /// Parse a one-letter category code (`E`, `R`, `F`, `K`, `P`, `S`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(RoadCategory::European),
            "R" => Some(RoadCategory::National),
            "F" => Some(RoadCategory::County),
            "K" => Some(RoadCategory::Municipal),
            "P" => Some(RoadCategory::Private),
            "S" => Some(RoadCategory::Forest),
            _ => None,
        }
    }

    /// The one-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            RoadCategory::European => "E",
            RoadCategory::National => "R",
            RoadCategory::County => "F",
            RoadCategory::Municipal => "K",
            RoadCategory::Private => "P",
            RoadCategory::Forest => "S",
        }
    }
}

impl fmt::Display for RoadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle phase of a road system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Existing,
    Planned,
    Project,
    Fictional,
}

impl Phase {
    /// Parse a one-letter phase code (`V`, `A`, `P`, `F`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "V" => Some(Phase::Existing),
            "A" => Some(Phase::Planned),
            "P" => Some(Phase::Project),
            "F" => Some(Phase::Fictional),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Phase::Existing => "V",
            Phase::Planned => "A",
            Phase::Project => "P",
            Phase::Fictional => "F",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A classified road, identified by category, number and phase.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSystem {
    pub id: Option<i64>,
    pub version: Option<i32>,
    pub number: Option<i32>,
    pub category: Option<RoadCategory>,
    pub phase: Option<Phase>,
}

/// A linear sub-range of a road system.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Option<i64>,
    pub version: Option<i32>,
    /// Section number along the road system.
    pub section_number: Option<i32>,
    /// Sub-section number within the section.
    pub sub_section_number: Option<i32>,
    /// Whether this is an arm (divided carriageway branch).
    pub arm: Option<bool>,
    /// Lane-separation code.
    pub separate_carriageways: Option<String>,
    /// Traffic-group code (e.g. vehicles or pedestrians).
    pub traffic_group: Option<String>,
    pub from_meter: Option<f64>,
    pub to_meter: Option<f64>,
}

/// A location anchored on an intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: Option<i64>,
    pub version: Option<i32>,
    pub intersection_number: i32,
    pub intersection_part: Option<i32>,
    pub from_meter: Option<f64>,
    pub to_meter: Option<f64>,
}

/// A location anchored on a side area (rest or service area).
#[derive(Debug, Clone, PartialEq)]
pub struct SideArea {
    pub id: Option<i64>,
    pub version: Option<i32>,
    pub side_area_number: i32,
    pub side_area_part: Option<i32>,
    pub from_meter: Option<f64>,
    pub to_meter: Option<f64>,
}

/// The sub-object a reference is located on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor<'a> {
    Section(&'a Section),
    Intersection(&'a Intersection),
    SideArea(&'a SideArea),
}

impl Anchor<'_> {
    pub fn from_meter(&self) -> Option<f64> {
        match self {
            Anchor::Section(s) => s.from_meter,
            Anchor::Intersection(i) => i.from_meter,
            Anchor::SideArea(a) => a.from_meter,
        }
    }

    pub fn to_meter(&self) -> Option<f64> {
        match self {
            Anchor::Section(s) => s.to_meter,
            Anchor::Intersection(i) => i.to_meter,
            Anchor::SideArea(a) => a.to_meter,
        }
    }
}

/// A composite reference to a location on the road network.
///
/// The road system is always present. At most one of section,
/// intersection and side area supplies the effective meter range; see
/// [`RoadSysRef::anchor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSysRef {
    pub road_system: RoadSystem,
    pub section: Option<Section>,
    pub intersection: Option<Intersection>,
    pub side_area: Option<SideArea>,
    /// Short textual form, e.g. "EV6 S1D1 m120-340".
    pub short_form: Option<String>,
}

impl RoadSysRef {
    /// The sub-object this reference is located on.
    ///
    /// A side area takes precedence over an intersection, which takes
    /// precedence over the plain section.
    pub fn anchor(&self) -> Option<Anchor<'_>> {
        if let Some(side_area) = &self.side_area {
            return Some(Anchor::SideArea(side_area));
        }
        if let Some(intersection) = &self.intersection {
            return Some(Anchor::Intersection(intersection));
        }
        self.section.as_ref().map(Anchor::Section)
    }

    /// Effective start of the referenced range.
    pub fn from_meter(&self) -> Option<f64> {
        self.anchor().and_then(|a| a.from_meter())
    }

    /// Effective end of the referenced range.
    pub fn to_meter(&self) -> Option<f64> {
        self.anchor().and_then(|a| a.to_meter())
    }

    /// Whether the reference denotes a single point rather than a range.
    pub fn is_point(&self) -> bool {
        match (self.from_meter(), self.to_meter()) {
            (Some(from), Some(to)) => from == to,
            _ => false,
        }
    }
}

impl fmt::Display for RoadSysRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(short_form) = &self.short_form {
            return f.write_str(short_form);
        }
        let category = self.road_system.category.map(|c| c.code()).unwrap_or("?");
        let phase = self.road_system.phase.map(|p| p.code()).unwrap_or("?");
        match self.road_system.number {
            Some(number) => write!(f, "{category}{phase}{number}")?,
            None => write!(f, "{category}{phase}")?,
        }
        match (self.from_meter(), self.to_meter()) {
            (Some(from), Some(to)) if from == to => write!(f, " m{from}"),
            (Some(from), Some(to)) => write!(f, " m{from}-{to}"),
            _ => Ok(()),
        }
    }
}

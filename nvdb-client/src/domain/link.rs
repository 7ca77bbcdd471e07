//! Road network links.

use chrono::NaiveDate;

use super::{Geometry, RoadSysRef};

/// A directed segment of the road network graph.
///
/// Positions are relative (0.0 to 1.0) along the link sequence the link
/// belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Id of the link sequence.
    pub id: i64,
    pub start_position: Option<f64>,
    pub end_position: Option<f64>,
    /// Length in meters.
    pub length: Option<f64>,
    pub start_node: Option<String>,
    pub end_node: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub municipality: Option<i32>,
    pub county: Option<i32>,
    pub region: Option<i32>,
    pub road_department: Option<i32>,
    pub geometry: Option<Geometry>,
    pub road_sys_ref: Option<RoadSysRef>,
}

impl Link {
    /// Whether the link is valid on the given date.
    ///
    /// A missing start date means "valid since forever"; a missing end
    /// date means "still valid". The end date is exclusive.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        let started = self.start_date.is_none_or(|start| start <= date);
        let not_ended = self.end_date.is_none_or(|end| date < end);
        started && not_ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Link {
        Link {
            id: 1,
            start_position: Some(0.0),
            end_position: Some(1.0),
            length: None,
            start_node: None,
            end_node: None,
            start_date: start,
            end_date: end,
            municipality: None,
            county: None,
            region: None,
            road_department: None,
            geometry: None,
            road_sys_ref: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_link_is_always_valid() {
        assert!(link(None, None).is_valid_on(date(1990, 1, 1)));
    }

    #[test]
    fn end_date_is_exclusive() {
        let l = link(Some(date(2020, 1, 1)), Some(date(2021, 1, 1)));
        assert!(!l.is_valid_on(date(2019, 12, 31)));
        assert!(l.is_valid_on(date(2020, 1, 1)));
        assert!(l.is_valid_on(date(2020, 12, 31)));
        assert!(!l.is_valid_on(date(2021, 1, 1)));
    }
}

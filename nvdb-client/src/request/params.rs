//! Flattening of query filters into query parameters.
//!
//! Absent options and empty lists emit nothing, so the server applies its
//! own defaults. List filters are comma-joined into one value; overlap
//! filters are repeated under the same key.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::{Include, IncludeGeometry, Page, RoadNetRequest, RoadObjectRequest};

/// An insertion-ordered, multi-valued map of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to exactly one value, replacing any previous values.
    pub fn put_single(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => *values = vec![value],
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Append a value under `key`, keeping existing values.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add the paging parameters for `page`.
    pub fn put_page(&mut self, page: &Page) {
        self.put_single("count", page.count.to_string());
        if let Some(start) = &page.start {
            self.put_single("start", start.clone());
        }
    }

    /// All `(key, value)` pairs in order, one pair per value.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect()
    }
}

/// Query parameters for a road object query.
pub fn road_object_params(request: &RoadObjectRequest) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(v) = request.segmented() {
        params.put_single("segmented", v.to_string());
    }
    if let Some(v) = request.projection() {
        params.put_single("srid", v.srid().to_string());
    }
    if let Some(v) = request.distance_tolerance() {
        params.put_single("geometry-tolerance", v.to_string());
    }
    if let Some(v) = request.depth() {
        params.put_single("depth", v);
    }
    if let Some(v) = include_argument(request.includes()) {
        params.put_single("include", v);
    }
    if let Some(v) = include_geometry_argument(request.include_geometries()) {
        params.put_single("include-geometry", v);
    }
    if let Some(v) = request.attribute_filter() {
        params.put_single("attribute-filter", v);
    }
    if let Some(v) = request.bbox() {
        params.put_single("bbox", v.to_string());
    }
    if let Some(v) = request.road_ref_filter() {
        params.put_single("road-ref", v);
    }
    if let Some(v) = request.ref_link_filter() {
        params.put_single("link-ref", v);
    }
    if let Some(v) = flatten(request.municipalities()) {
        params.put_single("municipality", v);
    }
    if let Some(v) = flatten(request.counties()) {
        params.put_single("county", v);
    }
    if let Some(v) = flatten(request.regions()) {
        params.put_single("region", v);
    }
    if let Some(v) = flatten(request.road_departments()) {
        params.put_single("road-department", v);
    }
    if let Some(v) = flatten(request.contract_areas()) {
        params.put_single("contract-area", v);
    }
    if let Some(v) = flatten(request.national_routes()) {
        params.put_single("national-route", v);
    }

    for filter in request.overlap_filters() {
        params.add("overlap", filter.to_string());
    }

    params
}

/// Query parameters shaping a single road object response.
///
/// Only includes, include-geometry, projection and geometry tolerance
/// apply to a lookup by id; filters are left out.
pub fn road_object_shaping_params(request: &RoadObjectRequest) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(v) = request.projection() {
        params.put_single("srid", v.srid().to_string());
    }
    if let Some(v) = request.distance_tolerance() {
        params.put_single("geometry-tolerance", v.to_string());
    }
    if let Some(v) = include_argument(request.includes()) {
        params.put_single("include", v);
    }
    if let Some(v) = include_geometry_argument(request.include_geometries()) {
        params.put_single("include-geometry", v);
    }

    params
}

/// Query parameters for a road network link query.
pub fn road_net_params(request: &RoadNetRequest) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(v) = flatten(request.regions()) {
        params.put_single("region", v);
    }
    if let Some(v) = flatten(request.counties()) {
        params.put_single("county", v);
    }
    if let Some(v) = flatten(request.municipalities()) {
        params.put_single("municipality", v);
    }
    if let Some(v) = flatten(request.road_departments()) {
        params.put_single("road-department", v);
    }
    if let Some(v) = request.bbox() {
        params.put_single("bbox", v.to_string());
    }
    if let Some(v) = request.projection() {
        params.put_single("srid", v.srid().to_string());
    }
    if let Some(v) = request.road_ref_filter() {
        params.put_single("road-ref", v);
    }

    params
}

/// Collapse an include set to its query value.
///
/// `All` trumps everything else. `Minimum` is implied by any other
/// selection, so it is only sent on its own.
fn include_argument(values: &BTreeSet<Include>) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    if values.contains(&Include::All) {
        return Some(Include::All.as_str().to_string());
    }

    if values.len() == 1 && values.contains(&Include::Minimum) {
        return Some(Include::Minimum.as_str().to_string());
    }

    Some(join(values.iter().filter(|i| **i != Include::Minimum).map(Include::as_str)))
}

/// Collapse an include-geometry set to its query value.
///
/// The full set is what the server sends anyway, so it is left out.
/// `None` overrides any other selection.
fn include_geometry_argument(values: &BTreeSet<IncludeGeometry>) -> Option<String> {
    if values.is_empty() || *values == IncludeGeometry::all() {
        return None;
    }

    if values.contains(&IncludeGeometry::None) {
        return Some(IncludeGeometry::None.as_str().to_string());
    }

    Some(join(values.iter().map(IncludeGeometry::as_str)))
}

fn flatten<T: Display>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(join(values.iter()))
}

fn join<T: Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

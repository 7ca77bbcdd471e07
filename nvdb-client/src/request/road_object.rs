//! Road object query filters.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{BoundingBox, Projection};

use super::Page;

/// Which optional parts of a road object the response should contain.
///
/// Variants are declared in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Include {
    Minimum,
    Metadata,
    Attributes,
    Relations,
    Location,
    RoadSegments,
    Geometry,
    All,
}

impl Include {
    pub fn as_str(&self) -> &'static str {
        match self {
            Include::Minimum => "minimum",
            Include::Metadata => "metadata",
            Include::Attributes => "attributes",
            Include::Relations => "relations",
            Include::Location => "location",
            Include::RoadSegments => "road-segments",
            Include::Geometry => "geometry",
            Include::All => "all",
        }
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which geometries a response should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncludeGeometry {
    /// The object's own registered geometry.
    Own,
    /// Geometry derived from the road network.
    Derived,
    /// No geometry at all. Overrides any other selection.
    None,
}

impl IncludeGeometry {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncludeGeometry::Own => "own",
            IncludeGeometry::Derived => "derived",
            IncludeGeometry::None => "none",
        }
    }

    /// Every geometry kind; what the server returns by default.
    pub fn all() -> BTreeSet<IncludeGeometry> {
        BTreeSet::from([IncludeGeometry::Own, IncludeGeometry::Derived])
    }
}

impl fmt::Display for IncludeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restrict results to objects overlapping objects of another type,
/// optionally filtered by an attribute expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapFilter {
    pub type_id: i32,
    pub filter: Option<String>,
}

impl OverlapFilter {
    pub fn new(type_id: i32) -> Self {
        Self {
            type_id,
            filter: None,
        }
    }

    pub fn with_filter(type_id: i32, filter: impl Into<String>) -> Self {
        Self {
            type_id,
            filter: Some(filter.into()),
        }
    }
}

impl fmt::Display for OverlapFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "{}({})", self.type_id, filter),
            None => write!(f, "{}", self.type_id),
        }
    }
}

/// Filters and response shaping for a road object query.
///
/// Built with the consuming `with_*` methods:
///
/// ```
/// use nvdb_client::request::{Include, RoadObjectRequest};
///
/// let request = RoadObjectRequest::default()
///     .with_municipalities([5001, 5025])
///     .with_include(Include::Attributes);
/// assert_eq!(request.municipalities(), &[5001, 5025]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadObjectRequest {
    segmented: Option<bool>,
    projection: Option<Projection>,
    distance_tolerance: Option<i32>,
    depth: Option<String>,
    includes: BTreeSet<Include>,
    include_geometries: BTreeSet<IncludeGeometry>,
    attribute_filter: Option<String>,
    bbox: Option<BoundingBox>,
    road_ref_filter: Option<String>,
    ref_link_filter: Option<String>,
    municipalities: Vec<i32>,
    counties: Vec<i32>,
    regions: Vec<i32>,
    road_departments: Vec<i32>,
    contract_areas: Vec<String>,
    national_routes: Vec<String>,
    overlap_filters: Vec<OverlapFilter>,
    page: Option<Page>,
}

impl RoadObjectRequest {
    pub fn with_segmented(mut self, segmented: bool) -> Self {
        self.segmented = Some(segmented);
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Simplify returned geometries to within this many meters.
    pub fn with_distance_tolerance(mut self, meters: i32) -> Self {
        self.distance_tolerance = Some(meters);
        self
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.depth = Some(depth.into());
        self
    }

    pub fn with_include(mut self, include: Include) -> Self {
        self.includes.insert(include);
        self
    }

    pub fn with_includes(mut self, includes: impl IntoIterator<Item = Include>) -> Self {
        self.includes.extend(includes);
        self
    }

    pub fn with_include_geometries(
        mut self,
        geometries: impl IntoIterator<Item = IncludeGeometry>,
    ) -> Self {
        self.include_geometries.extend(geometries);
        self
    }

    pub fn with_attribute_filter(mut self, filter: impl Into<String>) -> Self {
        self.attribute_filter = Some(filter.into());
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_road_ref_filter(mut self, filter: impl Into<String>) -> Self {
        self.road_ref_filter = Some(filter.into());
        self
    }

    pub fn with_ref_link_filter(mut self, filter: impl Into<String>) -> Self {
        self.ref_link_filter = Some(filter.into());
        self
    }

    pub fn with_municipalities(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.municipalities.extend(ids);
        self
    }

    pub fn with_counties(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.counties.extend(ids);
        self
    }

    pub fn with_regions(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.regions.extend(ids);
        self
    }

    pub fn with_road_departments(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.road_departments.extend(ids);
        self
    }

    pub fn with_contract_areas<S: Into<String>>(
        mut self,
        areas: impl IntoIterator<Item = S>,
    ) -> Self {
        self.contract_areas.extend(areas.into_iter().map(Into::into));
        self
    }

    pub fn with_national_routes<S: Into<String>>(
        mut self,
        routes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.national_routes.extend(routes.into_iter().map(Into::into));
        self
    }

    pub fn with_overlap_filter(mut self, filter: OverlapFilter) -> Self {
        self.overlap_filters.push(filter);
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn segmented(&self) -> Option<bool> {
        self.segmented
    }

    pub fn projection(&self) -> Option<Projection> {
        self.projection
    }

    pub fn distance_tolerance(&self) -> Option<i32> {
        self.distance_tolerance
    }

    pub fn depth(&self) -> Option<&str> {
        self.depth.as_deref()
    }

    pub fn includes(&self) -> &BTreeSet<Include> {
        &self.includes
    }

    pub fn include_geometries(&self) -> &BTreeSet<IncludeGeometry> {
        &self.include_geometries
    }

    pub fn attribute_filter(&self) -> Option<&str> {
        self.attribute_filter.as_deref()
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        self.bbox
    }

    pub fn road_ref_filter(&self) -> Option<&str> {
        self.road_ref_filter.as_deref()
    }

    pub fn ref_link_filter(&self) -> Option<&str> {
        self.ref_link_filter.as_deref()
    }

    pub fn municipalities(&self) -> &[i32] {
        &self.municipalities
    }

    pub fn counties(&self) -> &[i32] {
        &self.counties
    }

    pub fn regions(&self) -> &[i32] {
        &self.regions
    }

    pub fn road_departments(&self) -> &[i32] {
        &self.road_departments
    }

    pub fn contract_areas(&self) -> &[String] {
        &self.contract_areas
    }

    pub fn national_routes(&self) -> &[String] {
        &self.national_routes
    }

    pub fn overlap_filters(&self) -> &[OverlapFilter] {
        &self.overlap_filters
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }
}

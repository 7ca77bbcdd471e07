//! Road network link query filters.

use crate::domain::{BoundingBox, Projection};

use super::Page;

/// Filters for a road network link query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadNetRequest {
    regions: Vec<i32>,
    counties: Vec<i32>,
    municipalities: Vec<i32>,
    road_departments: Vec<i32>,
    bbox: Option<BoundingBox>,
    projection: Option<Projection>,
    road_ref_filter: Option<String>,
    page: Option<Page>,
}

impl RoadNetRequest {
    pub fn with_regions(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.regions.extend(ids);
        self
    }

    pub fn with_counties(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.counties.extend(ids);
        self
    }

    pub fn with_municipalities(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.municipalities.extend(ids);
        self
    }

    pub fn with_road_departments(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.road_departments.extend(ids);
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn with_road_ref_filter(mut self, filter: impl Into<String>) -> Self {
        self.road_ref_filter = Some(filter.into());
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn regions(&self) -> &[i32] {
        &self.regions
    }

    pub fn counties(&self) -> &[i32] {
        &self.counties
    }

    pub fn municipalities(&self) -> &[i32] {
        &self.municipalities
    }

    pub fn road_departments(&self) -> &[i32] {
        &self.road_departments
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        self.bbox
    }

    pub fn projection(&self) -> Option<Projection> {
        self.projection
    }

    pub fn road_ref_filter(&self) -> Option<&str> {
        self.road_ref_filter.as_deref()
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }
}

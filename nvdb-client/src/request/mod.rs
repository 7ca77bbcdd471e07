//! Query filters and their query-parameter form.

mod page;
mod params;
mod road_net;
mod road_object;

pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use params::{QueryParams, road_net_params, road_object_params, road_object_shaping_params};
pub use road_net::RoadNetRequest;
pub use road_object::{Include, IncludeGeometry, OverlapFilter, RoadObjectRequest};

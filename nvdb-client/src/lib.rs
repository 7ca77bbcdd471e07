//! Client SDK for the national road network data API.
//!
//! Reads road network links, road objects and the data catalogue over
//! HTTP, and turns the API's JSON into typed values:
//!
//! - [`domain`]: the typed values
//! - [`parse`]: JSON to domain conversion
//! - [`request`]: query filters and their query-parameter form
//! - [`client`]: the async HTTP client and paged results

pub mod client;
pub mod domain;
pub mod parse;
pub mod request;

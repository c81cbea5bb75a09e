// External Catalog Client: typed, paginated access to career, industry and
// interest-profiler data. All upstream traffic goes through `gateway`.

pub mod client;
pub mod fallback;
pub mod handlers;
pub mod job_zones;
pub mod models;
pub mod pagination;

pub use client::CatalogClient;

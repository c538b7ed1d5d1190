//! Cinescout engine: catalog and tracking-backend IO, and command execution.
mod catalog;
mod engine;
mod metrics;
mod types;

pub use catalog::{CatalogSettings, MovieCatalog, TmdbCatalog};
pub use engine::EngineHandle;
pub use metrics::{normalize_query, HttpSearchMetrics, MetricsSettings, SearchMetrics};
pub use types::{
    CatalogError, CatalogPayload, EngineEvent, MetricsError, MovieDto, RequestSeq, SearchCountDoc,
};

use serde::Deserialize;
use thiserror::Error;

/// Monotonic tag the controller assigns to each fetch at trigger time.
pub type RequestSeq = u64;

/// One movie as the catalog serializes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDto {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

/// Raw catalog payload. The provider reports domain-level failures in-band
/// through `Response`/`Error` rather than through the HTTP status.
#[derive(Debug, Deserialize)]
pub struct CatalogPayload {
    #[serde(default)]
    pub results: Option<Vec<MovieDto>>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl CatalogPayload {
    pub fn is_rejected(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}

/// One search-count document in the tracking backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchCountDoc {
    pub id: String,
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
    #[error("api key is not a valid header value")]
    InvalidApiKey,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// The catalog answered 2xx but flagged the request as failed.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by catalog"))]
    Rejected { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("invalid metrics url: {0}")]
    InvalidUrl(String),
    #[error("api key is not a valid header value")]
    InvalidApiKey,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Completion events the engine reports back to the controller loop.
/// A `RecordSearch` command never emits one; its failures are only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchFinished {
        seq: RequestSeq,
        result: Result<Vec<MovieDto>, CatalogError>,
    },
    TrendingFinished {
        result: Result<Vec<SearchCountDoc>, MetricsError>,
    },
}

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{MetricsError, MovieDto, SearchCountDoc};

/// Poster images are stored as absolute URLs so the trending strip can render
/// them without knowing the catalog's CDN layout.
const POSTER_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Connection settings for the popularity-tracking backend.
#[derive(Debug, Clone)]
pub struct MetricsSettings {
    pub base_url: String,
    pub api_key: String,
    pub trending_limit: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl MetricsSettings {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            trending_limit: 5,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Collapses a raw query into the counter key the backend stores.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[async_trait::async_trait]
pub trait SearchMetrics: Send + Sync {
    /// Top documents ranked by stored search count.
    async fn trending(&self) -> Result<Vec<SearchCountDoc>, MetricsError>;
    /// Increment the counter for `query`, creating the document on first use.
    async fn record_search(&self, query: &str, movie: &MovieDto) -> Result<(), MetricsError>;
}

/// Document-store REST client for the hosted tracking backend.
#[derive(Debug, Clone)]
pub struct HttpSearchMetrics {
    client: reqwest::Client,
    base_url: Url,
    trending_limit: usize,
}

#[derive(Debug, Deserialize)]
struct DocumentPage {
    #[serde(default)]
    documents: Vec<SearchCountDoc>,
}

#[derive(Debug, Serialize)]
struct NewDocument<'a> {
    search_term: &'a str,
    count: u64,
    movie_id: u64,
    title: &'a str,
    poster_url: Option<String>,
    updated_utc: String,
}

#[derive(Debug, Serialize)]
struct CountPatch {
    count: u64,
    updated_utc: String,
}

impl HttpSearchMetrics {
    pub fn new(settings: &MetricsSettings) -> Result<Self, MetricsError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| MetricsError::InvalidUrl(err.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| MetricsError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| MetricsError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url,
            trending_limit: settings.trending_limit,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MetricsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MetricsError::InvalidUrl("metrics base cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, MetricsError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::HttpStatus(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|err| MetricsError::MalformedPayload(err.to_string()))
    }

    async fn lookup(&self, key: &str) -> Result<Option<SearchCountDoc>, MetricsError> {
        let mut url = self.endpoint(&["documents"])?;
        url.query_pairs_mut().append_pair("search_term", key);
        let page: DocumentPage = self.get_json(url).await?;
        Ok(page.documents.into_iter().next())
    }
}

#[async_trait::async_trait]
impl SearchMetrics for HttpSearchMetrics {
    async fn trending(&self) -> Result<Vec<SearchCountDoc>, MetricsError> {
        let mut url = self.endpoint(&["documents"])?;
        url.query_pairs_mut()
            .append_pair("order_by", "count")
            .append_pair("order", "desc")
            .append_pair("limit", &self.trending_limit.to_string());
        let page: DocumentPage = self.get_json(url).await?;
        Ok(page.documents)
    }

    async fn record_search(&self, query: &str, movie: &MovieDto) -> Result<(), MetricsError> {
        let key = normalize_query(query);
        match self.lookup(&key).await? {
            Some(doc) => {
                let url = self.endpoint(&["documents", &doc.id])?;
                let patch = CountPatch {
                    count: doc.count + 1,
                    updated_utc: Utc::now().to_rfc3339(),
                };
                let response = self
                    .client
                    .patch(url)
                    .json(&patch)
                    .send()
                    .await
                    .map_err(map_transport_error)?;
                ensure_success(response.status())
            }
            None => {
                let url = self.endpoint(&["documents"])?;
                let doc = NewDocument {
                    search_term: &key,
                    count: 1,
                    movie_id: movie.id,
                    title: &movie.title,
                    poster_url: poster_url(movie),
                    updated_utc: Utc::now().to_rfc3339(),
                };
                let response = self
                    .client
                    .post(url)
                    .json(&doc)
                    .send()
                    .await
                    .map_err(map_transport_error)?;
                ensure_success(response.status())
            }
        }
    }
}

fn poster_url(movie: &MovieDto) -> Option<String> {
    movie
        .poster_path
        .as_deref()
        .map(|path| format!("{POSTER_IMAGE_BASE}{path}"))
}

fn ensure_success(status: reqwest::StatusCode) -> Result<(), MetricsError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(MetricsError::HttpStatus(status.as_u16()))
    }
}

fn map_transport_error(err: reqwest::Error) -> MetricsError {
    if err.is_timeout() {
        return MetricsError::Timeout;
    }
    MetricsError::Network(err.to_string())
}

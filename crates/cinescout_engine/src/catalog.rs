use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;

use crate::{CatalogError, CatalogPayload, MovieDto};

/// Connection settings for the movie metadata provider.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl CatalogSettings {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// `GET {base}/search/movie?query=<escaped text>`
    async fn search(&self, query: &str) -> Result<Vec<MovieDto>, CatalogError>;
    /// `GET {base}/discover/movie?sort_by=popularity.desc`
    async fn discover_popular(&self) -> Result<Vec<MovieDto>, CatalogError>;
}

/// TMDB-shaped catalog client with bearer authorization.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl TmdbCatalog {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| CatalogError::InvalidUrl(err.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| CatalogError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl("catalog base cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    async fn fetch_payload(&self, url: Url) -> Result<Vec<MovieDto>, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        let payload: CatalogPayload = response
            .json()
            .await
            .map_err(|err| CatalogError::MalformedPayload(err.to_string()))?;

        if payload.is_rejected() {
            return Err(CatalogError::Rejected {
                message: payload.error,
            });
        }

        // A missing results field is an empty page, not an error.
        Ok(payload.results.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn search(&self, query: &str) -> Result<Vec<MovieDto>, CatalogError> {
        let mut url = self.endpoint("search/movie")?;
        url.query_pairs_mut().append_pair("query", query);
        self.fetch_payload(url).await
    }

    async fn discover_popular(&self) -> Result<Vec<MovieDto>, CatalogError> {
        let mut url = self.endpoint("discover/movie")?;
        url.query_pairs_mut()
            .append_pair("sort_by", "popularity.desc");
        self.fetch_payload(url).await
    }
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        return CatalogError::Timeout;
    }
    CatalogError::Network(err.to_string())
}

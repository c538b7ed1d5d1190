//! Process configuration, read from the environment exactly once at startup
//! and passed by reference from there on.

use std::env;

use anyhow::{Context, Result};
use cinescout_engine::{CatalogSettings, MetricsSettings};

use super::logging::LogDestination;

const DEFAULT_CATALOG_BASE: &str = "https://api.themoviedb.org/3";

pub struct AppConfig {
    pub catalog: CatalogSettings,
    pub metrics: MetricsSettings,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let catalog_base =
            env::var("CINESCOUT_TMDB_BASE").unwrap_or_else(|_| DEFAULT_CATALOG_BASE.to_string());
        let catalog_key = env::var("CINESCOUT_TMDB_KEY")
            .context("CINESCOUT_TMDB_KEY must be set to a TMDB API read token")?;
        let metrics_base = env::var("CINESCOUT_METRICS_BASE")
            .context("CINESCOUT_METRICS_BASE must be set to the tracking backend URL")?;
        let metrics_key = env::var("CINESCOUT_METRICS_KEY")
            .context("CINESCOUT_METRICS_KEY must be set to the tracking backend key")?;

        let mut metrics = MetricsSettings::new(metrics_base, metrics_key);
        if let Ok(raw) = env::var("CINESCOUT_TRENDING_LIMIT") {
            metrics.trending_limit = raw
                .parse()
                .context("CINESCOUT_TRENDING_LIMIT must be a positive integer")?;
        }

        Ok(Self {
            catalog: CatalogSettings::new(catalog_base, catalog_key),
            metrics,
            log_destination: log_destination(env::var("CINESCOUT_LOG").ok().as_deref()),
        })
    }
}

fn log_destination(raw: Option<&str>) -> LogDestination {
    match raw {
        Some("term") => LogDestination::Terminal,
        Some("both") => LogDestination::Both,
        _ => LogDestination::File,
    }
}

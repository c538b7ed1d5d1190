use std::sync::{mpsc, Arc};
use std::thread;

use scout_logging::{scout_error, scout_warn};

use crate::catalog::MovieCatalog;
use crate::metrics::SearchMetrics;
use crate::{EngineEvent, MovieDto, RequestSeq};

enum EngineCommand {
    FetchMovies { seq: RequestSeq, query: String },
    LoadTrending,
    RecordSearch { query: String, movie: MovieDto },
}

/// Handle to the IO thread. Commands are fire-and-forget; completions arrive
/// on the receiver returned by [`EngineHandle::new`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        metrics: Arc<dyn SearchMetrics>,
    ) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    scout_error!("engine runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let catalog = catalog.clone();
                let metrics = metrics.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(catalog.as_ref(), metrics.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch_movies(&self, seq: RequestSeq, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchMovies {
            seq,
            query: query.into(),
        });
    }

    pub fn load_trending(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadTrending);
    }

    pub fn record_search(&self, query: impl Into<String>, movie: MovieDto) {
        let _ = self.cmd_tx.send(EngineCommand::RecordSearch {
            query: query.into(),
            movie,
        });
    }
}

async fn handle_command(
    catalog: &dyn MovieCatalog,
    metrics: &dyn SearchMetrics,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchMovies { seq, query } => {
            // An empty query means the discover/popular shape; anything else
            // searches. Binary choice, no middle ground.
            let result = if query.is_empty() {
                catalog.discover_popular().await
            } else {
                catalog.search(&query).await
            };
            let _ = event_tx.send(EngineEvent::SearchFinished { seq, result });
        }
        EngineCommand::LoadTrending => {
            let result = metrics.trending().await;
            let _ = event_tx.send(EngineEvent::TrendingFinished { result });
        }
        EngineCommand::RecordSearch { query, movie } => {
            // Fire-and-forget: a failed count update is logged, never shown,
            // and must not disturb the search panes.
            if let Err(err) = metrics.record_search(&query, &movie).await {
                scout_warn!("search count update failed for {query:?}: {err}");
            }
        }
    }
}

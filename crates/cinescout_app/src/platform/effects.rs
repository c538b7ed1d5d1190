use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use cinescout_core::{Effect, MovieRecord, Msg, SearchFailure, TrendingEntry};
use cinescout_engine::{
    CatalogError, EngineEvent, EngineHandle, HttpSearchMetrics, MovieDto, SearchCountDoc,
    TmdbCatalog,
};
use scout_logging::{scout_debug, scout_warn};

use super::config::AppConfig;

/// Executes core effects against the engine and pumps engine completions
/// back into the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = TmdbCatalog::new(&config.catalog).context("build catalog client")?;
        let metrics = HttpSearchMetrics::new(&config.metrics).context("build metrics client")?;
        let (engine, events) = EngineHandle::new(Arc::new(catalog), Arc::new(metrics));
        spawn_event_pump(events, msg_tx.clone());
        Ok(Self { engine, msg_tx })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ArmDebounce {
                    generation,
                    delay_ms,
                } => {
                    // Superseded timers are never canceled; the core discards
                    // their expiries by generation.
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(Duration::from_millis(delay_ms));
                        let _ = msg_tx.send(Msg::DebounceElapsed { generation });
                    });
                }
                Effect::FetchMovies { seq, query } => {
                    scout_debug!("fetch seq={} query_len={}", seq, query.len());
                    self.engine.fetch_movies(seq, query);
                }
                Effect::LoadTrending => self.engine.load_trending(),
                Effect::RecordSearch { query, movie } => {
                    self.engine.record_search(query, to_dto(movie));
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::SearchFinished { seq, result } => Msg::SearchFinished {
                    seq,
                    outcome: result
                        .map(|movies| movies.into_iter().map(to_record).collect())
                        .map_err(to_failure),
                },
                EngineEvent::TrendingFinished { result } => Msg::TrendingFinished {
                    outcome: result
                        .map(|docs| docs.into_iter().map(to_trending).collect())
                        .map_err(|err| format!("Error fetching trending movies: {err}")),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// The user only ever sees the transport/domain split; the full error goes
/// to the log.
fn to_failure(err: CatalogError) -> SearchFailure {
    match err {
        CatalogError::Rejected { message } => SearchFailure::Domain { message },
        other => {
            scout_warn!("catalog fetch failed: {other}");
            SearchFailure::Transport
        }
    }
}

fn to_record(dto: MovieDto) -> MovieRecord {
    MovieRecord {
        id: dto.id,
        title: dto.title,
        poster_path: dto.poster_path,
        vote_average: dto.vote_average,
        release_date: dto.release_date,
        original_language: dto.original_language,
        popularity: dto.popularity,
    }
}

fn to_dto(record: MovieRecord) -> MovieDto {
    MovieDto {
        id: record.id,
        title: record.title,
        poster_path: record.poster_path,
        vote_average: record.vote_average,
        release_date: record.release_date,
        original_language: record.original_language,
        popularity: record.popularity,
    }
}

fn to_trending(doc: SearchCountDoc) -> TrendingEntry {
    TrendingEntry {
        movie_id: doc.movie_id,
        title: doc.title,
        poster_url: doc.poster_url,
        searches: doc.count,
    }
}

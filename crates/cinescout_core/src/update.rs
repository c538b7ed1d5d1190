use crate::state::DEBOUNCE_DELAY_MS;
use crate::{AppState, Effect, MovieRecord, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.begin_trending_load();
            let seq = state.begin_search(String::new());
            state.mark_dirty();
            vec![
                Effect::LoadTrending,
                Effect::FetchMovies {
                    seq,
                    query: String::new(),
                },
            ]
        }
        Msg::QueryEdited(text) => {
            if text == state.query() {
                return (state, Vec::new());
            }
            let generation = state.set_query(text);
            state.mark_dirty();
            vec![Effect::ArmDebounce {
                generation,
                delay_ms: DEBOUNCE_DELAY_MS,
            }]
        }
        Msg::DebounceElapsed { generation } => {
            if !state.is_current_generation(generation) {
                // A newer keystroke re-armed the timer; this expiry is obsolete.
                return (state, Vec::new());
            }
            let candidate = state.query().to_string();
            if state.effective_query() == Some(candidate.as_str()) {
                // Same effective value as last time; trigger only on change.
                return (state, Vec::new());
            }
            let seq = state.begin_search(candidate.clone());
            state.mark_dirty();
            vec![Effect::FetchMovies {
                seq,
                query: candidate,
            }]
        }
        Msg::SearchFinished { seq, outcome } => {
            if !state.is_latest_request(seq) {
                // Superseded fetch; the newest request owns the panes now.
                return (state, Vec::new());
            }
            state.mark_dirty();
            match outcome {
                Ok(movies) => {
                    let effects = first_hit_report(state.effective_query(), &movies);
                    state.apply_results(movies);
                    effects
                }
                Err(failure) => {
                    state.apply_failure(&failure);
                    Vec::new()
                }
            }
        }
        Msg::TrendingFinished { outcome } => {
            state.mark_dirty();
            match outcome {
                Ok(entries) => state.apply_trending(entries),
                Err(message) => state.apply_trending_failure(message),
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// A successful non-empty search with at least one hit reports the first
/// record to the tracking backend. Discover results never report.
fn first_hit_report(effective_query: Option<&str>, movies: &[MovieRecord]) -> Vec<Effect> {
    match (effective_query, movies.first()) {
        (Some(query), Some(first)) if !query.is_empty() => vec![Effect::RecordSearch {
            query: query.to_string(),
            movie: first.clone(),
        }],
        _ => Vec::new(),
    }
}

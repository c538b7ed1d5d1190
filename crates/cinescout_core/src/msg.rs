use crate::{MovieRecord, SearchFailure, TrendingEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App mounted: kick off the trending load and the initial popular list.
    Started,
    /// User edited the search box (raw text, not debounced).
    QueryEdited(String),
    /// A previously armed quiet-period timer expired.
    DebounceElapsed { generation: u64 },
    /// The engine finished a search/discover fetch.
    SearchFinished {
        seq: u64,
        outcome: Result<Vec<MovieRecord>, SearchFailure>,
    },
    /// The engine finished loading the trending list.
    TrendingFinished {
        outcome: Result<Vec<TrendingEntry>, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

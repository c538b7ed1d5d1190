use crate::MovieRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// (Re)arm the quiet-period timer for the given input generation.
    /// An earlier generation's expiry is obsolete the moment this is emitted.
    ArmDebounce { generation: u64, delay_ms: u64 },
    /// Issue exactly one catalog fetch: search when `query` is non-empty,
    /// discover-popular otherwise.
    FetchMovies { seq: u64, query: String },
    /// Load the trending list from the tracking backend.
    LoadTrending,
    /// Fire-and-forget search-count report for the first hit of a search.
    RecordSearch { query: String, movie: MovieRecord },
}

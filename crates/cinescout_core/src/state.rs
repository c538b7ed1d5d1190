use crate::view_model::{AppViewModel, MovieRowView, SearchPane, TrendingPane, TrendingRowView};

/// Quiet period after the last keystroke before a search fires.
pub const DEBOUNCE_DELAY_MS: u64 = 500;

/// Shown when the catalog could not be reached at all.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies. Please try again later.";

/// Shown when the catalog rejected the request without supplying a message.
pub const GENERIC_REJECTION_ERROR: &str = "Failed to fetch movies";

/// One movie as the catalog returns it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: Option<String>,
    pub original_language: Option<String>,
    pub popularity: f64,
}

/// One row of the trending strip, ranked by stored search count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    pub movie_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub searches: u64,
}

/// Why a search fetch failed, as far as the controller cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// The catalog could not be reached, or answered with a non-success status.
    Transport,
    /// The catalog answered but flagged the request as failed in the payload.
    Domain { message: Option<String> },
}

impl SearchFailure {
    /// User-facing text for the error pane.
    pub fn user_message(&self) -> String {
        match self {
            SearchFailure::Transport => GENERIC_FETCH_ERROR.to_string(),
            SearchFailure::Domain { message } => message
                .clone()
                .unwrap_or_else(|| GENERIC_REJECTION_ERROR.to_string()),
        }
    }
}

/// Controller state for the search and trending panes.
///
/// Mutated only through [`crate::update`]; the platform reads it via
/// [`AppState::view`]. Two counters keep stale asynchrony out:
/// `debounce_generation` discards expiries of superseded timers, and
/// `request_seq` discards completions of superseded fetches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query: String,
    debounce_generation: u64,
    effective_query: Option<String>,
    request_seq: u64,
    loading: bool,
    error_message: Option<String>,
    movies: Vec<MovieRecord>,
    trending: Vec<TrendingEntry>,
    trending_loading: bool,
    trending_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let search = if self.loading {
            SearchPane::Loading
        } else if let Some(message) = &self.error_message {
            SearchPane::Error(message.clone())
        } else {
            SearchPane::Gallery(self.movies.iter().map(movie_row).collect())
        };

        let trending = if self.trending_loading {
            TrendingPane::Loading
        } else if let Some(message) = &self.trending_error {
            TrendingPane::Error(message.clone())
        } else {
            TrendingPane::Ranked(self.trending.iter().map(trending_row).collect())
        };

        AppViewModel {
            query: self.query.clone(),
            search,
            trending,
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is owed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// Records the latest raw input and invalidates any armed timer.
    pub(crate) fn set_query(&mut self, text: String) -> u64 {
        self.query = text;
        self.debounce_generation += 1;
        self.debounce_generation
    }

    pub(crate) fn is_current_generation(&self, generation: u64) -> bool {
        generation == self.debounce_generation
    }

    pub(crate) fn effective_query(&self) -> Option<&str> {
        self.effective_query.as_deref()
    }

    /// Commits an effective query and opens a new request lifetime.
    /// Returns the sequence number the fetch must carry.
    pub(crate) fn begin_search(&mut self, query: String) -> u64 {
        self.effective_query = Some(query);
        self.request_seq += 1;
        self.loading = true;
        self.error_message = None;
        self.request_seq
    }

    pub(crate) fn is_latest_request(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    pub(crate) fn apply_results(&mut self, movies: Vec<MovieRecord>) {
        self.loading = false;
        self.error_message = None;
        self.movies = movies;
    }

    pub(crate) fn apply_failure(&mut self, failure: &SearchFailure) {
        self.loading = false;
        self.error_message = Some(failure.user_message());
        self.movies.clear();
    }

    pub(crate) fn begin_trending_load(&mut self) {
        self.trending_loading = true;
        self.trending_error = None;
    }

    pub(crate) fn apply_trending(&mut self, entries: Vec<TrendingEntry>) {
        self.trending_loading = false;
        self.trending_error = None;
        self.trending = entries;
    }

    pub(crate) fn apply_trending_failure(&mut self, message: String) {
        self.trending_loading = false;
        self.trending_error = Some(message);
    }
}

fn movie_row(movie: &MovieRecord) -> MovieRowView {
    MovieRowView {
        id: movie.id,
        title: movie.title.clone(),
        poster_path: movie.poster_path.clone(),
        vote_average: movie.vote_average,
        release_date: movie.release_date.clone(),
        original_language: movie.original_language.clone(),
    }
}

fn trending_row(entry: &TrendingEntry) -> TrendingRowView {
    TrendingRowView {
        movie_id: entry.movie_id,
        title: entry.title.clone(),
        poster_url: entry.poster_url.clone(),
        searches: entry.searches,
    }
}

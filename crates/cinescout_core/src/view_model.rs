/// Render-ready snapshot of [`crate::AppState`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    /// Raw input text, echoed immediately (never debounced).
    pub query: String,
    pub search: SearchPane,
    pub trending: TrendingPane,
    pub dirty: bool,
}

/// The all-movies section renders exactly one of these branches.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPane {
    Loading,
    Error(String),
    Gallery(Vec<MovieRowView>),
}

/// The trending section renders exactly one of these branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendingPane {
    Loading,
    Error(String),
    Ranked(Vec<TrendingRowView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRowView {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: Option<String>,
    pub original_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingRowView {
    pub movie_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub searches: u64,
}

//! Cinescout core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, MovieRecord, SearchFailure, TrendingEntry, DEBOUNCE_DELAY_MS, GENERIC_FETCH_ERROR,
    GENERIC_REJECTION_ERROR,
};
pub use update::update;
pub use view_model::{AppViewModel, MovieRowView, SearchPane, TrendingPane, TrendingRowView};

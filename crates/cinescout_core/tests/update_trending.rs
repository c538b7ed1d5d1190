use cinescout_core::{
    update, AppState, Effect, Msg, SearchFailure, SearchPane, TrendingEntry, TrendingPane,
};

fn entry(movie_id: u64, title: &str, searches: u64) -> TrendingEntry {
    TrendingEntry {
        movie_id,
        title: title.to_string(),
        poster_url: Some(format!("https://img.example/{movie_id}.jpg")),
        searches,
    }
}

fn started() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert!(effects.contains(&Effect::LoadTrending));
    state
}

#[test]
fn trending_loads_once_on_start() {
    let state = started();
    assert_eq!(state.view().trending, TrendingPane::Loading);

    let (state, effects) = update(
        state,
        Msg::TrendingFinished {
            outcome: Ok(vec![entry(268, "Batman", 40), entry(603, "The Matrix", 12)]),
        },
    );
    assert!(effects.is_empty());
    match state.view().trending {
        TrendingPane::Ranked(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].title, "Batman");
            assert_eq!(rows[0].searches, 40);
        }
        other => panic!("expected ranked rows, got {other:?}"),
    }
}

#[test]
fn trending_failure_stays_on_its_own_channel() {
    let state = started();
    let (state, _effects) = update(
        state,
        Msg::TrendingFinished {
            outcome: Err("Error fetching trending movies: timeout".to_string()),
        },
    );

    assert_eq!(
        state.view().trending,
        TrendingPane::Error("Error fetching trending movies: timeout".to_string())
    );
    // The search pane is still waiting on the mount-time popular fetch.
    assert_eq!(state.view().search, SearchPane::Loading);
}

#[test]
fn search_failure_leaves_trending_untouched() {
    let state = started();
    let (state, _effects) = update(
        state,
        Msg::TrendingFinished {
            outcome: Ok(vec![entry(268, "Batman", 40)]),
        },
    );

    let (state, _effects) = update(
        state,
        Msg::SearchFinished {
            seq: 1,
            outcome: Err(SearchFailure::Transport),
        },
    );

    assert!(matches!(state.view().search, SearchPane::Error(_)));
    match state.view().trending {
        TrendingPane::Ranked(rows) => assert_eq!(rows.len(), 1),
        other => panic!("expected ranked rows, got {other:?}"),
    }
}

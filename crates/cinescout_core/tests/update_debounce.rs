use std::sync::Once;

use cinescout_core::{update, AppState, Effect, Msg, DEBOUNCE_DELAY_MS};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn started() -> AppState {
    let (state, _effects) = update(AppState::new(), Msg::Started);
    state
}

fn edit(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::QueryEdited(text.to_string()))
}

fn armed_generation(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::ArmDebounce {
            generation,
            delay_ms,
        }] => {
            assert_eq!(*delay_ms, DEBOUNCE_DELAY_MS);
            *generation
        }
        other => panic!("expected a single ArmDebounce effect, got {other:?}"),
    }
}

#[test]
fn every_edit_rearms_with_a_newer_generation() {
    init_logging();
    let (state, effects) = edit(started(), "b");
    let first = armed_generation(&effects);

    let (_state, effects) = edit(state, "ba");
    let second = armed_generation(&effects);

    assert!(second > first);
}

#[test]
fn only_the_last_edit_in_a_window_becomes_effective() {
    init_logging();
    let (state, effects) = edit(started(), "b");
    let stale_a = armed_generation(&effects);
    let (state, effects) = edit(state, "ba");
    let stale_b = armed_generation(&effects);
    let (state, effects) = edit(state, "bat");
    let current = armed_generation(&effects);

    // Superseded timers may still fire; their expiries must be discarded.
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: stale_a });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: stale_b });
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation: current });
    match effects.as_slice() {
        [Effect::FetchMovies { query, .. }] => assert_eq!(query, "bat"),
        other => panic!("expected a fetch for the final text, got {other:?}"),
    }
}

#[test]
fn identical_edit_does_not_rearm() {
    init_logging();
    let (state, effects) = edit(started(), "bat");
    armed_generation(&effects);

    let (_state, effects) = edit(state, "bat");
    assert!(effects.is_empty());
}

#[test]
fn unchanged_effective_query_does_not_refetch() {
    init_logging();
    let (state, effects) = edit(started(), "bat");
    let generation = armed_generation(&effects);
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(effects.len(), 1);

    // The same timer firing twice must not issue a second fetch.
    let (_state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert!(effects.is_empty());
}

#[test]
fn editing_back_to_the_effective_value_fetches_nothing() {
    init_logging();
    let (state, effects) = edit(started(), "bat");
    let generation = armed_generation(&effects);
    let (state, _effects) = update(state, Msg::DebounceElapsed { generation });

    // Type one more letter, then erase it before the timer settles.
    let (state, _effects) = edit(state, "batm");
    let (state, effects) = edit(state, "bat");
    let generation = armed_generation(&effects);

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert!(effects.is_empty());
}

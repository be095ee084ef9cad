mod common;

use std::time::Duration;

use common::{demo_fetch, record_loading, ScriptedFetch, LOAD, REFRESH};
use refreshable::fetch::DEFAULT_LATENCY;
use refreshable::ui::refresh::{refresh_store, LoadPhase, RefreshIntent, RefreshState};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn button_tap_loads_test_records() {
    let store = refresh_store(demo_fetch());
    let task = store.send(RefreshIntent::ButtonTapped);
    assert!(store.state().is_loading());

    task.finish().await;
    let state = store.state();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.titles(), LOAD);
}

#[tokio::test(start_paused = true)]
async fn pull_to_refresh_loads_refresh_records() {
    let store = refresh_store(demo_fetch());
    store.send(RefreshIntent::PullToRefresh).finish().await;
    assert_eq!(store.state().titles(), REFRESH);
}

#[tokio::test(start_paused = true)]
async fn send_while_loading_spans_the_whole_load() {
    let store = refresh_store(demo_fetch());
    let start = Instant::now();
    let seen = record_loading(store.subscribe(), start);

    store
        .send_while(RefreshIntent::PullToRefresh, RefreshState::is_loading)
        .await;

    assert!(!store.state().is_loading());
    assert_eq!(store.state().titles(), REFRESH);
    assert_eq!(
        seen.await.unwrap(),
        vec![(Duration::ZERO, true), (DEFAULT_LATENCY, false)]
    );
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_ends_loaded_and_empty() {
    let store = refresh_store(ScriptedFetch::failing());
    store.send(RefreshIntent::ButtonTapped).finish().await;

    let state = store.state();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert!(state.records.is_empty());
}

#[tokio::test(start_paused = true)]
async fn second_request_while_loading_starts_no_fetch() {
    let fetch = ScriptedFetch::new(Vec::new());
    let store = refresh_store(fetch.clone());

    let first = store.send(RefreshIntent::ButtonTapped);
    let second = store.send(RefreshIntent::PullToRefresh);
    assert!(!first.is_empty());
    assert!(second.is_empty());

    first.finish().await;
    assert_eq!(fetch.calls(), 1);
    assert_eq!(store.state().titles(), LOAD);
}

#[tokio::test(start_paused = true)]
async fn coalesced_send_while_waits_for_in_flight_load() {
    let store = refresh_store(demo_fetch());
    let start = Instant::now();

    drop(store.send(RefreshIntent::ButtonTapped));
    tokio::time::sleep(Duration::from_secs(1)).await;
    store
        .send_while(RefreshIntent::PullToRefresh, RefreshState::is_loading)
        .await;

    assert_eq!(start.elapsed(), DEFAULT_LATENCY);
    assert_eq!(store.state().titles(), LOAD);
}

#[tokio::test(start_paused = true)]
async fn dropped_task_handle_does_not_cancel_the_load() {
    let store = refresh_store(demo_fetch());
    drop(store.send(RefreshIntent::ButtonTapped));

    tokio::time::sleep(DEFAULT_LATENCY + Duration::from_millis(1)).await;
    assert!(!store.state().is_loading());
    assert_eq!(store.state().titles(), LOAD);
}

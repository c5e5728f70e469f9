use std::sync::Once;

use postboard_core::{update, Effect, LoadPhase, Msg, PostRecord, PostsState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn posts(count: u64) -> Vec<PostRecord> {
    (1..=count)
        .map(|id| PostRecord {
            id,
            title: format!("title {id}"),
            content: format!("content {id}"),
            owner_id: id % 10,
        })
        .collect()
}

/// Drives the state through mount and a successful fetch of `count` records.
fn loaded_state(count: u64) -> PostsState {
    let state = PostsState::new();
    let (state, effects) = update(state, Msg::PostsOpened);
    let generation = match effects[..] {
        [Effect::FetchPosts { generation }] => generation,
        _ => panic!("mount must emit exactly one fetch effect"),
    };
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            result: Ok(posts(count)),
        },
    );
    state
}

#[test]
fn mount_starts_loading_and_emits_fetch() {
    init_logging();
    let state = PostsState::new();
    assert_eq!(*state.load(), LoadPhase::Idle);

    let (state, effects) = update(state, Msg::PostsOpened);

    assert_eq!(*state.load(), LoadPhase::Loading);
    assert_eq!(state.current_page(), 1);
    assert_eq!(effects, vec![Effect::FetchPosts { generation: 1 }]);
}

#[test]
fn eight_records_paginate_into_two_pages() {
    init_logging();
    let state = loaded_state(8);
    assert_eq!(*state.load(), LoadPhase::Loaded);

    let view = state.view();
    assert_eq!(view.pagination.total_pages, 2);
    assert!(!view.pagination.prev_enabled);
    assert!(view.pagination.next_enabled);
    assert_eq!(
        view.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );

    let (state, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty(), "page change must not refetch");
    let view = state.view();
    assert_eq!(state.current_page(), 2);
    assert_eq!(
        view.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![7, 8]
    );
    assert!(view.pagination.prev_enabled);
    assert!(!view.pagination.next_enabled);

    // Next is disabled on the last page; the click is a true no-op.
    let (state, effects) = update(state, Msg::NextClicked);
    assert_eq!(state.current_page(), 2);
    assert!(effects.is_empty());
}

#[test]
fn prev_on_first_page_is_a_noop() {
    init_logging();
    let state = loaded_state(8);
    let (state, effects) = update(state, Msg::PrevClicked);
    assert_eq!(state.current_page(), 1);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_page_clicks_are_noops() {
    init_logging();
    let state = loaded_state(8);
    let (state, _) = update(state, Msg::PageClicked(0));
    assert_eq!(state.current_page(), 1);
    let (state, _) = update(state, Msg::PageClicked(99));
    assert_eq!(state.current_page(), 1);
    let (state, _) = update(state, Msg::PageClicked(2));
    assert_eq!(state.current_page(), 2);
}

#[test]
fn refresh_resets_current_page_to_first() {
    init_logging();
    let state = loaded_state(20);
    let (state, _) = update(state, Msg::PageClicked(3));
    assert_eq!(state.current_page(), 3);

    let (state, effects) = update(state, Msg::RefreshClicked);

    assert_eq!(state.current_page(), 1);
    assert_eq!(*state.load(), LoadPhase::Loading);
    assert_eq!(effects, vec![Effect::FetchPosts { generation: 2 }]);
}

#[test]
fn failure_keeps_stale_posts_under_the_banner() {
    init_logging();
    let state = loaded_state(8);
    let (state, _) = update(state, Msg::RefreshClicked);
    let generation = state.generation();
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            result: Err("network error".to_string()),
        },
    );

    assert_eq!(*state.load(), LoadPhase::Failed("network error".to_string()));
    // The previously loaded collection stays visible.
    assert_eq!(state.posts().len(), 8);
}

#[test]
fn retry_after_failure_refetches_and_loads() {
    init_logging();
    let state = PostsState::new();
    let (state, _) = update(state, Msg::PostsOpened);
    let generation = state.generation();
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            result: Err("connection refused".to_string()),
        },
    );
    match state.load() {
        LoadPhase::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected Failed, got {other:?}"),
    }

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(*state.load(), LoadPhase::Loading);
    let generation = match effects[..] {
        [Effect::FetchPosts { generation }] => generation,
        _ => panic!("retry must emit exactly one fetch effect"),
    };

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            result: Ok(posts(3)),
        },
    );
    assert_eq!(*state.load(), LoadPhase::Loaded);
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.posts().len(), 3);
}

#[test]
fn superseded_fetch_result_is_discarded() {
    init_logging();
    let state = PostsState::new();
    let (state, effects) = update(state, Msg::PostsOpened);
    let first_generation = match effects[..] {
        [Effect::FetchPosts { generation }] => generation,
        _ => panic!("mount must emit a fetch effect"),
    };

    // A refresh while the first fetch is still in flight supersedes it.
    let (state, effects) = update(state, Msg::RefreshClicked);
    let second_generation = match effects[..] {
        [Effect::FetchPosts { generation }] => generation,
        _ => panic!("refresh must emit a fetch effect"),
    };
    assert_ne!(first_generation, second_generation);

    // The superseded result resolves later and must not touch state.
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation: first_generation,
            result: Ok(posts(99)),
        },
    );
    assert_eq!(*state.load(), LoadPhase::Loading);
    assert!(state.posts().is_empty());

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation: second_generation,
            result: Ok(posts(4)),
        },
    );
    assert_eq!(*state.load(), LoadPhase::Loaded);
    assert_eq!(state.posts().len(), 4);
}

#[test]
fn shrinking_collection_clamps_current_page() {
    init_logging();
    let state = loaded_state(12);
    let (state, _) = update(state, Msg::PageClicked(2));
    assert_eq!(state.current_page(), 2);

    // A replacement arriving under the same generation shrinks the
    // collection below the current page's range.
    let generation = state.generation();
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            result: Ok(posts(4)),
        },
    );
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.view().pagination.total_pages, 1);
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let state = loaded_state(8);
    let before = state.clone();
    let (state, effects) = update(state, Msg::NoOp);
    assert_eq!(state, before);
    assert!(effects.is_empty());
}

use crate::{Effect, Msg, PostsState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Mount, manual refresh, and error retry share one code path: they all
/// restart the fetch from scratch and reset pagination to the first page.
pub fn update(mut state: PostsState, msg: Msg) -> (PostsState, Vec<Effect>) {
    let effects = match msg {
        Msg::PostsOpened | Msg::RefreshClicked | Msg::RetryClicked => {
            let generation = state.begin_fetch();
            vec![Effect::FetchPosts { generation }]
        }
        Msg::PageClicked(page) => {
            state.go_to_page(page);
            Vec::new()
        }
        Msg::PrevClicked => {
            // Disabled on page 1; the saturating step makes that click a no-op.
            let prev = state.current_page().saturating_sub(1);
            state.go_to_page(prev);
            Vec::new()
        }
        Msg::NextClicked => {
            let next = state.current_page() + 1;
            state.go_to_page(next);
            Vec::new()
        }
        Msg::FetchCompleted { generation, result } => {
            if generation == state.generation() {
                match result {
                    Ok(posts) => state.apply_fetched(posts),
                    Err(message) => state.apply_failed(message),
                }
            }
            // A stale generation means a newer fetch superseded this one;
            // its result is discarded without touching state.
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

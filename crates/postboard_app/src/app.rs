use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use board_logging::{board_info, board_warn};
use postboard_core::{
    sample_cards, update, users_view, LoadPhase, Msg, PostsState, UserRecord,
};
use postboard_engine::EngineConfig;

use crate::effects::{AppMsg, EffectRunner};
use crate::render;

/// How long the loop waits for a fetch completion before rendering anyway.
const FETCH_WAIT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    About,
    Posts,
    Users,
}

pub fn run() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    run_loop(&mut lines);
}

fn run_loop(lines: &mut impl Iterator<Item = io::Result<String>>) {
    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(msg_tx, EngineConfig::default());

    let mut state = PostsState::new();
    let mut users: Vec<UserRecord> = Vec::new();
    let mut users_fetched_at: Option<SystemTime> = None;
    let mut route = Route::Home;

    println!("{}", render::header());
    println!("{}", render::home(&sample_cards()));

    loop {
        drain_messages(&msg_rx, &mut state, &runner, &mut users, &mut users_fetched_at);

        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };

        match line.trim() {
            "q" => return,
            "home" => {
                route = Route::Home;
                println!("{}", render::home(&sample_cards()));
            }
            "about" => {
                route = Route::About;
                println!("{}", render::about());
            }
            "users" => {
                route = Route::Users;
                println!("{}", render::users(&users_view(&users), users_fetched_at));
            }
            "posts" => {
                route = Route::Posts;
                dispatch(&mut state, Msg::PostsOpened, &runner);
                await_fetch(&msg_rx, &mut state, &runner, &mut users, &mut users_fetched_at);
                println!("{}", render::posts(&state.view()));
            }
            "r" if route == Route::Posts => {
                // Refresh and retry are the same path; both restart the fetch.
                dispatch(&mut state, Msg::RefreshClicked, &runner);
                await_fetch(&msg_rx, &mut state, &runner, &mut users, &mut users_fetched_at);
                println!("{}", render::posts(&state.view()));
            }
            "n" if route == Route::Posts => {
                dispatch(&mut state, Msg::NextClicked, &runner);
                println!("{}", render::posts(&state.view()));
            }
            "p" if route == Route::Posts => {
                dispatch(&mut state, Msg::PrevClicked, &runner);
                println!("{}", render::posts(&state.view()));
            }
            other => {
                if route == Route::Posts {
                    if let Ok(page) = other.parse::<u32>() {
                        dispatch(&mut state, Msg::PageClicked(page), &runner);
                        println!("{}", render::posts(&state.view()));
                        continue;
                    }
                }
                println!("{}", render::header());
            }
        }
    }
}

fn dispatch(state: &mut PostsState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
}

/// Applies pending engine messages without blocking.
fn drain_messages(
    msg_rx: &mpsc::Receiver<AppMsg>,
    state: &mut PostsState,
    runner: &EffectRunner,
    users: &mut Vec<UserRecord>,
    users_fetched_at: &mut Option<SystemTime>,
) {
    while let Ok(msg) = msg_rx.try_recv() {
        apply(msg, state, runner, users, users_fetched_at);
    }
}

/// Blocks until the in-flight fetch resolves or the wait budget runs out.
fn await_fetch(
    msg_rx: &mpsc::Receiver<AppMsg>,
    state: &mut PostsState,
    runner: &EffectRunner,
    users: &mut Vec<UserRecord>,
    users_fetched_at: &mut Option<SystemTime>,
) {
    let deadline = std::time::Instant::now() + FETCH_WAIT;
    while *state.load() == LoadPhase::Loading {
        let Some(budget) = deadline.checked_duration_since(std::time::Instant::now()) else {
            board_warn!("fetch still in flight after {FETCH_WAIT:?}; rendering as loading");
            return;
        };
        match msg_rx.recv_timeout(budget) {
            Ok(msg) => apply(msg, state, runner, users, users_fetched_at),
            Err(_) => return,
        }
    }
}

fn apply(
    msg: AppMsg,
    state: &mut PostsState,
    runner: &EffectRunner,
    users: &mut Vec<UserRecord>,
    users_fetched_at: &mut Option<SystemTime>,
) {
    match msg {
        AppMsg::Core(msg) => dispatch(state, msg, runner),
        AppMsg::UsersRefreshed { fetched_at, result } => match result {
            Ok(refreshed) => {
                board_info!("users snapshot refreshed: {} records", refreshed.len());
                *users = refreshed;
                *users_fetched_at = Some(fetched_at);
            }
            Err(message) => {
                // Keep the previous snapshot; the next pass comes sooner.
                board_warn!("users revalidation failed: {message}");
            }
        },
    }
}

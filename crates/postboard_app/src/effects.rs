use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime};

use board_logging::{board_info, board_warn};
use postboard_core::{Effect, Msg, UserRecord};
use postboard_engine::{EngineCommands, EngineConfig, EngineEvent, EngineHandle};

/// Message stream into the app loop: core messages plus the background
/// users refresh, which lives outside the posts page state machine.
#[derive(Debug)]
pub enum AppMsg {
    Core(Msg),
    UsersRefreshed {
        fetched_at: SystemTime,
        result: Result<Vec<UserRecord>, String>,
    },
}

/// Executes effects against the engine and pumps engine events back into
/// the app loop as messages.
pub struct EffectRunner {
    commands: EngineCommands,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<AppMsg>, config: EngineConfig) -> Self {
        let engine = EngineHandle::new(config);
        let commands = engine.commands();
        spawn_event_loop(engine, msg_tx);
        Self { commands }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPosts { generation } => {
                    board_info!("FetchPosts generation={generation}");
                    self.commands.fetch_posts(generation);
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || loop {
        let Some(event) = engine.recv_timeout(Duration::from_millis(20)) else {
            continue;
        };
        let msg = match event {
            EngineEvent::PostsFetched { generation, result } => {
                if let Err(err) = &result {
                    board_warn!("posts fetch failed: {err}");
                }
                AppMsg::Core(Msg::FetchCompleted {
                    generation,
                    result: result.map_err(|err| err.to_string()),
                })
            }
            EngineEvent::UsersRefreshed { fetched_at, result } => AppMsg::UsersRefreshed {
                fetched_at,
                result: result.map_err(|err| err.to_string()),
            },
        };
        if msg_tx.send(msg).is_err() {
            return;
        }
    });
}

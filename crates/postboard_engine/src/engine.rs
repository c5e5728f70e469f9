use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::board_warn;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::revalidate::{revalidate_users, RevalidateSettings};
use crate::EngineEvent;

/// Engine configuration: live-fetch settings plus the optional background
/// users revalidation schedule.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub revalidate: Option<RevalidateSettings>,
}

enum EngineCommand {
    FetchPosts { generation: u64 },
}

/// Cloneable command side of the engine, for callers that only issue work.
#[derive(Clone)]
pub struct EngineCommands {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineCommands {
    pub fn fetch_posts(&self, generation: u64) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPosts { generation });
    }
}

/// Handle to the engine thread: a command channel in, an event channel out,
/// around a dedicated tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_warn!("engine runtime failed to start: {err}");
                    return;
                }
            };
            if let Some(settings) = config.revalidate {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    revalidate_users(fetcher, settings, event_tx).await;
                });
            }
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn commands(&self) -> EngineCommands {
        EngineCommands {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn fetch_posts(&self, generation: u64) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPosts { generation });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPosts { generation } => {
            let result = fetcher.fetch_posts().await;
            if let Err(err) = &result {
                board_warn!("posts fetch (generation {generation}) failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::PostsFetched { generation, result });
        }
    }
}

use std::sync::{mpsc, Arc};
use std::time::{Duration, SystemTime};

use board_logging::{board_info, board_warn};

use crate::fetch::Fetcher;
use crate::EngineEvent;

/// Schedule for the background users revalidation task. The users
/// collection is a background concern, never fetched on user interaction;
/// after a failed pass the next attempt comes sooner.
#[derive(Debug, Clone, Copy)]
pub struct RevalidateSettings {
    pub success_interval: Duration,
    pub failure_interval: Duration,
}

impl Default for RevalidateSettings {
    fn default() -> Self {
        Self {
            success_interval: Duration::from_secs(7200),
            failure_interval: Duration::from_secs(300),
        }
    }
}

/// Runs until the event receiver is dropped: fetch the users collection,
/// emit the outcome with its fetch timestamp, sleep the interval matching
/// the outcome, repeat.
pub async fn revalidate_users(
    fetcher: Arc<dyn Fetcher>,
    settings: RevalidateSettings,
    events: mpsc::Sender<EngineEvent>,
) {
    loop {
        let fetched_at = SystemTime::now();
        let result = fetcher.fetch_users().await;
        let interval = match &result {
            Ok(users) => {
                board_info!("users revalidated: {} records", users.len());
                settings.success_interval
            }
            Err(err) => {
                board_warn!("users revalidation failed: {err}");
                settings.failure_interval
            }
        };
        if events
            .send(EngineEvent::UsersRefreshed { fetched_at, result })
            .is_err()
        {
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

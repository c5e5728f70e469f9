//! Postboard engine: IO and effect execution for the placeholder API.
mod engine;
mod fetch;
mod revalidate;
mod types;
mod wire;

pub use engine::{EngineCommands, EngineConfig, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use revalidate::{revalidate_users, RevalidateSettings};
pub use types::{EngineEvent, FailureKind, FetchError};

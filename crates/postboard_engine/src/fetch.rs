use std::time::Duration;

use postboard_core::{PostRecord, UserRecord};
use serde::de::DeserializeOwned;

use crate::wire::{RawPost, RawUser};
use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Reads the full posts collection: single attempt, no retry, no backoff.
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, FetchError>;

    /// Reads the full users collection.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let url = reqwest::Url::parse(&format!("{base}/{path}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // A body may be present; a non-success status is a failure anyway.
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Failed to fetch {path}: {status}"),
            ));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| {
                if err.is_decode() {
                    FetchError::new(FailureKind::Decode, err.to_string())
                } else {
                    map_reqwest_error(err)
                }
            })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, FetchError> {
        let raw = self.get_collection::<RawPost>("posts").await?;
        Ok(raw.into_iter().map(PostRecord::from).collect())
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let raw = self.get_collection::<RawUser>("users").await?;
        Ok(raw.into_iter().map(UserRecord::from).collect())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

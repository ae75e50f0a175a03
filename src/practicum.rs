use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::{BotError, ConnectivityCause};

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer "which homework statuses changed since `from_date`".
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError>;
}

pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_endpoint(token, ENDPOINT)
    }

    pub fn with_endpoint(token: &str, endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError> {
        debug!("Requesting homework statuses from {} since {}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ConnectivityCause::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConnectivityCause::Status(status).into());
        }

        let body = response.text().await.map_err(ConnectivityCause::from)?;
        let parsed: Value = serde_json::from_str(&body).map_err(ConnectivityCause::from)?;
        Ok(parsed)
    }
}

//! Aladhan REST API Client
//!
//! HTTP client for the `timingsByCity` endpoint.

use super::{order_timings, DailyTimings, FetchError, TimingsSource};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for the Aladhan client
#[derive(Debug, Clone, Deserialize)]
pub struct AladhanConfig {
    /// Base URL including the API version (e.g., "https://api.aladhan.com/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Calculation method identifier
    #[serde(default = "default_method")]
    pub method: u8,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.aladhan.com/v1".to_string()
}

fn default_method() -> u8 {
    5 // Egyptian General Authority of Survey
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    format!("Mawaqit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AladhanConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            method: default_method(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Aladhan API client
pub struct AladhanClient {
    client: Client,
    config: AladhanConfig,
}

impl AladhanClient {
    /// Create a new client with the given configuration
    pub fn new(config: AladhanConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/timingsByCity", self.config.base_url.trim_end_matches('/'))
    }

    async fn request(&self, city: &str, country: &str) -> Result<DailyTimings, FetchError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("city", city), ("country", country)])
            .query(&[("method", self.config.method)])
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: TimingsEnvelope = response.json().await.map_err(FetchError::from_reqwest)?;

        if envelope.code != 200 {
            return Err(FetchError::Api {
                code: envelope.code,
                status: envelope.status.unwrap_or_default(),
            });
        }

        let data: TimingsData = serde_json::from_value(envelope.data)?;

        Ok(DailyTimings::new(city, country, order_timings(&data.timings))
            .date(data.date.and_then(|d| d.readable))
            .timezone(data.meta.and_then(|m| m.timezone)))
    }
}

#[async_trait]
impl TimingsSource for AladhanClient {
    async fn fetch_timings(&self, city: &str, country: &str) -> Result<DailyTimings, FetchError> {
        tracing::debug!(city, country, method = self.config.method, "Requesting prayer times");

        match self.request(city, country).await {
            Ok(timings) => {
                tracing::info!(
                    city,
                    country,
                    prayers = timings.times.len(),
                    "Fetched prayer times"
                );
                Ok(timings)
            }
            Err(e) => {
                tracing::warn!(city, country, error = %e, "Failed to fetch prayer times");
                Err(e)
            }
        }
    }
}

// ============================================
// Response DTOs
// ============================================

/// `data` stays untyped until `code` is checked; failures carry a string there
#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    code: i64,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: HashMap<String, String>,
    #[serde(default)]
    date: Option<DateInfo>,
    #[serde(default)]
    meta: Option<MetaInfo>,
}

#[derive(Debug, Deserialize)]
struct DateInfo {
    readable: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetaInfo {
    timezone: Option<String>,
}

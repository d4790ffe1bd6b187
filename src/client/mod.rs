//! Prayer-Times Client
//!
//! Fetches the day's timings for a city from the Aladhan REST API.
//!
//! ## Architecture
//!
//! - **TimingsSource**: the seam the session drives, so the HTTP client can
//!   be swapped for a fake
//! - **AladhanClient**: `reqwest` implementation against `timingsByCity`
//! - **FetchError**: failure taxonomy with fixed user-facing messages
//!
//! One call is one GET. There is no retry; the caller resubmits.

mod aladhan;
mod error;
mod types;

pub use aladhan::{AladhanClient, AladhanConfig};
pub use error::{
    FetchError, API_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE, NOT_FOUND_MESSAGE, TIMEOUT_MESSAGE,
};
pub use types::{order_timings, DailyTimings, PrayerTime};

use async_trait::async_trait;

/// Anything that can produce a day's timings for a city
#[async_trait]
pub trait TimingsSource: Send + Sync {
    /// Fetch today's timings for `city` in `country`
    async fn fetch_timings(&self, city: &str, country: &str) -> Result<DailyTimings, FetchError>;
}

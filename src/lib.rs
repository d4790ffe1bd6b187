//! # Mawaqit
//!
//! Today's prayer times for a chosen country and city, fetched from the
//! [Aladhan API](https://aladhan.com/).
//!
//! ## Modules
//!
//! - [`catalog`]: Static country/city and prayer-name tables
//! - [`timefmt`]: 24-hour to 12-hour time conversion
//! - [`client`]: Aladhan HTTP client and fetch errors
//! - [`session`]: Selection and fetch state machine
//! - [`view`]: Text rendering of the form
//! - [`shell`]: Interactive line-based front end
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mawaqit::{AladhanClient, AladhanConfig, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AladhanClient::new(AladhanConfig::default())?;
//!
//!     let mut session = Session::new();
//!     session.select_country("Egypt")?;
//!     session.select_city("Cairo")?;
//!     session.submit(&client).await;
//!
//!     if let Some(timings) = session.fetch_state().timings() {
//!         for time in &timings.times {
//!             println!("{} {}", time.arabic_name(), time.display_time());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod logging;
pub mod session;
pub mod shell;
pub mod timefmt;
pub mod view;

// Re-export top-level types for convenience
pub use catalog::{countries, find_country, CountryEntry, Prayer, PRAYER_ORDER};

pub use client::{
    AladhanClient, AladhanConfig, DailyTimings, FetchError, PrayerTime, TimingsSource,
};

pub use session::{FetchState, FetchTicket, SelectionError, SelectionState, Session};

pub use config::{Config, ConfigError, LoggingConfig};

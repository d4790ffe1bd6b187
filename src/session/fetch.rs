//! Fetch lifecycle state

use crate::client::{DailyTimings, FetchError};

/// Result of the most recent fetch.
///
/// Timings and error are mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(DailyTimings),
    Error(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn timings(&self) -> Option<&DailyTimings> {
        match self {
            FetchState::Success(timings) => Some(timings),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// User-facing message for the error panel
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(FetchError::user_message)
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub(super) generation: u64,
    pub(super) country: &'static str,
    pub(super) city: &'static str,
}

impl FetchTicket {
    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn city(&self) -> &'static str {
        self.city
    }
}

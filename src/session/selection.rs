//! Country/city selection

use crate::catalog::CountryEntry;
use thiserror::Error;

/// Selected country and city.
///
/// A city is only ever set together with the country it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    country: Option<&'static CountryEntry>,
    city: Option<&'static str>,
}

impl SelectionState {
    pub fn country(&self) -> Option<&'static CountryEntry> {
        self.country
    }

    pub fn city(&self) -> Option<&'static str> {
        self.city
    }

    /// Both country and city chosen
    pub fn is_complete(&self) -> bool {
        self.country.is_some() && self.city.is_some()
    }

    pub(super) fn set_country(&mut self, entry: &'static CountryEntry) {
        self.country = Some(entry);
        self.city = None;
    }

    pub(super) fn set_city(&mut self, city: &'static str) {
        debug_assert!(self.country.is_some_and(|c| c.has_city(city)));
        self.city = Some(city);
    }
}

/// Rejected selection changes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("{city} is not a listed city of {country}")]
    UnknownCity { city: String, country: &'static str },

    #[error("Select a country first")]
    NoCountry,
}

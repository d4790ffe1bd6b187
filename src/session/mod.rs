//! Selection and fetch state
//!
//! The form's state machine:
//!
//! ```text
//! NoCountry → CountrySelected → CountryAndCitySelected → Loading → Success | Error
//!                   ↑                     ↑                              │
//!                   └──── any selection change clears the result ───────┘
//! ```
//!
//! - **selection**: selected country and city; changing the country clears the city
//! - **fetch**: tri-state fetch result (idle, loading, success, error)
//!
//! A fetch is split into [`Session::begin_fetch`] and [`Session::complete`] so
//! the loading state is observable between them. Each begin hands out a
//! [`FetchTicket`]; any selection change invalidates outstanding tickets, and a
//! stale completion is dropped instead of overwriting newer state.

mod fetch;
mod selection;

pub use fetch::{FetchState, FetchTicket};
pub use selection::{SelectionError, SelectionState};

use crate::catalog::{countries, find_country, CountryEntry};
use crate::client::{DailyTimings, FetchError, TimingsSource};

/// Form state owned by the view
#[derive(Debug, Default)]
pub struct Session {
    selection: SelectionState,
    fetch: FetchState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Countries the selector offers
    pub fn available_countries(&self) -> Vec<&'static CountryEntry> {
        countries().collect()
    }

    /// Cities for the selected country, empty when none is selected
    pub fn available_cities(&self) -> &'static [&'static str] {
        self.selection.country().map(|c| c.cities).unwrap_or(&[])
    }

    /// Select a country by name. Clears the city and any fetched result.
    pub fn select_country(&mut self, name: &str) -> Result<&'static CountryEntry, SelectionError> {
        let entry =
            find_country(name).ok_or_else(|| SelectionError::UnknownCountry(name.trim().to_string()))?;

        self.selection.set_country(entry);
        self.reset_result();
        tracing::debug!(country = entry.name, "Country selected");
        Ok(entry)
    }

    /// Select a city of the current country. Clears any fetched result.
    pub fn select_city(&mut self, name: &str) -> Result<&'static str, SelectionError> {
        let country = self.selection.country().ok_or(SelectionError::NoCountry)?;
        let city = country
            .find_city(name)
            .ok_or_else(|| SelectionError::UnknownCity {
                city: name.trim().to_string(),
                country: country.name,
            })?;

        self.selection.set_city(city);
        self.reset_result();
        tracing::debug!(country = country.name, city, "City selected");
        Ok(city)
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Submit is enabled only with both selections and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && !self.is_loading()
    }

    /// Enter `Loading` and hand out a ticket for the request.
    ///
    /// Returns `None` (state untouched) when submit is disabled.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.can_submit() {
            return None;
        }
        let (country, city) = match (self.selection.country(), self.selection.city()) {
            (Some(country), Some(city)) => (country.name, city),
            _ => return None,
        };

        self.generation += 1;
        self.fetch = FetchState::Loading;
        tracing::debug!(country, city, generation = self.generation, "Fetch started");

        Some(FetchTicket {
            generation: self.generation,
            country,
            city,
        })
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns `false` if the ticket is stale and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<DailyTimings, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.fetch = match result {
            Ok(timings) => FetchState::Success(timings),
            Err(e) => FetchState::Error(e),
        };
        true
    }

    /// Drop an in-flight request (e.g. on interrupt). Loading is cleared and
    /// any late completion for `ticket` is ignored.
    pub fn abandon(&mut self, ticket: FetchTicket) {
        if ticket.generation == self.generation && self.is_loading() {
            tracing::debug!(generation = ticket.generation, "Fetch abandoned");
            self.reset_result();
        }
    }

    /// Run a whole fetch against `source`: begin, await, complete.
    ///
    /// Returns `false` without calling `source` when submit is disabled.
    pub async fn submit(&mut self, source: &dyn TimingsSource) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let result = source.fetch_timings(ticket.city(), ticket.country()).await;
        self.complete(ticket, result)
    }

    fn reset_result(&mut self) {
        self.generation += 1;
        self.fetch = FetchState::Idle;
    }
}

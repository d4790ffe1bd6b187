//! Static Reference Data
//!
//! Fixed lookup tables compiled into the binary:
//!
//! - **prayers**: the six tracked prayers, their canonical order and Arabic labels
//! - **countries**: selectable countries and the cities offered for each
//!
//! Nothing here is mutable or loaded at runtime.

mod countries;
mod prayers;

pub use countries::{countries, find_country, CountryEntry, COUNTRIES};
pub use prayers::{Prayer, PRAYER_ORDER};

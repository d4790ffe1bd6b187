//! Prayer identifiers and display labels

use serde::Serialize;
use std::fmt;

/// One of the six daily observances tracked by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// Canonical display order
pub const PRAYER_ORDER: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// Key used by the Aladhan timings map
    pub fn key(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Arabic display label
    pub fn arabic_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }

    /// Parse an Aladhan timings key. Keys outside the tracked six return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        PRAYER_ORDER.iter().copied().find(|p| p.key() == key)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_chronological() {
        let keys: Vec<_> = PRAYER_ORDER.iter().map(|p| p.key()).collect();
        assert_eq!(keys, ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Prayer::from_key("Maghrib"), Some(Prayer::Maghrib));
        assert_eq!(Prayer::from_key("Midnight"), None);
        assert_eq!(Prayer::from_key("fajr"), None);
    }

    #[test]
    fn test_arabic_labels() {
        assert_eq!(Prayer::Fajr.arabic_name(), "الفجر");
        assert_eq!(Prayer::Isha.arabic_name(), "العشاء");
    }
}

//! Timings payload types

use crate::catalog::{Prayer, PRAYER_ORDER};
use crate::timefmt::to_12_hour;
use serde::Serialize;
use std::collections::HashMap;

/// One prayer and its raw API time (e.g. `"04:30 (EET)"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerTime {
    pub prayer: Prayer,
    pub time: String,
}

impl PrayerTime {
    /// Arabic label for the view
    pub fn arabic_name(&self) -> &'static str {
        self.prayer.arabic_name()
    }

    /// 12-hour display form
    pub fn display_time(&self) -> String {
        to_12_hour(&self.time)
    }
}

/// A day's timings for one location, in canonical prayer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTimings {
    pub city: String,
    pub country: String,
    pub times: Vec<PrayerTime>,
    /// Readable Gregorian date reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// IANA zone reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl DailyTimings {
    pub fn new(city: impl Into<String>, country: impl Into<String>, times: Vec<PrayerTime>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            times,
            date: None,
            timezone: None,
        }
    }

    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone;
        self
    }
}

/// Filter a raw timings map down to the tracked prayers, in canonical order.
/// Missing prayers are skipped; extra keys are ignored.
pub fn order_timings(raw: &HashMap<String, String>) -> Vec<PrayerTime> {
    PRAYER_ORDER
        .iter()
        .filter_map(|prayer| {
            raw.get(prayer.key())
                .filter(|time| !time.is_empty())
                .map(|time| PrayerTime {
                    prayer: *prayer,
                    time: time.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_order_timings_reorders_and_filters() {
        let map = raw(&[
            ("Isha", "19:45 (EET)"),
            ("Midnight", "23:40 (EET)"),
            ("Fajr", "04:30 (EET)"),
            ("Imsak", "04:20 (EET)"),
            ("Dhuhr", "12:15 (EET)"),
        ]);

        let ordered = order_timings(&map);
        let prayers: Vec<_> = ordered.iter().map(|t| t.prayer).collect();
        assert_eq!(prayers, vec![Prayer::Fajr, Prayer::Dhuhr, Prayer::Isha]);
        assert_eq!(ordered[0].time, "04:30 (EET)");
    }

    #[test]
    fn test_order_timings_empty() {
        assert!(order_timings(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_prayer_time_display() {
        let time = PrayerTime {
            prayer: Prayer::Dhuhr,
            time: "12:15 (EET)".into(),
        };
        assert_eq!(time.display_time(), "12:15 PM");
        assert_eq!(time.arabic_name(), "الظهر");
    }

    #[test]
    fn test_daily_timings_lookup() {
        let timings = DailyTimings::new(
            "Cairo",
            "Egypt",
            order_timings(&raw(&[("Asr", "15:40"), ("Fajr", "04:30")])),
        )
        .date(Some("16 Oct 2026".into()));

        let prayers: Vec<_> = timings.times.iter().map(|t| t.prayer).collect();
        assert_eq!(prayers, vec![Prayer::Fajr, Prayer::Asr]);
        assert_eq!(timings.times[1].display_time(), "3:40 PM");
        assert_eq!(timings.date.as_deref(), Some("16 Oct 2026"));
        assert!(timings.timezone.is_none());
    }
}

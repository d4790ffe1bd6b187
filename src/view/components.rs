//! Form panels

use crate::client::DailyTimings;
use crate::session::{SelectionState, Session};
use std::fmt::Write;

/// Numbered country list, marking the current choice
pub fn country_selector(session: &Session) -> String {
    let selected = session.selection().country().map(|c| c.name);
    let mut out = String::from("─ Select Country ─\n");

    for (i, country) in session.available_countries().iter().enumerate() {
        let marker = if Some(country.name) == selected { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {} ({})", marker, i + 1, country.name, country.code);
    }
    out
}

/// Numbered city list for the selected country
pub fn city_selector(session: &Session) -> String {
    let selected = session.selection().city();
    let mut out = String::from("─ Select City ─\n");

    for (i, city) in session.available_cities().iter().enumerate() {
        let marker = if Some(*city) == selected { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {}", marker, i + 1, city);
    }
    out
}

/// Location confirmation, shown once a country is chosen
pub fn location_panel(selection: &SelectionState) -> Option<String> {
    let country = selection.country()?;
    let location = match selection.city() {
        Some(city) => format!("{}, {}", city, country.name),
        None => country.name.to_string(),
    };

    Some(format!(
        "─ Selected Location ─\n✓ {}\n  flag: {}\n",
        location,
        country.flag_url()
    ))
}

pub fn error_panel(message: &str) -> String {
    format!("─ Error ─\n! {}\n", message)
}

/// Prayer times in canonical order with Arabic labels and 12-hour times
pub fn timings_panel(timings: &DailyTimings) -> String {
    let mut out = format!(
        "─ مواقيت الصلاة - {}, {} ─\n",
        timings.city, timings.country
    );

    match (&timings.date, &timings.timezone) {
        (Some(date), Some(tz)) => {
            let _ = writeln!(out, "  {} ({})", date, tz);
        }
        (Some(date), None) => {
            let _ = writeln!(out, "  {}", date);
        }
        (None, Some(tz)) => {
            let _ = writeln!(out, "  ({})", tz);
        }
        (None, None) => {}
    }

    if timings.times.is_empty() {
        out.push_str("  No timings available\n");
    }

    for time in &timings.times {
        let _ = writeln!(
            out,
            "  {:<8} {:<8} {:>8}",
            time.arabic_name(),
            time.prayer.key(),
            time.display_time()
        );
    }
    out
}

/// Submit button label and enabled state
pub fn submit_control(session: &Session) -> String {
    let label = if session.is_loading() {
        "Loading Prayer Times...".to_string()
    } else {
        match session.selection().city() {
            Some(city) => format!("Get Prayer Times for {}", city),
            None => "Select Country & City".to_string(),
        }
    };

    if session.can_submit() {
        format!("[ {} ]\n", label)
    } else {
        format!("[ {} ] (disabled)\n", label)
    }
}

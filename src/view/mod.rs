//! Terminal View
//!
//! Renders the prayer-times form as plain text. Each panel is its own
//! function in [`components`] so the CLI can print just the parts it needs:
//!
//! ```text
//! Today's Prayer Times
//! ─ Select Country ─
//! ─ Select City ─           (only once a country is chosen)
//! ─ Selected Location ─     (only once a country is chosen)
//! ─ Error ─                 (only on a failed fetch)
//! ─ مواقيت الصلاة ─          (only on a successful fetch)
//! [ submit control ]
//! ```

pub mod components;

use crate::session::Session;

pub const TITLE: &str = "Today's Prayer Times";

/// Render the whole form for the current session state
pub fn render(session: &Session) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");

    out.push_str(&components::country_selector(session));

    if session.selection().country().is_some() && !session.available_cities().is_empty() {
        out.push('\n');
        out.push_str(&components::city_selector(session));
    }

    if let Some(panel) = components::location_panel(session.selection()) {
        out.push('\n');
        out.push_str(&panel);
    }

    if let Some(message) = session.fetch_state().error_message() {
        out.push('\n');
        out.push_str(&components::error_panel(message));
    }

    if let Some(timings) = session.fetch_state().timings() {
        out.push('\n');
        out.push_str(&components::timings_panel(timings));
    }

    out.push('\n');
    out.push_str(&components::submit_control(session));
    out
}

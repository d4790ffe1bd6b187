//! 24-hour to 12-hour time conversion
//!
//! The Aladhan API reports times as `"HH:MM (TZ)"`. Only the leading
//! `HH:MM` token is meaningful for display; the annotation is dropped.

/// Convert `"HH:MM[ anything]"` into `"H:MM AM"` / `"H:MM PM"`.
///
/// Minutes are copied verbatim. Empty input yields an empty string, and a
/// leading token that does not look like `H:MM` is returned as-is.
///
/// ```
/// use mawaqit::timefmt::to_12_hour;
///
/// assert_eq!(to_12_hour("04:30 (EET)"), "4:30 AM");
/// assert_eq!(to_12_hour("00:05"), "12:05 AM");
/// assert_eq!(to_12_hour("13:30"), "1:30 PM");
/// ```
pub fn to_12_hour(time24: &str) -> String {
    let token = match time24.split_whitespace().next() {
        Some(t) => t,
        None => return String::new(),
    };

    let Some((hours, minutes)) = token.split_once(':') else {
        return token.to_string();
    };
    let Ok(hour) = hours.parse::<u32>() else {
        return token.to_string();
    };

    match hour {
        0 => format!("12:{} AM", minutes),
        1..=11 => format!("{}:{} AM", hour, minutes),
        12 => format!("12:{} PM", minutes),
        _ => format!("{}:{} PM", hour - 12, minutes),
    }
}

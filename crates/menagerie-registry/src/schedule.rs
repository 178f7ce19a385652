//! Rendering of the weekly visiting schedule.
//!
//! Turns the posted [`OpeningHours`] into the visitor-facing strings shown
//! at the gate and on the website.

use menagerie_types::OpeningHours;

/// Render one day's hours as visitor-facing text.
///
/// Closed days (either hour posted as `0`) render as `"CLOSED"`. Open days
/// render as `"Open from {open}am until {close}pm"`, with the closing hour
/// shown on a 12-hour clock: `18` becomes `6pm`, while `12` and `24` both
/// become `12pm`.
pub fn format_hours(hours: OpeningHours) -> String {
    if hours.is_closed() {
        return "CLOSED".to_string();
    }
    let close = match hours.close.checked_rem(12) {
        Some(0) | None => 12,
        Some(rem) => rem,
    };
    format!("Open from {}am until {close}pm", hours.open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_day_renders_twelve_hour_close() {
        assert_eq!(
            format_hours(OpeningHours::new(9, 17)),
            "Open from 9am until 5pm"
        );
        assert_eq!(
            format_hours(OpeningHours::new(8, 22)),
            "Open from 8am until 10pm"
        );
    }

    #[test]
    fn noon_close_renders_as_twelve() {
        assert_eq!(
            format_hours(OpeningHours::new(10, 12)),
            "Open from 10am until 12pm"
        );
        // A close of 24 also lands on the 12pm spoke of the clock.
        assert_eq!(
            format_hours(OpeningHours::new(10, 24)),
            "Open from 10am until 12pm"
        );
    }

    #[test]
    fn zero_hour_means_closed() {
        assert_eq!(format_hours(OpeningHours::new(0, 0)), "CLOSED");
        assert_eq!(format_hours(OpeningHours::new(0, 18)), "CLOSED");
        assert_eq!(format_hours(OpeningHours::new(8, 0)), "CLOSED");
    }
}

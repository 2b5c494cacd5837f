/// Utilities for date and time formatting
///
/// Dates are shown in the Spanish DD/MM/YYYY order.
use chrono::{Datelike, NaiveDate, Timelike};

/// Example: 2024-12-15 -> "15/12/2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Greeting for the given local hour (0..=23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Buenos días",
        12..=17 => "Buenas tardes",
        _ => "Buenas noches",
    }
}

/// Greeting for the browser's current local time.
pub fn greeting_now() -> &'static str {
    greeting(chrono::Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(format_date(date), "15/12/2024");
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "05/01/2025");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Buenos días");
        assert_eq!(greeting(11), "Buenos días");
        assert_eq!(greeting(12), "Buenas tardes");
        assert_eq!(greeting(17), "Buenas tardes");
        assert_eq!(greeting(18), "Buenas noches");
        assert_eq!(greeting(23), "Buenas noches");
    }
}

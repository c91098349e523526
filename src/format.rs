//! Display formatting for nutrition figures, dates and times.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Calorie-like quantities are shown as whole numbers.
pub fn format_energy(value: f64) -> String {
    format!("{:.0}", value)
}

/// Gram quantities are shown with one decimal place.
pub fn format_grams(value: f64) -> String {
    format!("{:.1}", value)
}

/// "breakfast" -> "Breakfast".
pub fn meal_type_label(meal_type: &str) -> String {
    let mut chars = meal_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Meal".to_string(),
    }
}

/// Local time of day for a logged meal, e.g. "12:15 PM".
///
/// Timestamps with an offset are converted to the browser's zone. Naive ones
/// are already local wall-clock time. Unparseable input is returned as-is.
pub fn format_time_of_day(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%-I:%M %p").to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format("%-I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Heading for the selected history date, e.g. "Wednesday, May 1, 2024".
pub fn format_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_rounds_to_whole_number() {
        assert_eq!(format_energy(237.6), "238");
        assert_eq!(format_energy(0.0), "0");
        assert_eq!(format_energy(1999.2), "1999");
    }

    #[test]
    fn test_grams_keep_one_decimal() {
        assert_eq!(format_grams(12.34), "12.3");
        assert_eq!(format_grams(7.0), "7.0");
        assert_eq!(format_grams(0.06), "0.1");
    }

    #[test]
    fn test_meal_type_label() {
        assert_eq!(meal_type_label("breakfast"), "Breakfast");
        assert_eq!(meal_type_label("Snack"), "Snack");
        assert_eq!(meal_type_label(""), "Meal");
    }

    #[test]
    fn test_time_of_day_from_naive_timestamp() {
        assert_eq!(format_time_of_day("2024-05-01T12:15:00.123456"), "12:15 PM");
        assert_eq!(format_time_of_day("2024-05-01T08:05:09"), "8:05 AM");
        assert_eq!(format_time_of_day("2024-05-01T23:59:59"), "11:59 PM");
    }

    #[test]
    fn test_time_of_day_with_offset_parses() {
        let shown = format_time_of_day("2024-05-01T12:15:00+00:00");
        assert!(shown.ends_with("AM") || shown.ends_with("PM"), "got {shown}");
    }

    #[test]
    fn test_time_of_day_passthrough_on_garbage() {
        assert_eq!(format_time_of_day("yesterday"), "yesterday");
        assert_eq!(format_time_of_day(""), "");
    }

    #[test]
    fn test_date_label() {
        assert_eq!(format_date_label("2024-05-01"), "Wednesday, May 1, 2024");
        assert_eq!(format_date_label("not-a-date"), "not-a-date");
    }
}

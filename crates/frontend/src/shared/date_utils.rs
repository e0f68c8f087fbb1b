/// Utilities for date formatting
///
/// Every list renders calendar dates in UTC, so a record stored as
/// "2025-09-01T00:00:00Z" shows as 01/09/2025 whatever the browser's zone.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc, Weekday};

/// Parse an API timestamp or date into its UTC calendar date
fn parse_utc_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}

/// Format an API date to DD/MM/YYYY (UTC)
/// Example: "2024-03-15T23:30:00-03:00" -> "16/03/2024"
pub fn format_date(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    match parse_utc_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Value for an `<input type="date">`: the date part of a timestamp
/// Example: "2025-09-01T00:00:00.000Z" -> "2025-09-01"
pub fn date_input_value(value: &str) -> String {
    value.chars().take(10).collect()
}

fn weekday_es(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_es(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}

/// Long Spanish date, e.g. "viernes, 16 de octubre de 2026"
pub fn format_long_date_es(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_es(date.weekday()),
        date.day(),
        month_es(date.month()),
        date.year()
    )
}

/// Today's date in the browser's local zone, in long Spanish form
pub fn today_long_es() -> String {
    format_long_date_es(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-09-01"), "01/09/2025");
        assert_eq!(format_date("2025-09-01T00:00:00.000Z"), "01/09/2025");
        assert_eq!(format_date("2025-09-01T10:20:30"), "01/09/2025");
    }

    #[test]
    fn test_format_date_uses_utc() {
        assert_eq!(format_date("2024-03-15T23:30:00-03:00"), "16/03/2024");
    }

    #[test]
    fn test_invalid_and_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2025-09-01T00:00:00.000Z"), "2025-09-01");
        assert_eq!(date_input_value("2025-09-01"), "2025-09-01");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn test_long_date_es() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_long_date_es(date), "viernes, 16 de octubre de 2026");
    }
}

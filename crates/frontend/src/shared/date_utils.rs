/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    // API иногда присылает время без зоны
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Сегодняшняя дата в часовом поясе браузера
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31T23:59:59.5"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}

/// Utilities for date and time formatting
///
/// The server emits two timestamp flavours: SQLite's `CURRENT_TIMESTAMP`
/// ("2024-03-15 14:02:26") and ISO-8601 from explicit updates
/// ("2024-03-15T14:02:26.123456"). Both are normalized here.
use chrono::NaiveDateTime;

/// Format a server timestamp as DD.MM.YYYY HH:MM.
/// Unparseable input is passed through unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_format() {
        assert_eq!(format_timestamp("2024-03-15 14:02:26"), "15.03.2024 14:02");
    }

    #[test]
    fn test_iso_format() {
        assert_eq!(
            format_timestamp("2024-03-15T14:02:26.123456"),
            "15.03.2024 14:02"
        );
        assert_eq!(format_timestamp("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_invalid_passes_through() {
        assert_eq!(format_timestamp("invalid"), "invalid");
    }
}

/// Utilities for date formatting in forms
///
/// Record payloads carry dates as ISO strings; `<input type="date">`
/// wants bare YYYY-MM-DD values.

/// Trim an ISO datetime string down to the date part for date inputs.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn format_date_for_input(date_str: &str) -> String {
    date_str
        .split('T')
        .next()
        .unwrap_or(date_str)
        .split(' ')
        .next()
        .unwrap_or(date_str)
        .to_string()
}

/// Format ISO date string to YYYY/MM/DD for read-only display.
/// Example: "2024-03-15T14:02:26Z" -> "2024/03/15"
pub fn format_date_for_display(date_str: &str) -> String {
    let date_part = format_date_for_input(date_str);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", year, month, day),
        _ => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_for_input() {
        assert_eq!(format_date_for_input("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(format_date_for_input("2024-03-15 14:02:26"), "2024-03-15");
        assert_eq!(format_date_for_input("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-03-15T14:02:26Z"), "2024/03/15");
        assert_eq!(format_date_for_display("2024-12-31"), "2024/12/31");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_for_input("invalid"), "invalid");
        assert_eq!(format_date_for_display("invalid"), "invalid");
    }
}

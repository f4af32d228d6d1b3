//! Text and JSON rendering helpers shared by the command handlers.

use serde::Serialize;

use crate::Result;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Field value or an "Unknown <Field>" placeholder.
pub fn or_unknown(value: Option<&str>, field: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => format!("Unknown {}", field),
    }
}

/// One-decimal rendering of an optional average; `n/a` when undefined.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    }
}

/// Whole-number rendering of a count that is stored as a float.
pub fn format_count(value: f64) -> String {
    format!("{:.0}", value)
}

/// Pad or truncate `s` to exactly `width` characters.
pub fn cell(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if width == 0 {
        String::new()
    } else if count > width {
        let mut truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(Some("Arsenal"), "Team"), "Arsenal");
        assert_eq!(or_unknown(None, "Team"), "Unknown Team");
        assert_eq!(or_unknown(Some(""), "Nation"), "Unknown Nation");
    }

    #[test]
    fn test_format_average() {
        assert_eq!(format_average(Some(2.0)), "2.0");
        assert_eq!(format_average(Some(14.5)), "14.5");
        assert_eq!(format_average(None), "n/a");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(29.0), "29");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_cell_pads_and_truncates() {
        assert_eq!(cell("Rice", 6), "Rice  ");
        assert_eq!(cell("Ødegaard", 8), "Ødegaard");
        assert_eq!(cell("Alexander-Arnold", 8), "Alexand…");
        assert_eq!(cell("abc", 0), "");
    }
}

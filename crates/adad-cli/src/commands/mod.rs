pub mod abjad;
pub mod chart;
pub mod compat;
pub mod matrix;
pub mod meaning;
pub mod reduce;

use chrono::NaiveDate;

/// Parse a real calendar date given as `YYYY-MM-DD`.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date {s:?}: {e}"))
}

/// Mark master numbers in human output.
fn describe_value(value: u32) -> String {
    if adad_core::reduce::is_master_number(value) {
        format!("{value} (master)")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso() {
        let d = parse_date("2024-03-10").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn master_values_are_marked() {
        assert_eq!(describe_value(22), "22 (master)");
        assert_eq!(describe_value(7), "7");
    }
}

//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{Datelike, Local, NaiveDate};

use crate::utils::errors::{AcademyError, Result};

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar months from `start` to `today`, counting both ends.
///
/// A record created this month has been active for one month. Dates in the
/// future count as zero months.
pub fn months_between(start: NaiveDate, today: NaiveDate) -> i64 {
    let months = (today.year() as i64 - start.year() as i64) * 12
        + (today.month() as i64 - start.month() as i64)
        + 1;
    months.max(0)
}

/// Parse a monetary amount submitted through a form
pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AcademyError::InvalidInput(format!("{} is required", field)));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AcademyError::InvalidInput(format!("{} must be a number", field)))?;

    if !value.is_finite() {
        return Err(AcademyError::InvalidInput(format!("{} must be a finite number", field)));
    }
    if value < 0.0 {
        return Err(AcademyError::InvalidInput(format!("{} cannot be negative", field)));
    }

    Ok(value)
}

/// Trim a required text field, rejecting blanks
pub fn require_text(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(AcademyError::InvalidInput(format!("{} is required", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Format an amount with its currency label, e.g. `Rs. 1500.00`
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}

/// Sanitize filename for safe storage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Download name for a generated receipt, e.g. `receipt_Ali_Khan.pdf`
pub fn receipt_filename(prefix: &str, owner_name: &str) -> String {
    format!("{}_{}.pdf", prefix, sanitize_filename(owner_name.trim()))
}

/// `Content-Disposition` value carrying both an ASCII fallback and the UTF-8 name
pub fn attachment_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2024, 3, 31), date(2024, 3, 1)), 1);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 3, 1)), 3);
        assert_eq!(months_between(date(2023, 11, 1), date(2024, 2, 28)), 4);
        assert_eq!(months_between(date(2024, 5, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("Amount", " 1500.50 ").unwrap(), 1500.5);
        assert_eq!(parse_amount("Amount", "0").unwrap(), 0.0);
        assert!(parse_amount("Amount", "").is_err());
        assert!(parse_amount("Amount", "abc").is_err());
        assert!(parse_amount("Amount", "-5").is_err());
        assert!(parse_amount("Amount", "inf").is_err());
        assert!(parse_amount("Amount", "NaN").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("Name", "  Sara ").unwrap(), "Sara");
        assert!(require_text("Name", "   ").is_err());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("Rs.", 1500.0), "Rs. 1500.00");
        assert_eq!(format_money("Rs.", 12.345), "Rs. 12.35");
    }

    #[test]
    fn test_receipt_filename() {
        assert_eq!(receipt_filename("receipt", "Ali Khan"), "receipt_Ali_Khan.pdf");
        assert_eq!(receipt_filename("receipt", "../etc"), "receipt_.._etc.pdf");
    }

    #[test]
    fn test_attachment_disposition() {
        let value = attachment_disposition("receipt_Zoë.pdf");
        assert!(value.starts_with("attachment; filename=\"receipt_Zo_.pdf\""));
        assert!(value.contains("filename*=UTF-8''receipt_Zo%C3%AB.pdf"));
    }
}

//! Field-level validators applied before rows are written.

use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DbErr;
use sea_orm::prelude::Decimal;
use thiserror::Error;
use validator::{ValidateEmail, ValidateLength, ValidateUrl};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for DbErr {
    fn from(err: ValidationError) -> Self {
        DbErr::Custom(err.to_string())
    }
}

pub type ValidationResult = Result<(), ValidationError>;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("Invalid integer regex"));
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("Invalid slug regex"));

const URL_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "ftps://"];

/// Maximum length in characters, not bytes.
pub fn max_length(field: &'static str, value: &str, max: usize) -> ValidationResult {
    if !value.validate_length(None, Some(max as u64), None) {
        return Err(ValidationError::new(
            field,
            format!(
                "ensure this value has at most {} characters (it has {})",
                max,
                value.chars().count()
            ),
        ));
    }
    Ok(())
}

pub fn required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "this field cannot be blank"));
    }
    Ok(())
}

/// Accepts an optional leading minus followed by one or more ASCII digits.
pub fn integer(field: &'static str, value: &str) -> ValidationResult {
    if !INTEGER.is_match(value) {
        return Err(ValidationError::new(field, "enter a valid integer"));
    }
    Ok(())
}

pub const MOBILE_MAX_LENGTH: usize = 15;

pub fn mobile(value: &str) -> ValidationResult {
    max_length("mobile", value, MOBILE_MAX_LENGTH)?;
    integer("mobile", value)
}

/// Letters, numbers, underscores or hyphens.
pub fn slug(field: &'static str, value: &str, max: usize) -> ValidationResult {
    max_length(field, value, max)?;
    if !SLUG.is_match(value) {
        return Err(ValidationError::new(
            field,
            "enter a valid slug consisting of letters, numbers, underscores or hyphens",
        ));
    }
    Ok(())
}

/// Absolute http(s) or ftp(s) URL.
pub fn url(field: &'static str, value: &str, max: usize) -> ValidationResult {
    max_length(field, value, max)?;

    let scheme_ok = URL_SCHEMES.iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if !scheme_ok || !value.validate_url() {
        return Err(ValidationError::new(field, "enter a valid URL"));
    }
    Ok(())
}

/// Blank is allowed; anything else must be an email address.
pub fn email(field: &'static str, value: &str, max: usize) -> ValidationResult {
    max_length(field, value, max)?;
    if !value.is_empty() && !value.validate_email() {
        return Err(ValidationError::new(field, "enter a valid email address"));
    }
    Ok(())
}

/// Fixed-precision check: at most `max_digits` significant digits, `places`
/// of them after the decimal point.
pub fn decimal(
    field: &'static str,
    value: &Decimal,
    max_digits: u32,
    places: u32,
) -> ValidationResult {
    let normalized = value.normalize();
    let decimals = normalized.scale();
    let digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    let whole_digits = digits.saturating_sub(decimals);

    if digits.max(decimals) > max_digits {
        return Err(ValidationError::new(
            field,
            format!("ensure that there are no more than {} digits in total", max_digits),
        ));
    }
    if decimals > places {
        return Err(ValidationError::new(
            field,
            format!("ensure that there are no more than {} decimal places", places),
        ));
    }
    if whole_digits > max_digits - places {
        return Err(ValidationError::new(
            field,
            format!(
                "ensure that there are no more than {} digits before the decimal point",
                max_digits - places
            ),
        ));
    }
    Ok(())
}

pub fn finite(field: &'static str, value: f64) -> ValidationResult {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "enter a finite number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length_counts_characters() {
        assert!(max_length("name", "ééé", 3).is_ok());
        assert!(max_length("name", "éééé", 3).is_err());
    }

    #[test]
    fn test_mobile_accepts_digits_up_to_fifteen() {
        assert!(mobile("9876543210").is_ok());
        assert!(mobile("123456789012345").is_ok());
    }

    #[test]
    fn test_mobile_rejects_long_and_non_numeric() {
        let err = mobile("1234567890123456").unwrap_err();
        assert_eq!(err.field, "mobile");
        assert!(err.reason.contains("at most 15"));

        assert!(mobile("98765-43210").is_err());
        assert!(mobile("+919876543210").is_err());
        assert!(mobile("12ab").is_err());
        assert!(mobile("-42").is_ok());
        assert!(mobile("").is_err());
    }

    #[test]
    fn test_slug() {
        assert!(slug("alias", "new-south_wales2", 50).is_ok());
        assert!(slug("alias", "new south wales", 50).is_err());
        assert!(slug("alias", "", 50).is_err());
    }

    #[test]
    fn test_url() {
        assert!(url("website", "https://pizza.example.com/menu?x=1", 200).is_ok());
        assert!(url("website", "http://localhost:8080", 200).is_ok());
        assert!(url("website", "pizza.example.com", 200).is_err());
        assert!(url("website", "mailto://someone", 200).is_err());
        assert!(url("website", "https://bad host.com", 200).is_err());
        assert!(url("website", "http://[::1", 200).is_err());
        assert!(url("website", "https://x:abc", 200).is_err());
        assert!(url("website", "HTTPS://PIZZA.EXAMPLE.COM", 200).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(email("email", "", 254).is_ok());
        assert!(email("email", "homer@springfield.example", 254).is_ok());
        assert!(email("email", "homer", 254).is_err());
        assert!(email("email", "homer@", 254).is_err());
    }

    #[test]
    fn test_decimal_precision() {
        assert!(decimal("latitude", &Decimal::new(34_052_235, 6), 9, 6).is_ok());
        assert!(decimal("longitude", &Decimal::new(-118_243_683, 6), 9, 6).is_ok());
        // seven decimal places
        assert!(decimal("latitude", &Decimal::new(340_522_351, 7), 9, 6).is_err());
        // four whole digits
        assert!(decimal("longitude", &Decimal::new(1_000_000_000, 6), 9, 6).is_err());
    }

    #[test]
    fn test_finite() {
        assert!(finite("price", 9.5).is_ok());
        assert!(finite("price", f64::NAN).is_err());
        assert!(finite("price", f64::INFINITY).is_err());
    }
}

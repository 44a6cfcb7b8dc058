use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{LEADERBOARD_DEFAULT_LIMIT, LEADERBOARD_MAX_LIMIT, LEADERBOARD_MIN_LIMIT};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Minimal `local@domain.tld` shape check. Anything stricter is the
/// upstream's job.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_donation_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::new("invalid_donation_amount"));
    }
    Ok(())
}

/// Converts a major-unit amount (rupees, dollars) into integer minor units.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Resolves the `limit` query parameter of the leaderboard relay.
///
/// A missing parameter falls back to the default, an empty one counts as
/// zero, and anything that is not a finite number falls back to the default.
/// Finite values are clamped into `[1, 50]` and truncated.
pub fn clamp_leaderboard_limit(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return LEADERBOARD_DEFAULT_LIMIT;
    };

    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        match trimmed.parse::<f64>() {
            Ok(v) => v,
            Err(_) => return LEADERBOARD_DEFAULT_LIMIT,
        }
    };

    if !value.is_finite() {
        return LEADERBOARD_DEFAULT_LIMIT;
    }

    value.clamp(LEADERBOARD_MIN_LIMIT as f64, LEADERBOARD_MAX_LIMIT as f64) as u32
}

/// Treats empty strings the same as absent values, like a falsy check on
/// the wire payload.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(validate_email("donor@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("donor@example").is_err());
        assert!(validate_email("donor example@x.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_donation_amount_must_be_positive_and_finite() {
        assert!(validate_donation_amount(15.5).is_ok());
        assert!(validate_donation_amount(0.0).is_err());
        assert!(validate_donation_amount(-5.0).is_err());
        assert!(validate_donation_amount(f64::NAN).is_err());
        assert!(validate_donation_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_minor_units_rounding() {
        assert_eq!(to_minor_units(15.5), 1550);
        assert_eq!(to_minor_units(3.0), 300);
        assert_eq!(to_minor_units(19.99), 1999);
    }

    #[test]
    fn test_leaderboard_limit_clamping() {
        assert_eq!(clamp_leaderboard_limit(None), 6);
        assert_eq!(clamp_leaderboard_limit(Some("0")), 1);
        assert_eq!(clamp_leaderboard_limit(Some("abc")), 6);
        assert_eq!(clamp_leaderboard_limit(Some("999")), 50);
        assert_eq!(clamp_leaderboard_limit(Some("-3")), 1);
        assert_eq!(clamp_leaderboard_limit(Some("12")), 12);
        assert_eq!(clamp_leaderboard_limit(Some("")), 1);
        assert_eq!(clamp_leaderboard_limit(Some("inf")), 6);
        assert_eq!(clamp_leaderboard_limit(Some(" 7 ")), 7);
    }

    #[test]
    fn test_present_skips_empty_strings() {
        assert_eq!(present(&Some("x".to_string())), Some("x"));
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
    }
}

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
    })
}

fn pincode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[1-9][0-9]{5}$").expect("valid pincode regex"))
}

/// Lower-cases and trims, then checks the address shape.
pub fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    if email.len() > 255 || !email_regex().is_match(&email) {
        return Err(AppError::ValidationError("Invalid email address".to_string()));
    }
    Ok(email)
}

/// Indian postal code: six digits, no leading zero.
pub fn validate_pincode(pincode: &str) -> AppResult<&str> {
    let pincode = pincode.trim();
    if !pincode_regex().is_match(pincode) {
        return Err(AppError::ValidationError(
            "Pincode must be a 6-digit number".to_string(),
        ));
    }
    Ok(pincode)
}

pub fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(AppError::ValidationError(
            "Name must be between 1 and 100 characters".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Priya@Example.COM ").unwrap(),
            "priya@example.com"
        );
        assert!(normalize_email("priya@").is_err());
        assert!(normalize_email("no-at-sign.com").is_err());
    }

    #[test]
    fn test_validate_pincode() {
        assert_eq!(validate_pincode(" 400001 ").unwrap(), "400001");
        assert!(validate_pincode("40001").is_err());
        assert!(validate_pincode("040001").is_err());
        assert!(validate_pincode("4000a1").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Asha ").unwrap(), "Asha");
        assert!(validate_name("   ").is_err());
    }
}

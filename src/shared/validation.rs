use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating appointment phone numbers.
    /// Optional leading +, then 7-15 digits, with spaces or hyphens allowed as separators
    /// - Valid: "+919876543210", "98765 43210", "011-2345-6789"
    /// - Invalid: "12345", "phone", "+91 (987) 654"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").unwrap();
}

/// Counts digits only, so separators don't inflate the length check
pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone) && (7..=15).contains(&phone_digit_count(phone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("011-2345-6789"));
    }

    #[test]
    fn test_phone_invalid() {
        assert!(!is_valid_phone("12345")); // too short
        assert!(!is_valid_phone("phone")); // letters
        assert!(!is_valid_phone("+91 (987) 654")); // parentheses
        assert!(!is_valid_phone("")); // empty
        assert!(!is_valid_phone("98765432109876543210")); // too long
    }
}

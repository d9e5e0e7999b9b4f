//! Email address shape check for the ticket form.
//!
//! Only the shape is checked: a dotted or quoted local part, then either a
//! bracketed IPv4 literal or a host name ending in an alphabetic TLD of two
//! or more letters. Deliverability is the provider's problem.

// The pattern is a literal; it either always compiles or never does.
#![allow(clippy::expect_used)]

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
    )
    .expect("email pattern is valid");
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x-y_z+tag@sub-domain.example.io"));
        assert!(is_valid_email("\"odd name\"@example.com"));
        assert!(is_valid_email("user@[192.168.0.1]"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("user@example.com "));
    }
}

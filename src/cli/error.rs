// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown ids, out-of-range scores.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2)
/// Internal errors are for schema load failures and unexpected I/O.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Parse a score argument into a number; range checking against the
/// dimension happens later, where the option count is known
pub fn validate_score_value(value_str: &str) -> Result<u8, String> {
    value_str
        .parse::<u8>()
        .map_err(|_| format!("Invalid score: '{}'. Score must be a number.", value_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_score_value() {
        assert_eq!(validate_score_value("0"), Ok(0));
        assert_eq!(validate_score_value("4"), Ok(4));
        assert!(validate_score_value("four").is_err());
        assert!(validate_score_value("-1").is_err());
        assert!(validate_score_value("").is_err());
    }
}

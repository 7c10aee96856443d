//! Client-side validation rules applied before any request is sent.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::domain::errors::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z]{2,4}$")
        .unwrap_or_else(|e| unreachable!("email pattern is a valid regex: {e}"))
});

/// Checks an email against the accepted shape: word characters, dots and
/// hyphens before `@`, dot-separated domain labels and a 2 to 4 letter TLD.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates an email field.
///
/// # Errors
/// Returns [`ValidationError::InvalidEmail`] when the shape does not match.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Fails with `message` if any field is blank.
///
/// # Errors
/// Returns [`ValidationError::MissingFields`] on the first blank field.
pub fn require_filled(fields: &[&str], message: &'static str) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err(ValidationError::missing(message))
    } else {
        Ok(())
    }
}

/// Fails unless `confirmation` equals `password`.
///
/// # Errors
/// Returns [`ValidationError::PasswordMismatch`] when they differ.
pub fn require_matching_passwords(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

/// Parses a typed amount into a positive decimal.
///
/// With a `,` present the input is read in Brazilian form (`1.234,56`): `.`
/// groups thousands and `,` separates cents. Otherwise `.` is the decimal
/// separator.
///
/// # Errors
/// Returns [`ValidationError::InvalidAmount`] for non-numeric or non-positive input.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let input = input.trim();
    let normalized = if input.contains(',') {
        input.replace('.', "").replace(',', ".")
    } else {
        input.to_string()
    };
    let amount = Decimal::from_str(&normalized).map_err(|_| ValidationError::InvalidAmount)?;

    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(amount)
}

/// Guards a transfer against the most recently fetched balance.
///
/// The backend may still reject the order independently.
///
/// # Errors
/// Returns [`ValidationError::BalanceUnavailable`] before the balance has loaded
/// and [`ValidationError::InsufficientBalance`] when `amount` exceeds it.
pub fn check_transfer_amount(
    amount: Decimal,
    balance: Option<Decimal>,
    format_balance: impl Fn(Decimal) -> String,
) -> Result<(), ValidationError> {
    let Some(balance) = balance else {
        return Err(ValidationError::BalanceUnavailable);
    };

    if amount > balance {
        return Err(ValidationError::InsufficientBalance {
            balance: format_balance(balance),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ana@mockbank.com" ; "simple")]
    #[test_case("ana.silva-2@mail.example.org" ; "dots and hyphens")]
    #[test_case("a_b@sub-domain.co.br" ; "nested domain")]
    #[test_case("x@y.info" ; "four letter tld")]
    fn test_valid_emails(email: &str) {
        assert!(is_valid_email(email));
    }

    #[test_case("" ; "empty")]
    #[test_case("ana.mockbank.com" ; "missing at")]
    #[test_case("ana@mockbank" ; "missing suffix")]
    #[test_case("ana@mockbank.c" ; "tld too short")]
    #[test_case("ana@mockbank.comercial" ; "tld too long")]
    #[test_case("ana@.com" ; "empty label")]
    #[test_case("ana silva@mockbank.com" ; "space in local part")]
    fn test_invalid_emails(email: &str) {
        assert!(!is_valid_email(email));
    }

    #[test_case("200", Decimal::from(200) ; "integer")]
    #[test_case("10.50", Decimal::new(1050, 2) ; "dot decimal")]
    #[test_case(" 10,5 ", Decimal::new(105, 1) ; "comma decimal")]
    #[test_case("1.234,56", Decimal::new(123_456, 2) ; "thousands separator")]
    #[test_case("1.000.000,00", Decimal::from(1_000_000) ; "several groups")]
    fn test_parse_amount(input: &str, expected: Decimal) {
        assert_eq!(parse_amount(input), Ok(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("abc" ; "letters")]
    #[test_case("0" ; "zero")]
    #[test_case("-5" ; "negative")]
    #[test_case("1,2,3" ; "two commas")]
    fn test_parse_amount_rejects(input: &str) {
        assert_eq!(parse_amount(input), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_transfer_within_balance_passes() {
        let balance = Some(Decimal::from(100));
        assert!(check_transfer_amount(Decimal::from(100), balance, |b| b.to_string()).is_ok());
        assert!(check_transfer_amount(Decimal::new(1, 2), balance, |b| b.to_string()).is_ok());
    }

    #[test]
    fn test_transfer_above_balance_rejected() {
        let result = check_transfer_amount(Decimal::new(10001, 2), Some(Decimal::from(100)), |b| {
            format!("R$ {b}")
        });
        assert_eq!(
            result,
            Err(ValidationError::InsufficientBalance {
                balance: "R$ 100".to_string()
            })
        );
    }

    #[test]
    fn test_transfer_without_balance_waits() {
        let result = check_transfer_amount(Decimal::ONE, None, |b| b.to_string());
        assert_eq!(result, Err(ValidationError::BalanceUnavailable));
    }

    #[test]
    fn test_require_filled() {
        assert!(require_filled(&["a", "b"], ValidationError::REQUIRED_FIELDS).is_ok());
        assert_eq!(
            require_filled(&["a", "  "], ValidationError::REQUIRED_FIELDS),
            Err(ValidationError::missing(ValidationError::REQUIRED_FIELDS))
        );
    }

    #[test]
    fn test_password_confirmation() {
        assert!(require_matching_passwords("x", "x").is_ok());
        assert_eq!(
            require_matching_passwords("x", "y"),
            Err(ValidationError::PasswordMismatch)
        );
    }
}

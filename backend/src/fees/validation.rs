//! Transfer request validation.
//!
//! Pre-flight checks run before a transfer is scheduled. All failures are
//! collected and returned together rather than stopping at the first, so the
//! caller can surface every problem to the creator at once.

use thiserror::Error;
use tracing::debug;

use super::rates::FeeRates;

/// Reasons a transfer request is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transfer amount must be positive, got ¥{amount}")]
    NonPositive { amount: i64 },

    #[error("transfer amount ¥{amount} is below the ¥{minimum} minimum")]
    BelowMinimum { amount: i64, minimum: i64 },

    #[error("transfer amount ¥{amount} exceeds available balance ¥{available}")]
    ExceedsBalance { amount: i64, available: i64 },
}

/// Validation result: Ok, or every failure found.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a creator's transfer request against their available balance.
///
/// Runs all checks and returns all errors found:
/// - the amount must be positive,
/// - the amount must meet the minimum transfer threshold,
/// - the amount must not exceed the available balance.
///
/// # Example
/// ```
/// use payout_engine_core::{validate_transfer_request, FeeRates, ValidationError};
///
/// let rates = FeeRates::default();
/// assert!(validate_transfer_request(50_000, 100_000, &rates).is_ok());
///
/// let errors = validate_transfer_request(9_999, 100_000, &rates).unwrap_err();
/// assert_eq!(
///     errors,
///     vec![ValidationError::BelowMinimum { amount: 9_999, minimum: 10_000 }],
/// );
/// ```
pub fn validate_transfer_request(
    amount: i64,
    available_balance: i64,
    rates: &FeeRates,
) -> ValidationResult {
    let mut errors = Vec::new();

    if amount <= 0 {
        errors.push(ValidationError::NonPositive { amount });
    }

    if amount < rates.minimum_transfer {
        errors.push(ValidationError::BelowMinimum {
            amount,
            minimum: rates.minimum_transfer,
        });
    }

    if amount > available_balance {
        errors.push(ValidationError::ExceedsBalance {
            amount,
            available: available_balance,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(
            "transfer request for ¥{} rejected with {} error(s)",
            amount,
            errors.len()
        );
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_accumulate() {
        let rates = FeeRates::default();
        let errors = validate_transfer_request(-5, 100_000, &rates).unwrap_err();

        // A negative amount is both non-positive and below the minimum
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::NonPositive { amount: -5 }));
        assert!(errors.contains(&ValidationError::BelowMinimum {
            amount: -5,
            minimum: 10_000,
        }));
    }

    #[test]
    fn test_messages_are_human_readable() {
        let err = ValidationError::BelowMinimum {
            amount: 9_999,
            minimum: 10_000,
        };

        assert_eq!(
            err.to_string(),
            "transfer amount ¥9999 is below the ¥10000 minimum"
        );
    }

    #[test]
    fn test_exact_minimum_and_exact_balance_pass() {
        let rates = FeeRates::default();
        assert!(validate_transfer_request(10_000, 10_000, &rates).is_ok());
    }
}

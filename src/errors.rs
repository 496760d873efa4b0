//! Error types for credit simulations.

use thiserror::Error;

/// Errors that can occur while normalizing rates, computing interest, or
/// exchanging data with the surrounding product.
///
/// Every variant is a recoverable, synchronous failure: callers are expected
/// to surface the message to the end user and keep any prior results intact.
#[derive(Error, Debug, Clone)]
pub enum CredisimError {
    /// The quoted rate value did not parse to a finite number.
    #[error("rate value `{raw}` is not a valid number")]
    InvalidRateValue {
        /// The raw value as received.
        raw: String,
    },

    /// A period string is not part of the period table.
    #[error("invalid {field} `{value}`; options: {options}")]
    InvalidPeriod {
        /// Which input field carried the bad period.
        field: String,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted period names.
        options: String,
    },

    /// The rate kind is neither nominal nor effective.
    #[error("invalid rate kind `{value}`; options: nominal, efectiva")]
    InvalidRateKind {
        /// The rejected value.
        value: String,
    },

    /// A rate that must be non-negative came out negative.
    #[error("{rate} rate cannot be negative (got {value})")]
    NegativeRate {
        /// Which rate was negative (effective, nominal or sub-period).
        rate: &'static str,
        /// The offending decimal rate.
        value: f64,
    },

    /// Principal, term or annual rate failed validation.
    #[error("invalid loan terms: {field} {reason}")]
    InvalidLoanTerms {
        /// The offending field.
        field: String,
        /// Description of the violation.
        reason: String,
    },

    /// The term converted to whole months was not positive.
    #[error("loan term of {months} months must be positive")]
    InvalidTerm {
        /// The computed month count.
        months: f64,
    },

    /// The installment denominator collapsed to zero.
    #[error("amortization factor equals 1; installment denominator would be zero")]
    DegenerateAmortization,

    /// Shared data was not valid base64.
    #[error("shared data is not valid base64: {reason}")]
    ShareDecode {
        /// Description of the decode failure.
        reason: String,
    },

    /// Shared data decoded but did not hold the expected records.
    #[error("shared data is not a valid query list: {reason}")]
    ShareFormat {
        /// Description of the format failure.
        reason: String,
    },

    /// A JSON payload could not be read or written.
    #[error("invalid JSON payload: {0}")]
    Json(String),

    /// A schedule DataFrame operation failed.
    #[error("schedule frame error: {0}")]
    Frame(String),
}

impl CredisimError {
    /// Creates an invalid rate value error.
    #[must_use]
    pub fn invalid_rate_value(raw: impl Into<String>) -> Self {
        Self::InvalidRateValue { raw: raw.into() }
    }

    /// Creates an invalid period error for the given input field.
    #[must_use]
    pub fn invalid_period(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            field: field.into(),
            value: value.into(),
            options: crate::periods::Period::options(),
        }
    }

    /// Creates an invalid rate kind error.
    #[must_use]
    pub fn invalid_rate_kind(value: impl Into<String>) -> Self {
        Self::InvalidRateKind {
            value: value.into(),
        }
    }

    /// Creates a negative rate error.
    #[must_use]
    pub fn negative_rate(rate: &'static str, value: f64) -> Self {
        Self::NegativeRate { rate, value }
    }

    /// Creates an invalid loan terms error naming the offending field.
    #[must_use]
    pub fn invalid_loan_terms(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLoanTerms {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a share decode error.
    #[must_use]
    pub fn share_decode(reason: impl Into<String>) -> Self {
        Self::ShareDecode {
            reason: reason.into(),
        }
    }

    /// Creates a share format error.
    #[must_use]
    pub fn share_format(reason: impl Into<String>) -> Self {
        Self::ShareFormat {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CredisimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<polars::prelude::PolarsError> for CredisimError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame(err.to_string())
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_lists_options() {
        let err = CredisimError::invalid_period("periodo", "fortnightly");
        let msg = err.to_string();
        assert!(msg.contains("fortnightly"));
        assert!(msg.contains("mensual"));
        assert!(msg.contains("anual"));
    }

    #[test]
    fn test_invalid_loan_terms_names_field() {
        let err = CredisimError::invalid_loan_terms("monto", "must be a positive number");
        assert!(err.to_string().contains("monto"));
    }
}

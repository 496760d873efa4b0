use crate::CredisimResult;
use crate::errors::CredisimError;
use crate::periods::Period;
use crate::rate_convert::RateKind;
use bon::Builder;
use garde::Validate;

// =======================================
// RATE SPECIFICATION PARAMETER STRUCT
// =======================================

/// A quoted rate, as supplied by the caller.
///
/// `value` is in percentage points (2 means 2%). The compounding period is
/// never optional here: default-filling from the base period happens at the
/// input boundary, before this struct exists, so arithmetic downstream never
/// has to guess.
#[derive(Debug, Clone, Copy, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct RateSpec {
    // Rate magnitude in percentage points
    #[garde(custom(validate_finite))]
    pub value: f64,

    // Nominal or effective
    pub kind: RateKind,

    // Base period the rate is quoted over
    pub period: Period,

    // Compounding period; equals `period` unless the caller said otherwise
    pub capitalization: Period,
}

impl RateSpec {
    /// Validate in the order the conversion contract requires: the value must
    /// be finite before it may be checked for sign. Period and kind fields are
    /// valid by construction (string inputs are rejected at the parse
    /// boundary).
    pub fn validate_all(&self) -> CredisimResult<()> {
        self.validate()
            .map_err(|_| CredisimError::invalid_rate_value(self.value.to_string()))?;

        if self.value < 0.0 {
            let rate = match self.kind {
                RateKind::Effective => "effective",
                RateKind::Nominal => "nominal",
            };
            return Err(CredisimError::negative_rate(rate, self.value / 100.0));
        }
        Ok(())
    }
}

// =======================================
// LOAN TERMS PARAMETER STRUCT
// =======================================

/// The terms of a loan, ready for interest calculations.
///
/// `annual_effective_rate` is a TEA in percentage points (42.58 means
/// 42.58%), normally produced by [`crate::rate_convert::normalize`].
#[derive(Debug, Clone, Copy, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct LoanTerms {
    // Amount lent, in currency units
    #[garde(custom(validate_positive))]
    pub principal: f64,

    // Loan duration in days
    #[garde(custom(validate_positive))]
    pub term_days: f64,

    // Annual effective rate, percentage points
    #[garde(custom(validate_non_negative))]
    pub annual_effective_rate: f64,
}

impl LoanTerms {
    /// Validate every field, reporting the first offending one by name.
    pub fn validate_all(&self) -> CredisimResult<()> {
        self.validate().map_err(|report| {
            let field = report
                .iter()
                .next()
                .map(|(path, _)| path.to_string())
                .unwrap_or_else(|| "terms".into());
            let reason = report
                .iter()
                .next()
                .map(|(_, error)| error.to_string())
                .unwrap_or_else(|| "failed validation".into());
            CredisimError::invalid_loan_terms(field, reason)
        })
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

/// Custom validation function for rate values
fn validate_finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new("must be a finite number"));
    }
    Ok(())
}

/// Custom validation function for principal and term fields
fn validate_positive(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value <= 0.0 {
        return Err(garde::Error::new("must be a positive finite number"));
    }
    Ok(())
}

/// Custom validation function for the annual effective rate
fn validate_non_negative(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value < 0.0 {
        return Err(garde::Error::new("must be a non-negative finite number"));
    }
    Ok(())
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_spec(value: f64) -> RateSpec {
        RateSpec::builder()
            .value(value)
            .kind(RateKind::Effective)
            .period(Period::Monthly)
            .capitalization(Period::Monthly)
            .build()
    }

    #[test]
    fn test_rate_spec_accepts_zero() {
        assert!(monthly_spec(0.0).validate_all().is_ok());
    }

    #[test]
    fn test_rate_spec_rejects_nan() {
        let err = monthly_spec(f64::NAN).validate_all().unwrap_err();
        assert!(matches!(err, CredisimError::InvalidRateValue { .. }));
    }

    #[test]
    fn test_rate_spec_rejects_negative_value() {
        let err = monthly_spec(-2.0).validate_all().unwrap_err();
        assert!(matches!(err, CredisimError::NegativeRate { .. }));
    }

    #[test]
    fn test_nan_is_reported_before_sign() {
        // A non-finite value must fail as an invalid value, never as negative
        let err = monthly_spec(f64::NEG_INFINITY).validate_all().unwrap_err();
        assert!(matches!(err, CredisimError::InvalidRateValue { .. }));
    }

    #[test]
    fn test_loan_terms_reject_non_positive_principal() {
        let terms = LoanTerms::builder()
            .principal(0.0)
            .term_days(360.0)
            .annual_effective_rate(10.0)
            .build();
        let err = terms.validate_all().unwrap_err();
        match err {
            CredisimError::InvalidLoanTerms { field, .. } => assert_eq!(field, "principal"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_loan_terms_reject_negative_rate() {
        let terms = LoanTerms::builder()
            .principal(1_000_000.0)
            .term_days(360.0)
            .annual_effective_rate(-1.0)
            .build();
        let err = terms.validate_all().unwrap_err();
        match err {
            CredisimError::InvalidLoanTerms { field, .. } => {
                assert_eq!(field, "annual_effective_rate")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_loan_terms_accept_zero_rate() {
        let terms = LoanTerms::builder()
            .principal(1_000_000.0)
            .term_days(360.0)
            .annual_effective_rate(0.0)
            .build();
        assert!(terms.validate_all().is_ok());
    }
}

use crate::CredisimResult;
use crate::errors::CredisimError;
use crate::params::LoanTerms;
use bon::builder;

/// Days per installment month when converting a day-denominated term.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days per year for the continuous-compounding projection.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Interest accrual strategy.
///
/// The product's history carries two non-equivalent formulas for "total
/// interest"; both are exposed as named strategies and the caller must pick
/// one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestMethod {
    /// Fixed monthly installments (French amortization system).
    AmortizedInstallment,

    /// Single repayment at maturity, compounding the TEA over `days/365`.
    ContinuousCompounding,
}

/// Monthly effective rate implied by an annual effective rate.
///
/// # Formula
/// ```text
/// i = (1 + TEA/100)^(1/12) - 1
/// ```
/// where:
/// - `TEA` is the annual effective rate in percentage points
///
/// # Example
/// ```rust
/// # use credisim::prelude::monthly_effective_rate;
/// let i = monthly_effective_rate(42.58);
/// println!("Monthly rate: {i:.6}");
/// ```
pub fn monthly_effective_rate(tea: f64) -> f64 {
    (1.0 + tea / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Term in whole installment months, rounding up.
///
/// # Example
/// ```rust
/// # use credisim::prelude::term_in_months;
/// assert_eq!(term_in_months(1095.0), 37.0);
/// ```
pub fn term_in_months(term_days: f64) -> f64 {
    (term_days / DAYS_PER_MONTH).ceil()
}

/// Fixed monthly installment under the French amortization system.
///
/// # Formula
/// ```text
/// cuota = P · i(1 + i)^n / [(1 + i)^n - 1]
/// ```
/// where:
/// - `P` is the principal
/// - `i` is the monthly effective rate implied by the TEA
/// - `n` is the term in whole months, rounded up from days
///
/// With `i = 0` the installment degenerates to `P / n`.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let cuota = installment()
///     .principal(2_000_000.0)
///     .term_days(1095.0)
///     .tea(42.58)
///     .call()?;
/// println!("Installment: {cuota:.2}");
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn installment(
    principal: f64,
    term_days: f64,
    tea: f64,
    #[builder(default = true)] validate: bool,
) -> CredisimResult<f64> {
    let terms = LoanTerms {
        principal,
        term_days,
        annual_effective_rate: tea,
    };
    if validate {
        terms.validate_all()?;
    }
    let (payment, _, _) = installment_plan(&terms)?;
    Ok(payment)
}

/// Total interest paid under a fixed monthly installment schedule.
///
/// # Formula
/// ```text
/// interest = max(0, cuota · n - P)
/// ```
/// The result is clamped at zero to absorb floating-point underflow near the
/// zero-rate edge; with a zero TEA the schedule repays principal only and the
/// interest is exactly zero.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let interest = amortized_interest()
///     .principal(2_000_000.0)
///     .term_days(1095.0)
///     .tea(42.58)
///     .call()?;
/// println!("Total interest: {interest:.2}");
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn amortized_interest(
    principal: f64,
    term_days: f64,
    tea: f64,
    #[builder(default = true)] validate: bool,
) -> CredisimResult<f64> {
    let terms = LoanTerms {
        principal,
        term_days,
        annual_effective_rate: tea,
    };
    if validate {
        terms.validate_all()?;
    }
    let (payment, months, monthly_rate) = installment_plan(&terms)?;
    if monthly_rate == 0.0 {
        return Ok(0.0);
    }
    Ok((payment * months as f64 - terms.principal).max(0.0))
}

/// Total interest of a bullet loan compounding the TEA over the term.
///
/// # Formula
/// ```text
/// interest = P · [(1 + TEA/100)^(days/365) - 1]
/// ```
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let interest = compound_interest()
///     .principal(2_000_000.0)
///     .term_days(1095.0)
///     .tea(42.58)
///     .call()?;
/// println!("Total interest: {interest:.2}");
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn compound_interest(
    principal: f64,
    term_days: f64,
    tea: f64,
    #[builder(default = true)] validate: bool,
) -> CredisimResult<f64> {
    let terms = LoanTerms {
        principal,
        term_days,
        annual_effective_rate: tea,
    };
    if validate {
        terms.validate_all()?;
    }
    let rate = terms.annual_effective_rate / 100.0;
    let exponent = terms.term_days / DAYS_PER_YEAR;
    Ok(terms.principal * ((1.0 + rate).powf(exponent) - 1.0))
}

/// Total interest under the caller-selected strategy.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let interest = total_interest()
///     .principal(2_000_000.0)
///     .term_days(1095.0)
///     .tea(42.58)
///     .method(InterestMethod::AmortizedInstallment)
///     .call()?;
/// println!("Total interest: {interest:.2}");
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn total_interest(
    principal: f64,
    term_days: f64,
    tea: f64,
    method: InterestMethod,
    #[builder(default = true)] validate: bool,
) -> CredisimResult<f64> {
    match method {
        InterestMethod::AmortizedInstallment => amortized_interest()
            .principal(principal)
            .term_days(term_days)
            .tea(tea)
            .validate(validate)
            .call(),
        InterestMethod::ContinuousCompounding => compound_interest()
            .principal(principal)
            .term_days(term_days)
            .tea(tea)
            .validate(validate)
            .call(),
    }
}

/// Installment, month count and monthly rate for a set of loan terms.
///
/// Terms are assumed validated by the caller.
pub(crate) fn installment_plan(terms: &LoanTerms) -> CredisimResult<(f64, u32, f64)> {
    let monthly_rate = monthly_effective_rate(terms.annual_effective_rate);
    let months = term_in_months(terms.term_days);
    // Unreachable once term_days is validated positive, kept as a guard
    if months <= 0.0 {
        return Err(CredisimError::InvalidTerm { months });
    }
    let n = months as u32;

    let payment = if monthly_rate == 0.0 {
        terms.principal / months
    } else {
        let factor = (1.0 + monthly_rate).powf(months);
        if factor - 1.0 == 0.0 {
            return Err(CredisimError::DegenerateAmortization);
        }
        terms.principal * (monthly_rate * factor) / (factor - 1.0)
    };

    Ok((payment, n, monthly_rate))
}

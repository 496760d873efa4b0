use crate::CredisimResult;
use crate::interest::installment_plan;
use crate::params::LoanTerms;
use bon::builder;
use polars::prelude::*;

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Month-by-month amortization schedule for a fixed-installment loan.
///
/// Returns a DataFrame with one row per month and columns `month`, `payment`,
/// `interest`, `principal` and `balance`. The final row absorbs floating
/// point drift so the balance closes at exactly zero.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let df = amortization_schedule()
///     .principal(2_000_000.0)
///     .term_days(1095.0)
///     .tea(42.58)
///     .call()?;
/// println!("{}", df.height()); // 37
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn amortization_schedule(
    principal: f64,
    term_days: f64,
    tea: f64,
    #[builder(default = true)] validate: bool,
) -> CredisimResult<DataFrame> {
    let terms = LoanTerms {
        principal,
        term_days,
        annual_effective_rate: tea,
    };
    if validate {
        terms.validate_all()?;
    }
    let (payment, months, monthly_rate) = installment_plan(&terms)?;

    let mut month_vec: Vec<u32> = Vec::with_capacity(months as usize);
    let mut payment_vec: Vec<f64> = Vec::with_capacity(months as usize);
    let mut interest_vec: Vec<f64> = Vec::with_capacity(months as usize);
    let mut principal_vec: Vec<f64> = Vec::with_capacity(months as usize);
    let mut balance_vec: Vec<f64> = Vec::with_capacity(months as usize);

    let mut balance = terms.principal;
    for month in 1..=months {
        let interest_part = balance * monthly_rate;
        // The last row repays whatever balance is left so the schedule closes
        let principal_part = if month == months {
            balance
        } else {
            payment - interest_part
        };
        balance -= principal_part;

        month_vec.push(month);
        payment_vec.push(interest_part + principal_part);
        interest_vec.push(interest_part);
        principal_vec.push(principal_part);
        balance_vec.push(balance);
    }

    let df = DataFrame::new(vec![
        Series::new("month".into(), month_vec).into_column(),
        Series::new("payment".into(), payment_vec).into_column(),
        Series::new("interest".into(), interest_vec).into_column(),
        Series::new("principal".into(), principal_vec).into_column(),
        Series::new("balance".into(), balance_vec).into_column(),
    ])?;

    Ok(df)
}

/// Sum of the interest column of an amortization schedule.
pub fn schedule_total_interest(df: &DataFrame) -> CredisimResult<f64> {
    let interest_column = df.column("interest")?;
    let interest_series = interest_column.f64()?;
    Ok(interest_series.iter().flatten().sum())
}

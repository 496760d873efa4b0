//! # Credisim Prelude
//!
//! Conveniently re-exports the most common types and functions for credit
//! simulations. Import this module to access all primary features with a
//! single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use credisim::prelude::*;
//! let tea = tea()
//!     .value(2.0)
//!     .kind(RateKind::Effective)
//!     .period(Period::Monthly)
//!     .call()?;
//! let interest = amortized_interest()
//!     .principal(2_000_000.0)
//!     .term_days(1095.0)
//!     .tea(tea)
//!     .call()?;
//! println!("TEA {tea:.2}%, interest {interest:.2}");
//! # CredisimResult::Ok(())
//! ```

// Package Result type and error enum
pub use crate::CredisimResult;
pub use crate::errors::CredisimError;

// Periods and rate kinds
pub use crate::periods::Period;
pub use crate::rate_convert::RateKind;

// Rate normalization
pub use crate::rate_convert::{annual_nominal, annualize_effective, normalize, tea};

// Validated parameter structs
pub use crate::params::{LoanTerms, RateSpec};

// Interest strategies
pub use crate::interest::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, InterestMethod, amortized_interest, compound_interest,
    installment, monthly_effective_rate, term_in_months, total_interest,
};

// Amortization schedule
pub use crate::schedule::{amortization_schedule, schedule_total_interest};

// Extraction-service boundary
pub use crate::extract::{DEFAULT_FOLLOW_UP, ExtractionResponse, RawNumber};

// Share codec
pub use crate::share::{
    SHARE_QUERY_PARAM, SHARED_PAGE_PATH, SharedQuery, decode_share_data, encode_share_data,
    share_link,
};

// Simulation pipeline
pub use crate::quote::{
    ChartSeries, INTEREST_LABEL, PRINCIPAL_LABEL, Quote, Simulation, simulate, simulate_shared,
};

// Most commonly used Polars types for working with schedules
pub use polars::prelude::{DataFrame, PolarsError, PolarsResult, Series};

//! # Credisim
//!
//! A type-safe Rust library for credit simulations: normalizing quoted loan
//! rates to annual effective terms and computing total interest under
//! fixed-installment amortization.
//!
//! ## Features
//! - **Rate Normalization**: nominal or effective rates over any standard
//!   period (daily through annual), with an explicit compounding period,
//!   converted to an Annual Effective Rate (TEA)
//! - **Two Interest Strategies**: fixed-installment (French) amortization and
//!   continuous-compounding bullet projection, selected explicitly by the
//!   caller
//! - **Amortization Schedules**: month-by-month payment breakdown as a
//!   DataFrame
//! - **Service Boundary**: typed parsing of the extraction-service payload,
//!   including the incomplete/follow-up case
//! - **Shareable State**: base64 codec for re-computable shared simulations
//! - **Builder Pattern**: all calculation functions use builders with
//!   automatic parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use credisim::prelude::*;
//!
//! // Normalize a 2% effective monthly rate to annual terms
//! let tea = tea()
//!     .value(2.0)
//!     .kind(RateKind::Effective)
//!     .period(Period::Monthly)
//!     .call()?;
//!
//! // Total interest over 1095 days under fixed monthly installments
//! let interest = amortized_interest()
//!     .principal(2_000_000.0)
//!     .term_days(1095.0)
//!     .tea(tea)
//!     .call()?;
//!
//! // The same loan as a bullet projection
//! let bullet = compound_interest()
//!     .principal(2_000_000.0)
//!     .term_days(1095.0)
//!     .tea(tea)
//!     .call()?;
//!
//! println!("TEA: {tea:.2}%");
//! println!("Amortized interest: {interest:.2}");
//! println!("Bullet interest: {bullet:.2}");
//! # CredisimResult::Ok(())
//! ```
//!
//! ## Notes
//! - Rates are expressed in percentage points throughout (2 means 2%)
//! - Period parsing accepts the Spanish service vocabulary (`mensual`,
//!   `semestral`, ...) and English names, case-insensitively
//! - Both interest strategies exist because the product's history carries
//!   both; no default is provided and callers must pick one

pub type CredisimResult<T> = Result<T, errors::CredisimError>;
pub mod errors;
pub mod extract;
pub mod interest;
pub mod params;
pub mod periods;
pub mod prelude;
pub mod quote;
pub mod rate_convert;
pub mod schedule;
pub mod share;

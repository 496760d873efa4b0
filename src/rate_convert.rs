use crate::CredisimResult;
use crate::errors::CredisimError;
use crate::params::RateSpec;
use crate::periods::Period;
use bon::builder;
use std::fmt;
use std::str::FromStr;

/// How a quoted rate is to be read.
///
/// An effective rate already reflects compounding within its stated period;
/// a nominal rate must first be scaled to an annual nominal rate and then
/// redistributed across its compounding frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    /// Rate quoted without compounding within the base period.
    Nominal,

    /// Rate that already reflects compounding within its stated period.
    Effective,
}

impl RateKind {
    /// Parse a rate kind string, case-insensitively.
    ///
    /// Accepts the extraction-service vocabulary (`nominal`, `efectiva`) and
    /// the English `effective`.
    pub fn parse(raw: &str) -> CredisimResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "nominal" => Ok(RateKind::Nominal),
            "efectiva" | "effective" => Ok(RateKind::Effective),
            _ => Err(CredisimError::invalid_rate_kind(raw)),
        }
    }

    /// Canonical name, in the vocabulary of the extraction service.
    pub const fn as_str(self) -> &'static str {
        match self {
            RateKind::Nominal => "nominal",
            RateKind::Effective => "efectiva",
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateKind {
    type Err = CredisimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Annualize a periodic effective rate.
///
/// This is the only annualization formula in the crate: the effective branch
/// of [`normalize`] applies it to the base period, and the nominal branch
/// applies it to the compounding period after redistribution.
///
/// # Formula
/// ```text
/// TEA = [(1 + r)^m - 1] · 100
/// ```
/// where:
/// - `r` is the effective rate per period, as a decimal
/// - `m` is the number of periods per year
///
/// # Example
/// ```rust
/// # use credisim::prelude::annualize_effective;
/// let tea = annualize_effective(0.02, 12); // 2% effective monthly
/// println!("TEA: {tea:.4}%");
/// ```
pub fn annualize_effective(rate: f64, periods_per_year: u32) -> f64 {
    let m = periods_per_year as f64;
    ((1.0 + rate).powf(m) - 1.0) * 100.0
}

/// Scale a periodic nominal rate to an annual nominal rate.
///
/// # Formula
/// ```text
/// j = r · m
/// ```
/// where:
/// - `r` is the nominal rate per period, as a decimal
/// - `m` is the number of periods per year
///
/// # Example
/// ```rust
/// # use credisim::prelude::annual_nominal;
/// let j = annual_nominal(0.02, 2); // 2% nominal semiannual => 4% annual
/// println!("Annual nominal: {j:.4}");
/// ```
pub fn annual_nominal(rate: f64, periods_per_year: u32) -> f64 {
    rate * periods_per_year as f64
}

/// Convert a rate specification to an Annual Effective Rate (TEA), in
/// percentage points.
///
/// The nominal branch is deliberately two steps: first annualize at nominal
/// (simple) scale, then re-annualize at effective scale through the
/// compounding period. Collapsing the two produces wrong results whenever
/// the base and compounding periods differ.
///
/// # Formula
/// ```text
/// effective:  TEA = [(1 + v/100)^m_base - 1] · 100
/// nominal:    j = (v/100) · m_base
///             s = j / m_cap
///             TEA = [(1 + s)^m_cap - 1] · 100
/// ```
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let spec = RateSpec::builder()
///     .value(2.0)
///     .kind(RateKind::Effective)
///     .period(Period::Monthly)
///     .capitalization(Period::Monthly)
///     .build();
/// let tea = normalize(&spec)?;
/// println!("TEA: {tea:.2}%"); // 26.82%
/// # CredisimResult::Ok(())
/// ```
pub fn normalize(spec: &RateSpec) -> CredisimResult<f64> {
    spec.validate_all()?;

    match spec.kind {
        RateKind::Effective => {
            let periodic = spec.value / 100.0;
            Ok(annualize_effective(periodic, spec.period.per_year()))
        }
        RateKind::Nominal => {
            let annual = annual_nominal(spec.value / 100.0, spec.period.per_year());
            let m_cap = spec.capitalization.per_year();
            let sub_period_rate = annual / m_cap as f64;
            // Unreachable once the value sign is validated, kept as a guard
            if sub_period_rate < 0.0 {
                return Err(CredisimError::negative_rate("sub-period", sub_period_rate));
            }
            Ok(annualize_effective(sub_period_rate, m_cap))
        }
    }
}

/// Convert a quoted rate to an Annual Effective Rate (TEA), in percentage
/// points.
///
/// The compounding period defaults to the base period when not given; the
/// default is filled here, at the input boundary.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let tea = tea()
///     .value(2.0)
///     .kind(RateKind::Nominal)
///     .period(Period::Semiannual)
///     .capitalization(Period::Monthly)
///     .call()?;
/// println!("TEA: {tea:.4}%"); // 4.0742%
/// # CredisimResult::Ok(())
/// ```
#[builder]
pub fn tea(
    value: f64,
    kind: RateKind,
    period: Period,
    capitalization: Option<Period>,
) -> CredisimResult<f64> {
    let spec = RateSpec::builder()
        .value(value)
        .kind(kind)
        .period(period)
        .capitalization(capitalization.unwrap_or(period))
        .build();
    normalize(&spec)
}

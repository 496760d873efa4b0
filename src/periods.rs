//! Rate periods and their frequency within a calendar year.
//!
//! Every quoted rate carries a base period (and, when nominal, a compounding
//! period). This module is the single source of truth for how many times each
//! period occurs per year. Parsing accepts the Spanish vocabulary used by the
//! extraction service as well as the English names, case-insensitively, and
//! rejects anything else with a typed error listing the accepted options.

use crate::CredisimResult;
use crate::errors::CredisimError;
use std::fmt;
use std::str::FromStr;

/// A rate period.
///
/// `Biweekly` follows the quincena convention: two payments per month,
/// 24 occurrences per year (not 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    FourMonthly,
    Semiannual,
    Annual,
}

impl Period {
    /// Every period, in descending frequency order.
    pub const ALL: [Period; 9] = [
        Period::Daily,
        Period::Weekly,
        Period::Biweekly,
        Period::Monthly,
        Period::Bimonthly,
        Period::Quarterly,
        Period::FourMonthly,
        Period::Semiannual,
        Period::Annual,
    ];

    /// Number of occurrences of this period within one year.
    pub const fn per_year(self) -> u32 {
        match self {
            Period::Daily => 365,
            Period::Weekly => 52,
            Period::Biweekly => 24,
            Period::Monthly => 12,
            Period::Bimonthly => 6,
            Period::Quarterly => 4,
            Period::FourMonthly => 3,
            Period::Semiannual => 2,
            Period::Annual => 1,
        }
    }

    /// Canonical name, in the vocabulary of the extraction service.
    pub const fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "diaria",
            Period::Weekly => "semanal",
            Period::Biweekly => "quincenal",
            Period::Monthly => "mensual",
            Period::Bimonthly => "bimestral",
            Period::Quarterly => "trimestral",
            Period::FourMonthly => "cuatrimestral",
            Period::Semiannual => "semestral",
            Period::Annual => "anual",
        }
    }

    /// Comma-separated list of accepted period names, used in error messages.
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a period string for the given input field.
    ///
    /// Matching is case-insensitive and accepts both the Spanish service
    /// vocabulary and the English names. The field name only feeds the error
    /// message, so callers can distinguish a bad `periodo` from a bad
    /// `capitalizacion`.
    pub fn parse(field: &str, raw: &str) -> CredisimResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "diaria" | "daily" => Ok(Period::Daily),
            "semanal" | "weekly" => Ok(Period::Weekly),
            "quincenal" | "biweekly" => Ok(Period::Biweekly),
            "mensual" | "monthly" => Ok(Period::Monthly),
            "bimestral" | "bimonthly" => Ok(Period::Bimonthly),
            "trimestral" | "quarterly" => Ok(Period::Quarterly),
            "cuatrimestral" | "four-monthly" => Ok(Period::FourMonthly),
            "semestral" | "semiannual" => Ok(Period::Semiannual),
            "anual" | "annual" => Ok(Period::Annual),
            _ => Err(CredisimError::invalid_period(field, raw)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CredisimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("periodo", s)
    }
}

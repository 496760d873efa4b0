//! Boundary types for the natural-language extraction service.
//!
//! The surrounding product sends a free-text loan description to a remote
//! extraction API and receives either the structured terms of the loan or a
//! flag plus a follow-up question when information is missing. This module
//! models that payload and turns it into validated parameter structs; the
//! HTTP call itself belongs to the caller.

use crate::CredisimResult;
use crate::errors::CredisimError;
use crate::params::{LoanTerms, RateSpec};
use crate::periods::Period;
use crate::rate_convert::RateKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Follow-up prompt used when the service flags missing fields but sends no
/// question of its own.
pub const DEFAULT_FOLLOW_UP: &str =
    "Por favor, especifica el monto, tasa, tipo de tasa y plazo.";

// ================================================
// RAW PAYLOAD TYPES
// ================================================

/// A numeric field as the service sends it: sometimes a JSON number,
/// sometimes a string (occasionally with es-ES grouping separators).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Parse as a plain finite number.
    pub fn parse(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => n.is_finite().then_some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Parse as a currency amount, stripping es-ES grouping separators
    /// ("2.000.000 COP" parses as 2000000).
    pub fn parse_amount(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => n.is_finite().then_some(*n),
            RawNumber::Text(s) => parse_es_amount(s),
        }
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{n}"),
            RawNumber::Text(s) => f.write_str(s),
        }
    }
}

/// The extraction-service response for one loan description.
///
/// Field names follow the service's JSON contract verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResponse {
    /// Set when the description was missing required information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faltantes: Option<bool>,

    /// Follow-up question to show the user in the incomplete case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregunta: Option<String>,

    /// Principal amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monto: Option<RawNumber>,

    /// Rate magnitude, percentage points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_tasa: Option<RawNumber>,

    /// Rate kind: `nominal` or `efectiva`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_tasa: Option<String>,

    /// Base period of the rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodo: Option<String>,

    /// Compounding period; defaults to `periodo` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalizacion: Option<String>,

    /// Loan term, in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plazo_unidad_de_tiempo: Option<RawNumber>,
}

impl ExtractionResponse {
    /// Parse a raw service payload.
    pub fn from_json(payload: &str) -> CredisimResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The follow-up question, when the service flagged missing fields.
    pub fn follow_up(&self) -> Option<&str> {
        if self.faltantes.unwrap_or(false) {
            Some(self.pregunta.as_deref().unwrap_or(DEFAULT_FOLLOW_UP))
        } else {
            None
        }
    }

    /// Build a validated [`RateSpec`] from the raw payload.
    ///
    /// Checks run in contract order: rate value first, then the base period,
    /// then the compounding period (default-filled from the base period when
    /// absent), then the rate kind. The sign of the value is checked by the
    /// normalizer itself.
    pub fn rate_spec(&self) -> CredisimResult<RateSpec> {
        let value = match &self.valor_tasa {
            Some(raw) => raw
                .parse()
                .ok_or_else(|| CredisimError::invalid_rate_value(raw.to_string()))?,
            None => return Err(CredisimError::invalid_rate_value("")),
        };

        let period = Period::parse("periodo", self.periodo.as_deref().unwrap_or(""))?;
        let capitalization = match self.capitalizacion.as_deref() {
            Some(raw) => Period::parse("capitalizacion", raw)?,
            None => period,
        };

        let kind = RateKind::parse(self.tipo_tasa.as_deref().unwrap_or(""))?;

        Ok(RateSpec::builder()
            .value(value)
            .kind(kind)
            .period(period)
            .capitalization(capitalization)
            .build())
    }

    /// Build [`LoanTerms`] from the raw payload and an already-normalized
    /// annual effective rate.
    pub fn loan_terms(&self, tea: f64) -> CredisimResult<LoanTerms> {
        let principal = self
            .monto
            .as_ref()
            .and_then(RawNumber::parse_amount)
            .ok_or_else(|| {
                CredisimError::invalid_loan_terms("monto", "must be a positive number")
            })?;
        let term_days = self
            .plazo_unidad_de_tiempo
            .as_ref()
            .and_then(RawNumber::parse)
            .ok_or_else(|| {
                CredisimError::invalid_loan_terms(
                    "plazo_unidad_de_tiempo",
                    "must be a positive number of days",
                )
            })?;

        let terms = LoanTerms::builder()
            .principal(principal)
            .term_days(term_days)
            .annual_effective_rate(tea)
            .build();
        terms.validate_all()?;
        Ok(terms)
    }
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

/// Strip currency noise and the `.` thousands separators of es-ES amounts
/// ("2.000.000 COP" becomes 2000000).
fn parse_es_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

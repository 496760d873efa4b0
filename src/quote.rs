//! The simulation pipeline: extraction payload in, displayable quote out.
//!
//! Each call produces a self-contained [`Quote`]; the rendering layer owns
//! whatever chart or section the result lands in. Nothing here keeps state
//! between invocations.

use crate::CredisimResult;
use crate::extract::ExtractionResponse;
use crate::interest::{InterestMethod, total_interest};
use crate::rate_convert::normalize;
use crate::share::SharedQuery;
use serde::Serialize;

/// Chart label for the principal slice.
pub const PRINCIPAL_LABEL: &str = "Monto Inicial";

/// Chart label for the interest slice.
pub const INTEREST_LABEL: &str = "Interés Calculado";

/// Data series for the principal-vs-interest chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Sum of the series values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// The result of one simulated credit.
#[derive(Debug, Clone)]
pub struct Quote {
    /// Principal amount, currency units.
    pub principal: f64,

    /// Annual effective rate, percentage points.
    pub tea: f64,

    /// Total interest under the selected strategy.
    pub total_interest: f64,

    /// The strategy that produced `total_interest`.
    pub method: InterestMethod,
}

impl Quote {
    /// TEA formatted to two decimals, e.g. `26.82%`.
    pub fn tea_display(&self) -> String {
        format!("{:.2}%", self.tea)
    }

    /// Total interest as a grouped integer amount, e.g. `1.338.380 COP`.
    pub fn interest_display(&self) -> String {
        format!("{} COP", format_grouped(self.total_interest))
    }

    /// Principal as a grouped integer amount, e.g. `2.000.000 COP`.
    pub fn principal_display(&self) -> String {
        format!("{} COP", format_grouped(self.principal))
    }

    /// Chart input: principal and interest slices.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: vec![PRINCIPAL_LABEL.into(), INTEREST_LABEL.into()],
            values: vec![self.principal, self.total_interest],
        }
    }
}

/// Outcome of running the pipeline over one extraction payload.
#[derive(Debug, Clone)]
pub enum Simulation {
    /// The payload was complete and produced a quote.
    Quote(Quote),

    /// The service needs more information; show this question to the user.
    FollowUp(String),
}

/// Run the full pipeline for one extraction payload.
///
/// Incomplete payloads short-circuit into [`Simulation::FollowUp`]; complete
/// payloads are normalized to a TEA and priced under the selected strategy.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// let response = ExtractionResponse::from_json(r#"{
///     "monto": 2000000,
///     "valor_tasa": 2,
///     "tipo_tasa": "efectiva",
///     "periodo": "mensual",
///     "plazo_unidad_de_tiempo": 1095
/// }"#)?;
/// match simulate(&response, InterestMethod::AmortizedInstallment)? {
///     Simulation::Quote(quote) => println!("{}", quote.interest_display()),
///     Simulation::FollowUp(question) => println!("{question}"),
/// }
/// # CredisimResult::Ok(())
/// ```
pub fn simulate(
    response: &ExtractionResponse,
    method: InterestMethod,
) -> CredisimResult<Simulation> {
    if let Some(question) = response.follow_up() {
        return Ok(Simulation::FollowUp(question.to_string()));
    }

    let spec = response.rate_spec()?;
    let tea = normalize(&spec)?;
    let terms = response.loan_terms(tea)?;
    let interest = total_interest()
        .principal(terms.principal)
        .term_days(terms.term_days)
        .tea(tea)
        .method(method)
        .validate(false)
        .call()?;

    Ok(Simulation::Quote(Quote {
        principal: terms.principal,
        tea,
        total_interest: interest,
        method,
    }))
}

/// Re-run the pipeline for a decoded shared query, as the shared page does.
pub fn simulate_shared(
    shared: &SharedQuery,
    method: InterestMethod,
) -> CredisimResult<Simulation> {
    let response: ExtractionResponse = serde_json::from_value(shared.raw_api_response.clone())?;
    simulate(&response, method)
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

/// Round to an integer and group digits with `.`, es-ES style.
fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if rounded < 0 { format!("-{out}") } else { out }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    fn complete_response() -> ExtractionResponse {
        ExtractionResponse::from_json(
            r#"{
                "monto": 2000000,
                "valor_tasa": 2,
                "tipo_tasa": "efectiva",
                "periodo": "mensual",
                "plazo_unidad_de_tiempo": 1095
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(950.0), "950");
        assert_eq!(format_grouped(2_000_000.0), "2.000.000");
        assert_eq!(format_grouped(1_338_379.99), "1.338.380");
        assert_eq!(format_grouped(-12_500.4), "-12.500");
    }

    #[test]
    fn test_simulate_amortized() {
        let simulation =
            simulate(&complete_response(), InterestMethod::AmortizedInstallment).unwrap();
        let quote = match simulation {
            Simulation::Quote(quote) => quote,
            Simulation::FollowUp(question) => panic!("unexpected follow-up: {question}"),
        };

        // effective 2% monthly => TEA 26.8242%
        assert_abs_diff_eq!(quote.tea, 26.824179456254548, epsilon = 1e-9);
        assert_eq!(quote.tea_display(), "26.82%");
        assert_eq!(quote.principal_display(), "2.000.000 COP");

        let series = quote.chart_series();
        assert_eq!(series.labels, vec![PRINCIPAL_LABEL, INTEREST_LABEL]);
        assert_eq!(series.values[0], 2_000_000.0);
        assert_abs_diff_eq!(series.total(), 2_000_000.0 + quote.total_interest, epsilon = 1e-6);
    }

    #[test]
    fn test_simulate_methods_differ() {
        let amortized =
            simulate(&complete_response(), InterestMethod::AmortizedInstallment).unwrap();
        let compound =
            simulate(&complete_response(), InterestMethod::ContinuousCompounding).unwrap();
        match (amortized, compound) {
            (Simulation::Quote(a), Simulation::Quote(c)) => {
                assert!(a.total_interest > 0.0);
                assert!(c.total_interest > 0.0);
                assert_abs_diff_eq!(a.tea, c.tea, epsilon = 1e-12);
                assert_ne!(a.total_interest, c.total_interest);
            }
            _ => panic!("expected quotes from a complete payload"),
        }
    }

    #[test]
    fn test_simulate_follow_up() {
        let response =
            ExtractionResponse::from_json(r#"{"faltantes": true, "pregunta": "¿Qué plazo?"}"#)
                .unwrap();
        match simulate(&response, InterestMethod::AmortizedInstallment).unwrap() {
            Simulation::FollowUp(question) => assert_eq!(question, "¿Qué plazo?"),
            Simulation::Quote(_) => panic!("expected a follow-up"),
        }
    }

    #[test]
    fn test_simulate_shared_recomputes() {
        let shared = SharedQuery {
            original_message: "Préstamo de 2 millones a 3 años al 2% mensual".into(),
            raw_api_response: json!({
                "monto": 2000000,
                "valor_tasa": 2,
                "tipo_tasa": "efectiva",
                "periodo": "mensual",
                "plazo_unidad_de_tiempo": 1095
            }),
        };
        match simulate_shared(&shared, InterestMethod::AmortizedInstallment).unwrap() {
            Simulation::Quote(quote) => {
                // TEA 26.8242% recovers the 2% monthly rate: 37 installments
                // of 77,013.56 on 2,000,000 leave 849,501.64 of interest
                assert_abs_diff_eq!(quote.total_interest, 849_501.6364035979, epsilon = 1e-4);
                assert_eq!(quote.interest_display(), "849.502 COP");
            }
            Simulation::FollowUp(question) => panic!("unexpected follow-up: {question}"),
        }
    }

    #[test]
    fn test_simulation_errors_pass_through() {
        let response = ExtractionResponse::from_json(
            r#"{"monto": 2000000, "valor_tasa": 2, "tipo_tasa": "efectiva", "periodo": "lunar", "plazo_unidad_de_tiempo": 360}"#,
        )
        .unwrap();
        let err = simulate(&response, InterestMethod::AmortizedInstallment).unwrap_err();
        assert!(matches!(err, crate::errors::CredisimError::InvalidPeriod { .. }));
    }
}

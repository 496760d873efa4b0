//! Shareable-state codec for simulated queries.
//!
//! A set of simulated credits can be shared as a link: the original messages
//! and raw service responses are serialized to JSON, base64-encoded and
//! embedded as a query parameter on the shared page. Decoding tolerates
//! malformed input and reports it as a typed error so the host page never
//! crashes on a bad link.

use crate::CredisimResult;
use crate::errors::CredisimError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameter carrying the encoded state.
pub const SHARE_QUERY_PARAM: &str = "data";

/// Path of the shared results page.
pub const SHARED_PAGE_PATH: &str = "/compartido.html";

/// One shared simulation: the user's message and the raw service response.
///
/// The raw response is kept verbatim so the shared page can re-run the
/// calculation instead of trusting pre-formatted results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedQuery {
    #[serde(rename = "originalMessage")]
    pub original_message: String,

    #[serde(rename = "rawApiResponse")]
    pub raw_api_response: Value,
}

/// Encode shared queries as a base64 query-parameter value.
///
/// # Example
/// ```rust
/// # use credisim::prelude::*;
/// # use serde_json::json;
/// let queries = vec![SharedQuery {
///     original_message: "Préstamo de 2 millones a 3 años".into(),
///     raw_api_response: json!({"monto": 2000000}),
/// }];
/// let encoded = encode_share_data(&queries)?;
/// let decoded = decode_share_data(&encoded)?;
/// assert_eq!(decoded.len(), 1);
/// # CredisimResult::Ok(())
/// ```
pub fn encode_share_data(queries: &[SharedQuery]) -> CredisimResult<String> {
    let json = serde_json::to_string(queries)?;
    Ok(STANDARD.encode(json))
}

/// Decode a base64 query-parameter value back into shared queries.
pub fn decode_share_data(param: &str) -> CredisimResult<Vec<SharedQuery>> {
    let bytes = STANDARD
        .decode(param.trim())
        .map_err(|e| CredisimError::share_decode(e.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|e| CredisimError::share_decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| CredisimError::share_format(e.to_string()))
}

/// Build the full shareable link for an origin like `https://example.com`.
pub fn share_link(origin: &str, queries: &[SharedQuery]) -> CredisimResult<String> {
    let encoded = encode_share_data(queries)?;
    Ok(format!(
        "{}{SHARED_PAGE_PATH}?{SHARE_QUERY_PARAM}={encoded}",
        origin.trim_end_matches('/')
    ))
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_queries() -> Vec<SharedQuery> {
        vec![
            SharedQuery {
                original_message: "Préstamo de 2 millones a 3 años al 2% mensual".into(),
                raw_api_response: json!({
                    "monto": 2000000,
                    "valor_tasa": 2,
                    "tipo_tasa": "efectiva",
                    "periodo": "mensual",
                    "plazo_unidad_de_tiempo": 1095
                }),
            },
            SharedQuery {
                original_message: "Crédito de 500 mil a un año".into(),
                raw_api_response: json!({"faltantes": true, "pregunta": "¿Qué tasa?"}),
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let queries = sample_queries();
        let encoded = encode_share_data(&queries).unwrap();
        let decoded = decode_share_data(&encoded).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].original_message, queries[0].original_message);
        assert_eq!(decoded[0].raw_api_response, queries[0].raw_api_response);
    }

    #[test]
    fn test_serialized_field_names_match_the_page_contract() {
        let encoded = encode_share_data(&sample_queries()).unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("originalMessage"));
        assert!(text.contains("rawApiResponse"));
    }

    #[test]
    fn test_share_link_shape() {
        let link = share_link("https://example.com/", &sample_queries()).unwrap();
        assert!(link.starts_with("https://example.com/compartido.html?data="));
    }

    #[test]
    fn test_bad_base64_is_a_typed_error() {
        let err = decode_share_data("%%% not base64 %%%").unwrap_err();
        assert!(matches!(err, CredisimError::ShareDecode { .. }));
    }

    #[test]
    fn test_bad_json_is_a_typed_error() {
        let encoded = STANDARD.encode("{\"this is\": \"not a query list\"}");
        let err = decode_share_data(&encoded).unwrap_err();
        assert!(matches!(err, CredisimError::ShareFormat { .. }));
    }

    #[test]
    fn test_empty_list_round_trips() {
        let encoded = encode_share_data(&[]).unwrap();
        let decoded = decode_share_data(&encoded).unwrap();
        assert!(decoded.is_empty());
    }
}

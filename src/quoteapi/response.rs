use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `GET /stock/{symbol}`.
///
/// `data` stays untyped here; `model::Quote` validates it. Object key order is
/// the payload's own order (serde_json `preserve_order`).
#[derive(Deserialize, Debug, Default)]
pub struct QuotePayload {
    #[serde(default, deserialize_with = "lenient_symbol")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

// Numeric tickers such as 5930 are shown as written; null means absent.
fn lenient_symbol<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(symbol) => Some(symbol),
        other => Some(other.to_string()),
    })
}

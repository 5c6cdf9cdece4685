use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{FetchError, FetchResult};

use super::form::Period;

/// One OHLC candle as returned by the price service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Milliseconds since the Unix epoch
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }

    /// Axis label for this candle (`YYYY-MM-DD`), empty if the timestamp is out of range.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.datetime()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Decoded body of a chart response.
///
/// Every successful body maps to exactly one payload; nothing is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ChartPayload {
    /// Price series, ready for a candlestick/bar renderer
    Candles(Vec<Candle>),
    /// Image source (data URI or URL)
    Image(String),
    /// Well-formed JSON that is not a clean candle series (e.g. gaps as `null`)
    Json(serde_json::Value),
    /// Anything else, shown verbatim
    Text(String),
}

impl ChartPayload {
    /// Decode a raw `/token_price` body.
    ///
    /// The price service returns its records as a JSON-encoded string, so the
    /// body is usually a quoted string whose content is itself JSON. That
    /// outer layer is unwrapped first. A JSON object carrying an `error` key
    /// is the service reporting failure with a 200 status; that is the only
    /// error this returns.
    pub fn decode(body: &str) -> FetchResult<Self> {
        let text = match body.trim() {
            quoted if quoted.starts_with('"') => {
                serde_json::from_str::<String>(quoted).unwrap_or_else(|_| body.to_string())
            }
            _ => body.to_string(),
        };
        let inner = text.trim();

        if inner.starts_with('[') || inner.starts_with('{') {
            if let Ok(candles) = serde_json::from_str::<Vec<Candle>>(inner) {
                return Ok(ChartPayload::Candles(candles));
            }
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(inner) {
                if let Some(err) = value.get("error") {
                    let message = err
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| err.to_string());
                    return Err(FetchError::Backend(message));
                }
                return Ok(ChartPayload::Json(value));
            }
        }

        if inner.starts_with("data:image/")
            || inner.starts_with("http://")
            || inner.starts_with("https://")
        {
            return Ok(ChartPayload::Image(inner.to_string()));
        }

        Ok(ChartPayload::Text(text))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ChartPayload::Candles(c) => c.is_empty(),
            ChartPayload::Json(v) => match v {
                serde_json::Value::Null => true,
                serde_json::Value::Array(a) => a.is_empty(),
                serde_json::Value::Object(o) => o.is_empty(),
                _ => false,
            },
            ChartPayload::Image(s) | ChartPayload::Text(s) => s.is_empty(),
        }
    }
}

/// One named series rendered under a tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub id: String,
    pub title: String,
    pub data: ChartPayload,
}

impl ChartRecord {
    /// Price chart for a symbol: id `"{SYMBOL}-price"`, title `"{SYMBOL} Price"`.
    pub fn for_symbol(symbol: &str, data: ChartPayload) -> Self {
        let symbol = symbol.trim();
        Self {
            id: format!("{symbol}-price"),
            title: format!("{symbol} Price"),
            data,
        }
    }
}

/// Parameters of one `/token_price` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartQuery {
    pub symbol: String,
    pub period: Period,
    pub limit: String,
}

impl ChartQuery {
    pub fn new(symbol: impl Into<String>, period: Period, limit: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            limit: limit.into(),
        }
    }
}

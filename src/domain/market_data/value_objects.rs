use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A price field as it arrives from the REST collaborator: JSON number or numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    /// Anything else (`null`, bool, object) - kept so ingestion can name the offending index.
    Other(serde_json::Value),
}

impl NumericInput {
    /// Finite value or `None`. Blank strings never become zero.
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            NumericInput::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    pub fn describe(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => format!("{:?}", s),
            NumericInput::Other(v) => v.to_string(),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Opaque candle time: epoch number or ISO string. Never used for x-positioning.
#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandleTimestamp {
    #[display(fmt = "{}", _0)]
    Epoch(f64),
    #[display(fmt = "{}", _0)]
    Iso(String),
}

impl Default for CandleTimestamp {
    fn default() -> Self {
        CandleTimestamp::Iso(String::new())
    }
}

impl From<u64> for CandleTimestamp {
    fn from(value: u64) -> Self {
        CandleTimestamp::Epoch(value as f64)
    }
}

impl From<&str> for CandleTimestamp {
    fn from(value: &str) -> Self {
        CandleTimestamp::Iso(value.to_string())
    }
}

/// Up / down / doji classification shared by candle bodies, the last-price line and the readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CandleDirection {
    Up,
    Down,
    Doji,
}

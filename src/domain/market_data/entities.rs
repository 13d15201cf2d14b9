pub use super::value_objects::{CandleDirection, CandleTimestamp, NumericInput};
use crate::domain::errors::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Candle shape accepted from the host: `{open, high, low, close, volume?, timestamp}`.
/// Unknown keys (vwap, transactions, otc) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    #[serde(default)]
    pub open: Option<NumericInput>,
    #[serde(default)]
    pub high: Option<NumericInput>,
    #[serde(default)]
    pub low: Option<NumericInput>,
    #[serde(default)]
    pub close: Option<NumericInput>,
    #[serde(default)]
    pub volume: Option<NumericInput>,
    #[serde(default)]
    pub timestamp: Option<CandleTimestamp>,
}

impl RawCandle {
    pub fn new(
        open: impl Into<NumericInput>,
        high: impl Into<NumericInput>,
        low: impl Into<NumericInput>,
        close: impl Into<NumericInput>,
        timestamp: impl Into<CandleTimestamp>,
    ) -> Self {
        Self {
            open: Some(open.into()),
            high: Some(high.into()),
            low: Some(low.into()),
            close: Some(close.into()),
            volume: None,
            timestamp: Some(timestamp.into()),
        }
    }

    /// Parse a JSON array of raw candles.
    pub fn parse_array(json: &str) -> ChartResult<Vec<RawCandle>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One immutable OHLC bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
    pub timestamp: CandleTimestamp,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, timestamp: impl Into<CandleTimestamp>) -> Self {
        Self { open, high, low, close, volume: None, timestamp: timestamp.into() }
    }

    pub fn from_raw(index: usize, raw: &RawCandle) -> ChartResult<Self> {
        let price = |field: &'static str, input: &Option<NumericInput>| -> ChartResult<f64> {
            match input {
                Some(value) => value.coerce().ok_or_else(|| ChartError::InvalidCandle {
                    index,
                    field,
                    value: value.describe(),
                }),
                None => Err(ChartError::InvalidCandle { index, field, value: "missing".to_string() }),
            }
        };

        Ok(Self {
            open: price("open", &raw.open)?,
            high: price("high", &raw.high)?,
            low: price("low", &raw.low)?,
            close: price("close", &raw.close)?,
            volume: raw.volume.as_ref().and_then(NumericInput::coerce),
            timestamp: raw.timestamp.clone().unwrap_or_default(),
        })
    }

    pub fn direction(&self) -> CandleDirection {
        if self.open == self.close {
            CandleDirection::Doji
        } else if self.close >= self.open {
            CandleDirection::Up
        } else {
            CandleDirection::Down
        }
    }

    pub fn is_doji(&self) -> bool {
        self.direction() == CandleDirection::Doji
    }
}

/// Chronological candles, index = x position. Replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    /// Coerce every raw entry; the first bad one aborts with its index.
    pub fn ingest(raw: &[RawCandle]) -> ChartResult<Self> {
        let candles = raw
            .iter()
            .enumerate()
            .map(|(index, candle)| Candle::from_raw(index, candle))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { candles })
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Sub-slice clamped to the series bounds.
    pub fn window(&self, range: Range<usize>) -> &[Candle] {
        let end = range.end.min(self.candles.len());
        let start = range.start.min(end);
        &self.candles[start..end]
    }

    /// `(low, high)` over the given window only, `None` if it is empty.
    pub fn price_range(&self, range: Range<usize>) -> Option<(f64, f64)> {
        let window = self.window(range);
        let first = window.first()?;
        Some(window.iter().fold((first.low, first.high), |(low, high), c| {
            (low.min(c.low), high.max(c.high))
        }))
    }
}

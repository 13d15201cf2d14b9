/// Engine error type.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A raw candle whose price field could not be coerced to a finite number.
    InvalidCandle {
        index: usize,
        field: &'static str,
        value: String,
    },
    /// Candle payload or options that are not shaped like the engine expects.
    MalformedInput(String),
    /// Drawing surface could not be obtained or used.
    SurfaceError(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::InvalidCandle { index, field, value } => write!(
                f,
                "Invalid candle at index {}: field '{}' is not numeric ({})",
                index, field, value
            ),
            ChartError::MalformedInput(msg) => write!(f, "Malformed Input: {}", msg),
            ChartError::SurfaceError(msg) => write!(f, "Surface Error: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::MalformedInput(err.to_string())
    }
}

impl From<ChartError> for wasm_bindgen::JsValue {
    fn from(err: ChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartError>;

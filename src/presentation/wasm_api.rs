use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::chart_host::ChartHost;
use crate::domain::{
    chart::InitOptions,
    errors::{ChartError, ChartResult},
    market_data::RawCandle,
};

/// JS-facing chart handle. One instance per canvas.
///
/// ```js
/// const chart = new CandleChart();
/// chart.initialize(canvas, candles, { interactive: true });
/// chart.setCandles(moreCandles);
/// chart.dispose();
/// ```
#[wasm_bindgen]
pub struct CandleChart {
    host: ChartHost,
}

#[wasm_bindgen]
impl CandleChart {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { host: ChartHost::new() }
    }

    /// Returns the resulting state: `"Idle"`, `"Preview"` or `"Interactive"`.
    pub fn initialize(
        &mut self,
        canvas: HtmlCanvasElement,
        candles: JsValue,
        options: JsValue,
    ) -> Result<String, JsValue> {
        let raw = parse_candles(&candles)?;
        let options = InitOptions::from_json(&to_json(&options)?)?;
        let state = self.host.initialize(canvas, &raw, options)?;
        Ok(state.to_string())
    }

    #[wasm_bindgen(js_name = setCandles)]
    pub fn set_candles(&mut self, candles: JsValue) -> Result<(), JsValue> {
        let raw = parse_candles(&candles)?;
        self.host.set_candles(&raw)?;
        Ok(())
    }

    pub fn reset(&self) {
        self.with_engine(|engine| engine.reset());
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.with_engine(|engine| engine.zoom_in());
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.with_engine(|engine| engine.zoom_out());
    }

    #[wasm_bindgen(js_name = fitToView)]
    pub fn fit_to_view(&self) {
        self.with_engine(|engine| engine.fit_to_view());
    }

    #[wasm_bindgen(getter, js_name = candleWidth)]
    pub fn candle_width(&self) -> f64 {
        self.host.engine().borrow().camera().candle_width
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.host.engine().borrow().state().to_string()
    }

    pub fn dispose(&mut self) {
        self.host.dispose();
    }
}

impl Default for CandleChart {
    fn default() -> Self {
        Self::new()
    }
}

impl CandleChart {
    fn with_engine(&self, f: impl FnOnce(&mut crate::application::ChartEngine)) {
        if let Ok(mut engine) = self.host.engine().try_borrow_mut() {
            f(&mut engine);
        }
    }
}

fn to_json(value: &JsValue) -> ChartResult<String> {
    if value.is_undefined() || value.is_null() {
        return Ok("null".to_string());
    }
    js_sys::JSON::stringify(value)
        .map(String::from)
        .map_err(|_| ChartError::MalformedInput("value is not JSON-serializable".to_string()))
}

fn parse_candles(value: &JsValue) -> ChartResult<Vec<RawCandle>> {
    let json = to_json(value)?;
    if json == "null" {
        return Ok(Vec::new());
    }
    RawCandle::parse_array(&json)
}

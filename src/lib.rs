use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{ChartEngine, EngineState};
pub use domain::chart::{ChartMode, EngineConfig, InitOptions};
pub use domain::errors::{ChartError, ChartResult};
pub use domain::market_data::{Candle, CandleSeries, RawCandle};
pub use presentation::{CandleChart, CandleChartCard, ChartHost};

/// Module start: panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "candle chart module loaded");
}

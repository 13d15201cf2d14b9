pub mod chart_host;
pub mod components;
pub mod wasm_api;

pub use chart_host::ChartHost;
pub use components::CandleChartCard;
pub use wasm_api::CandleChart;

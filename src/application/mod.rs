//! Application layer: the per-chart engine and the input state machine driving it.

pub mod engine;
pub mod interaction;
pub mod listeners;

pub use engine::{ChartEngine, EngineState};
pub use interaction::InteractionController;
pub use listeners::ListenerGuard;

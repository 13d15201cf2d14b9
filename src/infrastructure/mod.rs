pub mod dom_events;
pub mod rendering;
pub mod services;

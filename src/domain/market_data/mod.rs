//! Candle model: raw input coercion and the immutable series.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;

//! Chart aggregate: camera, price scale, overlay controls and input latch.

pub mod camera;
pub mod config;
pub mod controls;
pub mod input;
pub mod scale;
pub mod value_objects;

pub use camera::*;
pub use config::*;
pub use controls::*;
pub use input::*;
pub use scale::*;
pub use value_objects::*;

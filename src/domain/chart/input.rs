use std::collections::HashSet;
use strum::{AsRefStr, EnumString};

use super::value_objects::Point;

/// Keys the chart reacts to, parsed from `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Shift,
    #[strum(serialize = "=")]
    ZoomIn,
    #[strum(serialize = "-")]
    ZoomOut,
    /// Shifted `=`: narrows the price range.
    #[strum(serialize = "+")]
    ScaleDown,
    /// Shifted `-`: widens the price range.
    #[strum(serialize = "_")]
    ScaleUp,
}

/// Raw input accumulated between two ticks.
///
/// Event handlers only write here; the tick reads it and calls [`InputLatch::end_frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputLatch {
    pub pointer: Point,
    pub previous: Point,
    pub primary_down: bool,
    /// Primary button went down since the last frame.
    pub pressed: bool,
    /// Primary button went up since the last frame.
    pub released: bool,
    pub wheel_delta: f64,
    /// A keydown event arrived since the last frame.
    pub key_event: bool,
    held: HashSet<Key>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, p: Point) {
        self.pointer = p;
    }

    pub fn pointer_down(&mut self, p: Point) {
        self.pointer = p;
        self.primary_down = true;
        self.pressed = true;
    }

    pub fn pointer_up(&mut self, p: Point) {
        self.pointer = p;
        self.primary_down = false;
        self.released = true;
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.wheel_delta = delta_y;
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
        self.key_event = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn pointer_delta(&self) -> Point {
        Point::new(self.pointer.x - self.previous.x, self.pointer.y - self.previous.y)
    }

    /// Snapshot the pointer and drop per-frame latches. Held keys and button state survive.
    pub fn end_frame(&mut self) {
        self.previous = self.pointer;
        self.pressed = false;
        self.released = false;
        self.key_event = false;
        self.wheel_delta = 0.0;
    }
}

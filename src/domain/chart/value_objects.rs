use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - how the host wants the chart driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartMode {
    /// Single update + render, no listeners, no timer.
    #[display(fmt = "preview")]
    #[strum(serialize = "preview")]
    Preview,
    #[display(fmt = "interactive")]
    #[strum(serialize = "interactive")]
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { a: alpha, ..*self }
    }

    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Chart colours. Bodies and UI text use different greens/reds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub wick: Color,
    pub candle_up: Color,
    pub candle_down: Color,
    pub text_up: Color,
    pub text_down: Color,
    pub text_neutral: Color,
    pub crosshair: Color,
    pub readout_background: Color,
    pub label_background: Color,
    pub label_text: Color,
    pub control: Color,
    pub control_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x101829),
            grid: Color::from_hex(0x37474F),
            wick: Color::from_hex(0xEEEEEE),
            candle_up: Color::from_hex(0x388E3C),
            candle_down: Color::from_hex(0xD32F2F),
            text_up: Color::from_hex(0x2BD56A),
            text_down: Color::from_hex(0xFF3E51),
            text_neutral: Color::WHITE,
            crosshair: Color::WHITE,
            readout_background: Color::rgb(25, 25, 25).with_alpha(0.6),
            label_background: Color::WHITE,
            label_text: Color::BLACK,
            control: Color::WHITE,
            control_text: Color::BLACK,
        }
    }
}

use serde::Serialize;
use strum::AsRefStr;

use crate::domain::chart::{Color, Point, Rect, Size};

/// CSS cursor the chart asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CursorStyle {
    Crosshair,
    Grab,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// `[dash, gap]` in pixels; solid when `None`.
    pub dash: Option<[f64; 2]>,
}

impl LineStyle {
    pub fn dashed(color: Color, dash: f64, gap: f64) -> Self {
        Self { color, width: 1.0, dash: Some([dash, gap]) }
    }
}

/// The 2D drawing primitives the renderer needs. Implemented by the canvas
/// context in the browser and by [`RecordingSurface`] in tests.
pub trait DrawSurface {
    fn size(&self) -> Size;
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_round_rect(&mut self, rect: Rect, radii: [f64; 4], color: Color);
    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle);
    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: Color);
    fn measure_text(&mut self, text: &str, font: &str) -> f64;
    fn set_cursor(&mut self, cursor: CursorStyle);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillRoundRect { rect: Rect, radii: [f64; 4], color: Color },
    StrokeLine { from: Point, to: Point, style: LineStyle },
    FillText { text: String, at: Point, font: String, color: Color },
    SetCursor { cursor: CursorStyle },
}

/// Headless surface that keeps every call, for tests and snapshotting.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
    pub cursor: Option<CursorStyle>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height), ..Default::default() }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &LineStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeLine { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: Rect, radii: [f64; 4], color: Color) {
        self.commands.push(DrawCommand::FillRoundRect { rect, radii, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle) {
        self.commands.push(DrawCommand::StrokeLine { from, to, style });
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font: font.to_string(),
            color,
        });
    }

    /// Monospace approximation: 0.6 em per character.
    fn measure_text(&mut self, text: &str, font: &str) -> f64 {
        let px = font
            .split_whitespace()
            .find_map(|part| part.strip_suffix("px")?.parse::<f64>().ok())
            .unwrap_or(16.0);
        text.chars().count() as f64 * px * 0.6
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = Some(cursor);
        self.commands.push(DrawCommand::SetCursor { cursor });
    }
}

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{Color, Point, Rect, Size},
    errors::{ChartError, ChartResult},
    logging::LogComponent,
};
use crate::log_warn;

use super::surface::{CursorStyle, DrawSurface, LineStyle};

/// Canvas 2D backend for [`DrawSurface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: Size,
}

impl CanvasSurface {
    /// Fails when the element cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> ChartResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| ChartError::SurfaceError("getContext('2d') threw".to_string()))?
            .ok_or_else(|| ChartError::SurfaceError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::SurfaceError("Failed to cast to 2D context".to_string()))?;

        Ok(Self { canvas, context, size: Size::default() })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's bounding box.
    /// A zero-sized element takes `fallback` when given, otherwise keeps zero (nothing drawn).
    pub fn sync_size(&mut self, fallback: Option<Size>) -> Size {
        let rect = self.canvas.get_bounding_client_rect();
        let mut size = Size::new(rect.width(), rect.height());
        if size.is_empty() {
            if let Some(fallback) = fallback {
                size = fallback;
            }
        }
        if size != self.size {
            self.canvas.set_width(size.width.max(0.0) as u32);
            self.canvas.set_height(size.height.max(0.0) as u32);
            self.size = size;
        }
        size
    }

    fn trace_round_rect(&self, rect: Rect, radii: [f64; 4]) {
        let [tl, tr, br, bl] = radii.map(|r| r.min(rect.w.abs() / 2.0).min(rect.h.abs() / 2.0).max(0.0));
        let ctx = &self.context;
        ctx.begin_path();
        ctx.move_to(rect.x + tl, rect.y);
        ctx.line_to(rect.right() - tr, rect.y);
        let _ = ctx.arc_to(rect.right(), rect.y, rect.right(), rect.y + tr, tr);
        ctx.line_to(rect.right(), rect.bottom() - br);
        let _ = ctx.arc_to(rect.right(), rect.bottom(), rect.right() - br, rect.bottom(), br);
        ctx.line_to(rect.x + bl, rect.bottom());
        let _ = ctx.arc_to(rect.x, rect.bottom(), rect.x, rect.bottom() - bl, bl);
        ctx.line_to(rect.x, rect.y + tl);
        let _ = ctx.arc_to(rect.x, rect.y, rect.x + tl, rect.y, tl);
        ctx.close_path();
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_round_rect(&mut self, rect: Rect, radii: [f64; 4], color: Color) {
        self.context.set_fill_style_str(&color.to_css());
        self.trace_round_rect(rect, radii);
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle) {
        let ctx = &self.context;
        let dash = Array::new();
        if let Some([on, off]) = style.dash {
            dash.push(&JsValue::from_f64(on));
            dash.push(&JsValue::from_f64(off));
        }
        let _ = ctx.set_line_dash(&dash);
        ctx.set_stroke_style_str(&style.color.to_css());
        ctx.set_line_width(style.width);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: Color) {
        self.context.set_font(font);
        self.context.set_fill_style_str(&color.to_css());
        if self.context.fill_text(text, at.x, at.y).is_err() {
            log_warn!(LogComponent::Infrastructure("CanvasSurface"), "fillText failed for {:?}", text);
        }
    }

    fn measure_text(&mut self, text: &str, font: &str) -> f64 {
        self.context.set_font(font);
        self.context.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        let _ = self.canvas.style().set_property("cursor", cursor.as_ref());
    }
}

use crate::domain::chart::{
    Camera, Color, ControlKind, ControlPanel, EngineConfig, Palette, Point, PriceScale, Rect, VisibleWindow,
};
use crate::domain::market_data::{Candle, CandleDirection, CandleSeries};

use super::surface::{CursorStyle, DrawSurface, LineStyle};

pub const LABEL_FONT: &str = "16px Arial";
pub const CONTROL_FONT: &str = "17px monospace";
const CONTROL_TEXT_HEIGHT: f64 = 17.0;
const WICK_WIDTH: f64 = 1.0;
const READOUT_ORIGIN: Point = Point::new(20.0, 32.0);
const READOUT_BASELINE: f64 = 50.0;
const LABEL_HEIGHT: f64 = 25.0;

/// Everything one frame is drawn from.
pub struct RenderInput<'a> {
    pub series: &'a CandleSeries,
    pub camera: &'a Camera,
    pub controls: &'a ControlPanel,
    pub pointer: Point,
    pub dragging: bool,
    /// Crosshair, readouts and controls. Off for static previews.
    pub overlay: bool,
    /// Readout falls back to this candle when the pointer is between columns.
    pub last_hovered: Option<usize>,
    pub palette: &'a Palette,
    pub config: &'a EngineConfig,
}

/// What a render pass decided, for the engine and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    pub drawn: bool,
    pub window: Option<VisibleWindow>,
    /// `(low, high)` of the visible slice.
    pub price_range: Option<(f64, f64)>,
    pub scale: Option<PriceScale>,
    pub hovered: Option<usize>,
    pub price_at_pointer: Option<f64>,
}

/// Colour-coded `O: .. H: .. L: .. C: ..` segments.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcReadout {
    pub segments: Vec<(String, Color)>,
}

impl OhlcReadout {
    pub fn for_candle(candle: &Candle, palette: &Palette) -> Self {
        let value_color = match candle.direction() {
            CandleDirection::Up => palette.text_up,
            CandleDirection::Down => palette.text_down,
            CandleDirection::Doji => palette.text_neutral,
        };
        let fields = [("O: ", candle.open), (" H: ", candle.high), (" L: ", candle.low), (" C: ", candle.close)];
        let segments = fields
            .iter()
            .flat_map(|(label, value)| {
                [(label.to_string(), palette.text_neutral), (format!("{:.2}", value), value_color)]
            })
            .collect();
        Self { segments }
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|(s, _)| s.as_str()).collect()
    }
}

pub fn body_color(candle: &Candle, palette: &Palette) -> Color {
    match candle.direction() {
        CandleDirection::Up => palette.candle_up,
        CandleDirection::Down => palette.candle_down,
        CandleDirection::Doji => palette.wick,
    }
}

/// Draw one frame. An empty visible slice draws nothing.
pub fn render_frame<S: DrawSurface + ?Sized>(surface: &mut S, frame: &RenderInput) -> FrameReport {
    let camera = frame.camera;
    let view = camera.view();
    let window = camera.visible_window();
    let Some((low, high)) = frame.series.price_range(window.start..window.end) else {
        return FrameReport { window: Some(window), ..FrameReport::default() };
    };
    if view.is_empty() {
        return FrameReport { window: Some(window), ..FrameReport::default() };
    }

    let scale = PriceScale::new(
        low,
        high,
        camera.user_scale_y,
        view.height,
        frame.config.margin_ratio,
        camera.camera_y,
    );

    draw_background(surface, frame);
    draw_last_price_line(surface, frame, &scale);
    let (hovered, hover_line_x) = draw_candles(surface, frame, &window, &scale);

    let mut report = FrameReport {
        drawn: true,
        window: Some(window),
        price_range: Some((low, high)),
        scale: Some(scale),
        hovered,
        price_at_pointer: None,
    };

    if !frame.overlay {
        return report;
    }

    if let Some(x) = hover_line_x {
        let style = LineStyle::dashed(frame.palette.crosshair, 4.0, 3.0);
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, view.height), style);
    }
    report.price_at_pointer = Some(draw_pointer_price(surface, frame, &scale));
    if let Some(candle) = hovered.or(frame.last_hovered).and_then(|i| frame.series.get(i)) {
        draw_readout(surface, &OhlcReadout::for_candle(candle, frame.palette), frame.palette);
    }
    draw_controls(surface, frame);

    let cursor = if frame.controls.is_over_any(frame.pointer) {
        CursorStyle::Pointer
    } else if frame.dragging {
        CursorStyle::Grab
    } else {
        CursorStyle::Crosshair
    };
    surface.set_cursor(cursor);

    report
}

fn draw_background<S: DrawSurface + ?Sized>(surface: &mut S, frame: &RenderInput) {
    let view = frame.camera.view();
    surface.fill_rect(Rect::new(0.0, 0.0, view.width, view.height), frame.palette.background);

    let pitch = frame.config.grid_pitch.max(1.0);
    let style = LineStyle::dashed(frame.palette.grid, 4.0, 3.0);
    let mut x = 0.0;
    while x < view.width {
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, view.height), style);
        x += pitch;
    }
    let mut y = 0.0;
    while y < view.height {
        surface.stroke_line(Point::new(0.0, y), Point::new(view.width, y), style);
        y += pitch;
    }
}

fn draw_last_price_line<S: DrawSurface + ?Sized>(surface: &mut S, frame: &RenderInput, scale: &PriceScale) {
    let Some(last) = frame.series.last() else {
        return;
    };
    let y = scale.price_to_y(last.close);
    let width = frame.camera.view().width;
    let style = LineStyle::dashed(body_color(last, frame.palette), 4.0, 3.0);
    surface.stroke_line(Point::new(0.0, y), Point::new(width, y), style);
}

/// Wicks and bodies; returns the hovered index and the x of its crosshair line.
fn draw_candles<S: DrawSurface + ?Sized>(
    surface: &mut S,
    frame: &RenderInput,
    window: &VisibleWindow,
    scale: &PriceScale,
) -> (Option<usize>, Option<f64>) {
    let camera = frame.camera;
    let width = camera.candle_width;
    let spacing = camera.candle_spacing();
    let scroll = (camera.camera_x - window.start as f64) * spacing;
    let pointer_x = frame.pointer.x;

    let mut hovered = None;
    for (i, candle) in frame.series.window(window.start..window.end).iter().enumerate() {
        let column_x = i as f64 * spacing - scroll;
        let body_x = column_x + width / 4.0;

        let high_y = scale.price_to_y(candle.high);
        let low_y = scale.price_to_y(candle.low);
        surface.fill_rect(
            Rect::new(body_x + (width / 2.0).floor(), high_y, WICK_WIDTH, low_y - high_y),
            frame.palette.wick,
        );

        let open_y = scale.price_to_y(candle.open);
        let mut close_y = scale.price_to_y(candle.close);
        if candle.is_doji() {
            close_y += 1.0;
        }
        let top = open_y.min(close_y);
        surface.fill_rect(
            Rect::new(body_x, top, width, (close_y - open_y).abs()),
            body_color(candle, frame.palette),
        );

        if pointer_x > column_x && pointer_x <= column_x + spacing {
            hovered = Some((window.start + i, column_x + width / 4.0 + width / 2.0));
        }
    }
    (hovered.map(|(i, _)| i), hovered.map(|(_, x)| x))
}

/// Horizontal crosshair plus the price label on the right edge. Returns the price shown.
fn draw_pointer_price<S: DrawSurface + ?Sized>(surface: &mut S, frame: &RenderInput, scale: &PriceScale) -> f64 {
    let view = frame.camera.view();
    let y = frame.pointer.y;
    surface.stroke_line(
        Point::new(0.0, y + 0.5),
        Point::new(view.width, y + 0.5),
        LineStyle::dashed(frame.palette.crosshair, 4.0, 3.0),
    );

    let price = scale.y_to_price(y);
    let label = format!("{:.2}", price);
    let text_width = surface.measure_text(&label, LABEL_FONT);
    surface.fill_round_rect(
        Rect::new(view.width - text_width - 10.0, y, text_width + 10.0, LABEL_HEIGHT),
        [0.0, 0.0, 0.0, 10.0],
        frame.palette.label_background,
    );
    surface.fill_text(
        &label,
        Point::new(view.width - text_width - 5.0, y + 17.0),
        LABEL_FONT,
        frame.palette.label_text,
    );
    price
}

fn draw_readout<S: DrawSurface + ?Sized>(surface: &mut S, readout: &OhlcReadout, palette: &Palette) {
    let total = surface.measure_text(&readout.text(), LABEL_FONT);
    surface.fill_round_rect(
        Rect::new(READOUT_ORIGIN.x, READOUT_ORIGIN.y, total + 10.0, LABEL_HEIGHT),
        [5.0; 4],
        palette.readout_background,
    );

    let mut cursor = READOUT_ORIGIN.x + 5.0;
    for (text, color) in &readout.segments {
        surface.fill_text(text, Point::new(cursor, READOUT_BASELINE), LABEL_FONT, *color);
        cursor += surface.measure_text(text, LABEL_FONT);
    }
}

fn draw_controls<S: DrawSurface + ?Sized>(surface: &mut S, frame: &RenderInput) {
    let palette = frame.palette;
    let fill = palette.control.with_alpha(frame.controls.alpha());
    for control in frame.controls.controls() {
        let rect = control.rect;
        surface.fill_round_rect(rect, control.kind.radii(), fill);

        let label = control.kind.label();
        let text_width = surface.measure_text(label, CONTROL_FONT);
        surface.fill_text(
            label,
            Point::new(rect.x + rect.w / 2.0 - text_width / 2.0, rect.y + rect.h / 2.0 + CONTROL_TEXT_HEIGHT / 3.0),
            CONTROL_FONT,
            palette.control_text,
        );
    }

    // dividers inside the +/- and ❬/❭ pairs
    for kind in [ControlKind::ZoomOut, ControlKind::PanRight] {
        if let Some(control) = frame.controls.get(kind) {
            surface.fill_rect(Rect::new(control.rect.x, control.rect.y, 1.0, control.rect.h), palette.control_text);
        }
    }
}

use super::config::EngineConfig;
use super::value_objects::Size;

/// Body width to left-edge distance ratio: a gap of half a body between candles.
pub const SPACING_RATIO: f64 = 1.5;

pub fn spacing_for(candle_width: f64) -> f64 {
    candle_width * SPACING_RATIO
}

/// Candle indices drawn this frame: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    pub start: usize,
    pub end: usize,
    /// Right edge before clamping to the series length, in candles.
    pub end_unclamped: f64,
}

impl VisibleWindow {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Viewport/camera: maps candle index and price space onto the surface.
///
/// `camera_x` is a fractional candle index at the left edge, `camera_y` a pixel
/// offset applied to every price, `candle_width` the zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub camera_x: f64,
    pub camera_y: f64,
    pub candle_width: f64,
    pub user_scale_y: f64,
    view: Size,
    series_len: usize,
    min_width: f64,
    max_width: f64,
    default_width: f64,
    zoom_factor: f64,
    wheel_divisor: f64,
    min_user_scale_y: f64,
}

impl Camera {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            camera_x: 0.0,
            camera_y: 0.0,
            candle_width: config.default_candle_width,
            user_scale_y: 0.0,
            view: Size::default(),
            series_len: 0,
            min_width: config.min_candle_width,
            max_width: config.max_candle_width,
            default_width: config.default_candle_width,
            zoom_factor: config.button_zoom_factor,
            wheel_divisor: config.wheel_zoom_divisor,
            min_user_scale_y: config.min_user_scale_y,
        }
    }

    pub fn view(&self) -> Size {
        self.view
    }

    pub fn set_view(&mut self, view: Size) {
        self.view = view;
    }

    pub fn series_len(&self) -> usize {
        self.series_len
    }

    pub fn set_series_len(&mut self, len: usize) {
        self.series_len = len;
    }

    pub fn candle_spacing(&self) -> f64 {
        spacing_for(self.candle_width)
    }

    /// How many candle columns fit across the surface.
    pub fn candles_per_view(&self) -> f64 {
        self.view.width / self.candle_spacing()
    }

    /// Fractional candle index under the given surface x.
    pub fn index_at(&self, x: f64) -> f64 {
        self.camera_x + x / self.candle_spacing()
    }

    pub fn center_index(&self) -> f64 {
        self.index_at(self.view.width / 2.0)
    }

    /// Default zoom, no vertical pan or stretch, newest candle flush right.
    pub fn reset(&mut self) {
        self.user_scale_y = 0.0;
        self.camera_y = 0.0;
        self.candle_width = self.clamp_width(self.default_width);
        self.camera_x = (self.series_len as f64 - self.candles_per_view()).max(0.0);
        self.clamp();
    }

    /// Width that fits `fill_ratio` of the surface with every candle, camera at the first candle.
    pub fn fit_all(&mut self, fill_ratio: f64) {
        if self.series_len > 0 && self.view.width > 0.0 {
            let target = self.view.width * fill_ratio / (self.series_len as f64 * SPACING_RATIO);
            self.candle_width = self.clamp_width(target.max(self.min_width));
        }
        self.camera_x = 0.0;
        self.clamp();
    }

    pub fn zoom_in(&mut self) {
        let step = (self.candle_width + 1.0).ln() * self.zoom_factor;
        let center = self.view.width / 2.0;
        self.zoom_to(self.candle_width + step, center);
    }

    /// Inverse of [`Camera::zoom_in`]: lands on the width whose zoom-in step reaches the current one.
    pub fn zoom_out(&mut self) {
        let target = self.zoom_out_width(self.candle_width);
        let center = self.view.width / 2.0;
        self.zoom_to(target, center);
    }

    /// Wheel zoom around a surface x. Negative delta (scroll up) zooms in.
    pub fn wheel_zoom(&mut self, delta: f64, focus_x: f64) {
        if delta == 0.0 {
            return;
        }
        let step = (self.candle_width + 1.0).ln() / self.wheel_divisor;
        let signed = if delta > 0.0 { -step } else { step };
        self.zoom_to(self.candle_width + signed, focus_x);
    }

    /// Zoom out until the width drops below `threshold`.
    pub fn fit_to_view(&mut self, threshold: f64) {
        while self.candle_width >= threshold {
            let before = self.candle_width;
            self.zoom_out();
            if self.candle_width >= before {
                break;
            }
        }
    }

    /// Resize candles keeping the candle under `focus_x` in place.
    pub fn zoom_to(&mut self, width: f64, focus_x: f64) {
        let focus_index = self.index_at(focus_x);
        self.candle_width = self.clamp_width(width);
        self.camera_x = focus_index - focus_x / self.candle_spacing();
        self.clamp();
    }

    pub fn pan_by(&mut self, delta_candles: f64) {
        self.camera_x += delta_candles;
        self.clamp();
    }

    pub fn pan_vertical(&mut self, delta_pixels: f64) {
        self.camera_y += delta_pixels;
    }

    pub fn adjust_scale(&mut self, delta: f64) {
        self.user_scale_y = (self.user_scale_y + delta).max(self.min_user_scale_y);
    }

    pub fn clamp(&mut self) {
        self.candle_width = self.clamp_width(self.candle_width);
        self.user_scale_y = self.user_scale_y.max(self.min_user_scale_y);
        let max_x = self.series_len.saturating_sub(1) as f64;
        if !self.camera_x.is_finite() {
            self.camera_x = 0.0;
        }
        self.camera_x = self.camera_x.clamp(0.0, max_x);
    }

    pub fn visible_window(&self) -> VisibleWindow {
        let end_unclamped = self.candles_per_view() + self.camera_x + 1.0;
        let end = (end_unclamped.max(0.0).floor() as usize).min(self.series_len);
        let start = (self.camera_x.max(0.0).floor() as usize).min(end);
        VisibleWindow { start, end, end_unclamped }
    }

    /// True while the candle at `len - 1` starts on screen, i.e. a series of
    /// `len` candles has its right edge in view.
    pub fn shows_right_edge_of(&self, len: usize) -> bool {
        len > 0 && (len as f64) <= self.visible_window().end_unclamped
    }

    fn clamp_width(&self, width: f64) -> f64 {
        if width.is_nan() {
            return self.min_width;
        }
        width.clamp(self.min_width, self.max_width)
    }

    /// Solves `w + k·ln(w + 1) = current` with Newton steps from below.
    fn zoom_out_width(&self, current: f64) -> f64 {
        let k = self.zoom_factor;
        let mut w = (current - (current + 1.0).ln() * k).max(0.0);
        for _ in 0..32 {
            let g = w + (w + 1.0).ln() * k - current;
            let dg = 1.0 + k / (w + 1.0);
            let next = w - g / dg;
            if (next - w).abs() < 1e-12 {
                w = next;
                break;
            }
            w = next;
        }
        w
    }
}

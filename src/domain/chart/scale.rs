/// Vertical price↔pixel transform for one frame.
///
/// `y(p) = (H - m) - (p - low) * scale_y + camera_y` with `m = margin_ratio * H`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub low: f64,
    pub high: f64,
    pub scale_y: f64,
    bottom: f64,
    camera_y: f64,
}

impl PriceScale {
    pub fn new(low: f64, high: f64, user_scale_y: f64, height: f64, margin_ratio: f64, camera_y: f64) -> Self {
        let margin = height * margin_ratio;
        let range = if high > low { high - low } else { 1.0 };
        // user stretch may not collapse or invert the axis
        let mut denominator = range + user_scale_y;
        if denominator <= 0.0 || !denominator.is_finite() {
            denominator = range;
        }
        Self {
            low,
            high,
            scale_y: (height - margin * 2.0) / denominator,
            bottom: height - margin,
            camera_y,
        }
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        self.bottom - (price - self.low) * self.scale_y + self.camera_y
    }

    pub fn y_to_price(&self, y: f64) -> f64 {
        if self.scale_y == 0.0 {
            return self.low;
        }
        self.low + (self.bottom - (y - self.camera_y)) / self.scale_y
    }
}

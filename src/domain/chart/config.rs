use serde::Deserialize;

use super::value_objects::{ChartMode, Size};
use crate::domain::errors::{ChartError, ChartResult};

/// Every tuning constant of the engine. Missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub min_candle_width: f64,
    pub max_candle_width: f64,
    pub default_candle_width: f64,
    /// Fit-to-view keeps zooming out while the width is at least this.
    pub fit_candle_width: f64,
    /// Button/key zoom step is `ln(w + 1) * button_zoom_factor`.
    pub button_zoom_factor: f64,
    /// Wheel zoom step is `ln(w + 1) / wheel_zoom_divisor`.
    pub wheel_zoom_divisor: f64,
    pub scroll_friction: f64,
    pub drag_lock_threshold: f64,
    pub fps: u32,
    pub margin_ratio: f64,
    pub grid_pitch: f64,
    pub preview_fill_ratio: f64,
    pub scale_step: f64,
    pub min_user_scale_y: f64,
    pub shift_multiplier: f64,
    /// Fraction of the visible candle count scrolled per frame while a pan button is held.
    pub pan_button_rate: f64,
    pub control_size: (f64, f64),
    pub control_expanded_size: (f64, f64),
    pub control_easing: f64,
    pub fallback_size: (f64, f64),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_candle_width: 1.0,
            max_candle_width: 80.0,
            default_candle_width: 5.0,
            fit_candle_width: 3.0,
            button_zoom_factor: 2.0,
            wheel_zoom_divisor: 7.0,
            scroll_friction: 0.98,
            drag_lock_threshold: 150.0,
            fps: 60,
            margin_ratio: 0.05,
            grid_pitch: 30.0,
            preview_fill_ratio: 0.8,
            scale_step: 0.05,
            min_user_scale_y: -0.25,
            shift_multiplier: 5.0,
            pan_button_rate: 0.005,
            control_size: (30.0, 20.0),
            control_expanded_size: (35.0, 25.0),
            control_easing: 0.2,
            fallback_size: (800.0, 600.0),
        }
    }
}

impl EngineConfig {
    /// Timer period for the interactive loop, never zero.
    pub fn frame_period_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }

    pub fn fallback_size(&self) -> Size {
        Size::new(self.fallback_size.0, self.fallback_size.1)
    }

    /// Reject settings the camera and renderer cannot work with. NaN fails every check.
    pub fn validate(&self) -> ChartResult<()> {
        let invalid = |msg: String| Err(ChartError::MalformedInput(msg));

        if self.min_candle_width.is_nan() || self.min_candle_width <= 0.0 {
            return invalid(format!("minCandleWidth must be positive, got {}", self.min_candle_width));
        }
        if self.max_candle_width.is_nan() || self.min_candle_width > self.max_candle_width {
            return invalid(format!(
                "minCandleWidth {} exceeds maxCandleWidth {}",
                self.min_candle_width, self.max_candle_width
            ));
        }
        if self.grid_pitch.is_nan() || self.grid_pitch <= 0.0 {
            return invalid(format!("gridPitch must be positive, got {}", self.grid_pitch));
        }
        if self.scroll_friction.is_nan() || self.scroll_friction <= 0.0 || self.scroll_friction > 1.0 {
            return invalid(format!("scrollFriction must be in (0, 1], got {}", self.scroll_friction));
        }
        if self.margin_ratio.is_nan() || self.margin_ratio < 0.0 {
            return invalid(format!("marginRatio must not be negative, got {}", self.margin_ratio));
        }
        Ok(())
    }
}

fn default_interactive() -> bool {
    true
}

/// Options object passed by the host at initialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    #[serde(default = "default_interactive")]
    pub interactive: bool,
    #[serde(flatten)]
    pub config: EngineConfig,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self { interactive: true, config: EngineConfig::default() }
    }
}

impl InitOptions {
    pub fn preview() -> Self {
        Self { interactive: false, ..Self::default() }
    }

    pub fn interactive() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        if json.trim().is_empty() || json.trim() == "null" {
            return Ok(Self::default());
        }
        let options: Self = serde_json::from_str(json)?;
        options.config.validate()?;
        Ok(options)
    }

    pub fn mode(&self) -> ChartMode {
        if self.interactive { ChartMode::Interactive } else { ChartMode::Preview }
    }
}

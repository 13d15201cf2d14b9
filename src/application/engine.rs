use derive_more::Display;

use super::interaction::InteractionController;
use crate::domain::{
    chart::{Camera, ChartMode, ControlKind, ControlPanel, EngineConfig, InputLatch, Key, Palette, Point},
    errors::ChartResult,
    logging::LogComponent,
    market_data::{CandleSeries, RawCandle},
};
use crate::infrastructure::rendering::{DrawSurface, FrameReport, RenderInput, render_frame};
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineState {
    /// Not initialized, disposed, or initialized with no candles.
    Idle,
    /// Drawn once; ignores input.
    Preview,
    Interactive,
}

/// One chart instance: series, camera, controls and input, driven by its host.
///
/// The host owns the surface and the timer; the engine only needs a
/// [`DrawSurface`] for the duration of a call.
pub struct ChartEngine {
    config: EngineConfig,
    palette: Palette,
    series: CandleSeries,
    previous_len: usize,
    camera: Camera,
    controls: ControlPanel,
    controller: InteractionController,
    input: InputLatch,
    last_hovered: Option<usize>,
    state: EngineState,
    frames_rendered: u64,
}

impl ChartEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            palette: Palette::default(),
            series: CandleSeries::default(),
            previous_len: 0,
            camera: Camera::new(&config),
            controls: ControlPanel::new(&config),
            controller: InteractionController::new(&config),
            input: InputLatch::new(),
            last_hovered: None,
            state: EngineState::Idle,
            frames_rendered: 0,
            config,
        }
    }

    /// Replace everything with a fresh chart over `raw`.
    ///
    /// Preview draws exactly once before returning. Interactive resets the camera
    /// and waits for [`ChartEngine::tick`]. An empty series leaves the engine idle.
    pub fn initialize<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        raw: &[RawCandle],
        mode: ChartMode,
    ) -> ChartResult<EngineState> {
        self.config.validate()?;
        let series = CandleSeries::ingest(raw)?;
        self.reset_state();

        if series.is_empty() {
            log_info!(LogComponent::Application("Engine"), "no candles, staying idle");
            return Ok(self.state);
        }

        self.previous_len = series.len();
        self.camera.set_series_len(series.len());
        self.camera.set_view(surface.size());
        self.series = series;

        match mode {
            ChartMode::Preview => {
                self.camera.fit_all(self.config.preview_fill_ratio);
                self.state = EngineState::Preview;
                self.update();
                self.render(surface);
            }
            ChartMode::Interactive => {
                self.camera.reset();
                self.state = EngineState::Interactive;
            }
        }

        log_info!(
            LogComponent::Application("Engine"),
            "initialized {} mode with {} candles, candle width {:.2}",
            mode,
            self.series.len(),
            self.camera.candle_width
        );
        Ok(self.state)
    }

    /// Swap in a new series without touching the camera; auto-scroll picks up growth.
    pub fn set_candles(&mut self, raw: &[RawCandle]) -> ChartResult<()> {
        let series = CandleSeries::ingest(raw)?;
        log_debug!(
            LogComponent::Application("Engine"),
            "series replaced: {} -> {} candles",
            self.series.len(),
            series.len()
        );
        self.camera.set_series_len(series.len());
        self.series = series;
        self.camera.clamp();
        Ok(())
    }

    /// Input → update → render → end of frame. No-op unless interactive.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameReport {
        if self.state != EngineState::Interactive {
            return FrameReport::default();
        }

        let view = surface.size();
        self.camera.set_view(view);
        self.controls.layout(view);

        if let Some(kind) = self.controller.handle_input(&mut self.input, &mut self.camera, &self.controls) {
            if matches!(kind, ControlKind::Reset | ControlKind::FitToView) {
                log_info!(
                    LogComponent::Application("Engine"),
                    "{:?}: candle width {:.2}, camera x {:.2}",
                    kind,
                    self.camera.candle_width,
                    self.camera.camera_x
                );
            }
        }
        self.update();
        let report = self.render(surface);

        self.input.end_frame();
        self.previous_len = self.series.len();
        report
    }

    /// Stop reacting to input and ticks. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if self.state != EngineState::Idle {
            log_info!(LogComponent::Application("Engine"), "disposed after {} frames", self.frames_rendered);
        }
        self.state = EngineState::Idle;
    }

    fn reset_state(&mut self) {
        self.series = CandleSeries::default();
        self.previous_len = 0;
        self.camera = Camera::new(&self.config);
        self.controls = ControlPanel::new(&self.config);
        self.controller = InteractionController::new(&self.config);
        self.input = InputLatch::new();
        self.last_hovered = None;
        self.state = EngineState::Idle;
        self.frames_rendered = 0;
    }

    fn update(&mut self) {
        self.controller.update(&mut self.input, &mut self.camera, &self.controls);

        let grew = self.series.len() > self.previous_len;
        if grew && !self.controller.is_dragging(&self.input) && self.camera.shows_right_edge_of(self.previous_len) {
            self.camera.camera_x += 1.0;
        }
        self.camera.clamp();

        self.controls.animate(self.input.pointer);
        self.controls.layout(self.camera.view());
    }

    fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameReport {
        let report = render_frame(
            surface,
            &RenderInput {
                series: &self.series,
                camera: &self.camera,
                controls: &self.controls,
                pointer: self.input.pointer,
                dragging: self.controller.is_dragging(&self.input),
                overlay: self.state == EngineState::Interactive,
                last_hovered: self.last_hovered,
                palette: &self.palette,
                config: &self.config,
            },
        );
        if report.drawn {
            self.frames_rendered += 1;
        }
        if report.hovered.is_some() {
            self.last_hovered = report.hovered;
        }
        report
    }

    // --- camera operations exposed to the host ---

    pub fn reset(&mut self) {
        self.controller.scroll_velocity = 0.0;
        self.camera.reset();
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    pub fn fit_to_view(&mut self) {
        self.camera.fit_to_view(self.config.fit_candle_width);
    }

    // --- input, written by event handlers between ticks ---

    fn accepts_input(&self) -> bool {
        self.state == EngineState::Interactive
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.accepts_input() {
            self.input.pointer_moved(Point::new(x, y));
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.accepts_input() {
            self.input.pointer_down(Point::new(x, y));
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        if self.accepts_input() {
            self.input.pointer_up(Point::new(x, y));
        }
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if self.accepts_input() {
            self.input.wheel(delta_y);
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.accepts_input() {
            self.input.key_down(key);
        }
    }

    /// Always accepted so a key released after focus moves away does not stick.
    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    // --- accessors ---

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn input(&self) -> &InputLatch {
        &self.input
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

use crate::domain::chart::{Camera, ControlKind, ControlPanel, EngineConfig, InputLatch, Key};
use crate::log_debug;
use crate::domain::logging::LogComponent;

/// Turns latched input into camera changes.
///
/// Discrete input (clicks, wheel, keys) is handled first, then the continuous
/// part (drag, inertia, vertical drag-lock, edge scrolling, held pan buttons).
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    /// Candles per frame; positive moves the view toward older candles.
    pub scroll_velocity: f64,
    anchor_y: Option<f64>,
    vertical_pan: bool,
    press_on_control: bool,
    friction: f64,
    drag_lock_threshold: f64,
    shift_multiplier: f64,
    scale_step: f64,
    fit_width: f64,
    pan_button_rate: f64,
}

impl InteractionController {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scroll_velocity: 0.0,
            anchor_y: None,
            vertical_pan: false,
            press_on_control: false,
            friction: config.scroll_friction,
            drag_lock_threshold: config.drag_lock_threshold,
            shift_multiplier: config.shift_multiplier,
            scale_step: config.scale_step,
            fit_width: config.fit_candle_width,
            pan_button_rate: config.pan_button_rate,
        }
    }

    pub fn is_dragging(&self, input: &InputLatch) -> bool {
        input.primary_down && !self.press_on_control
    }

    pub fn anchor_y(&self) -> Option<f64> {
        self.anchor_y
    }

    pub fn is_vertical_pan_engaged(&self) -> bool {
        self.vertical_pan
    }

    /// Presses, releases, wheel and keys. Returns the control fired by a release, if any.
    pub fn handle_input(
        &mut self,
        input: &mut InputLatch,
        camera: &mut Camera,
        controls: &ControlPanel,
    ) -> Option<ControlKind> {
        if input.pressed {
            self.press_on_control = controls.is_over_any(input.pointer);
            self.anchor_y = (!self.press_on_control).then_some(input.pointer.y);
        }

        let mut fired = None;
        if input.released {
            self.anchor_y = None;
            self.vertical_pan = false;
            self.press_on_control = false;
            fired = controls.hit_test(input.pointer);
            if let Some(kind) = fired {
                self.dispatch(kind, camera);
            }
        }

        if input.wheel_delta != 0.0 {
            camera.wheel_zoom(input.wheel_delta, input.pointer.x);
        }

        if input.key_event {
            self.handle_keys(input, camera);
        }

        fired
    }

    /// Run one control's action.
    pub fn dispatch(&mut self, kind: ControlKind, camera: &mut Camera) {
        log_debug!(LogComponent::Application("Interaction"), "control {:?}", kind);
        match kind {
            ControlKind::ZoomIn => camera.zoom_in(),
            ControlKind::ZoomOut => camera.zoom_out(),
            ControlKind::PanLeft => camera.pan_by(-self.pan_step(camera)),
            ControlKind::PanRight => camera.pan_by(self.pan_step(camera)),
            ControlKind::Reset => {
                self.scroll_velocity = 0.0;
                camera.reset();
            }
            ControlKind::FitToView => camera.fit_to_view(self.fit_width),
        }
    }

    fn pan_step(&self, camera: &Camera) -> f64 {
        camera.candles_per_view() * self.pan_button_rate
    }

    fn handle_keys(&mut self, input: &mut InputLatch, camera: &mut Camera) {
        if input.is_held(Key::ScaleUp) {
            camera.adjust_scale(self.scale_step);
        }
        if input.is_held(Key::ScaleDown) {
            camera.adjust_scale(-self.scale_step);
        }
        if input.is_held(Key::ZoomOut) {
            camera.zoom_out();
        }
        if input.is_held(Key::ZoomIn) {
            camera.zoom_in();
        }

        // arrows drive the crosshair; the edge clamp scrolls once it hits a side
        let shift = input.is_held(Key::Shift);
        let spacing = camera.candle_spacing();
        let height = camera.view().height;
        let dx = if shift { spacing * self.shift_multiplier } else { spacing };
        let dy = if shift { height * 0.2 } else { height * 0.01 };

        if input.is_held(Key::ArrowRight) {
            input.pointer.x += dx;
        }
        if input.is_held(Key::ArrowLeft) {
            input.pointer.x -= dx;
        }
        if input.is_held(Key::ArrowDown) {
            input.pointer.y += dy;
        }
        if input.is_held(Key::ArrowUp) {
            input.pointer.y = (input.pointer.y - dy).max(0.0);
        }
    }

    /// Continuous per-frame motion.
    pub fn update(&mut self, input: &mut InputLatch, camera: &mut Camera, controls: &ControlPanel) {
        if let Some(anchor) = self.anchor_y {
            if self.vertical_pan {
                camera.pan_vertical(input.pointer.y - input.previous.y);
            } else if (input.pointer.y - anchor).abs() > self.drag_lock_threshold {
                camera.pan_vertical(input.pointer.y - anchor);
                self.vertical_pan = true;
            }
        }

        camera.clamp();
        if self.is_dragging(input) {
            self.scroll_velocity = input.pointer_delta().x / camera.candle_spacing();
        }
        camera.camera_x -= self.scroll_velocity;
        self.scroll_velocity *= self.friction;
        camera.camera_x = camera.camera_x.max(0.0);

        let width = camera.view().width;
        if input.pointer.x > width {
            camera.camera_x += 1.0;
            input.pointer.x = width;
        }
        if input.pointer.x < 0.0 {
            camera.camera_x -= 1.0;
            input.pointer.x = 0.0;
        }

        if input.primary_down {
            match controls.hit_test(input.pointer) {
                Some(ControlKind::PanLeft) => camera.camera_x -= self.pan_step(camera),
                Some(ControlKind::PanRight) => camera.camera_x += self.pan_step(camera),
                _ => {}
            }
        }
        camera.clamp();
    }
}

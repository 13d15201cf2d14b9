use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::application::{ChartEngine, EngineState, ListenerGuard};
use crate::domain::{
    chart::{EngineConfig, InitOptions},
    errors::ChartResult,
    logging::LogComponent,
    market_data::RawCandle,
};
use crate::infrastructure::{
    dom_events::{SharedEngine, attach_chart_listeners},
    rendering::CanvasSurface,
};
use crate::{log_debug, log_info, log_warn};

/// Browser side of one chart: canvas surface, DOM listeners and frame timer
/// around a shared [`ChartEngine`].
///
/// Listeners are attached at most once per canvas; re-initializing on the
/// same element only restarts the engine and the timer.
pub struct ChartHost {
    engine: SharedEngine,
    surface: Option<Rc<RefCell<CanvasSurface>>>,
    listeners: ListenerGuard<Vec<EventListener>>,
    bound_canvas: Option<HtmlCanvasElement>,
    timer: Option<Interval>,
}

impl Default for ChartHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartHost {
    pub fn new() -> Self {
        Self {
            engine: Rc::new(RefCell::new(ChartEngine::new(EngineConfig::default()))),
            surface: None,
            listeners: ListenerGuard::new(),
            bound_canvas: None,
            timer: None,
        }
    }

    /// Bind to `canvas` and start a chart over `raw`.
    ///
    /// A canvas without a 2D context is logged and disposes the host. Bad
    /// candles or options return the error and leave a running chart as it was.
    pub fn initialize(
        &mut self,
        canvas: HtmlCanvasElement,
        raw: &[RawCandle],
        options: InitOptions,
    ) -> ChartResult<EngineState> {
        let mut surface = match CanvasSurface::new(canvas.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                log_warn!(LogComponent::Presentation("ChartHost"), "canvas unusable: {}", err);
                self.dispose();
                return Ok(EngineState::Idle);
            }
        };

        let mut next = ChartEngine::new(options.config.clone());
        surface.sync_size(Some(options.config.fallback_size()));
        let state = next.initialize(&mut surface, raw, options.mode())?;

        let period = options.config.frame_period_ms();
        self.timer = None;
        *self.engine.borrow_mut() = next;

        if !self.is_bound_to(&canvas) {
            self.listeners.detach();
            self.bound_canvas = Some(canvas.clone());
        }

        let surface = Rc::new(RefCell::new(surface));
        self.surface = Some(surface.clone());

        if state == EngineState::Interactive {
            let engine = self.engine.clone();
            if self.listeners.attach_with(|| attach_chart_listeners(&canvas, engine)) {
                log_debug!(LogComponent::Presentation("ChartHost"), "listeners attached");
            }
            self.timer = Some(Self::start_frames(self.engine.clone(), surface, period));
        } else {
            self.listeners.detach();
        }

        log_info!(LogComponent::Presentation("ChartHost"), "chart {} at {} ms/frame", state, period);
        Ok(state)
    }

    fn start_frames(engine: SharedEngine, surface: Rc<RefCell<CanvasSurface>>, period: u32) -> Interval {
        Interval::new(period, move || {
            let Ok(mut surface) = surface.try_borrow_mut() else { return };
            surface.sync_size(None);
            if let Ok(mut engine) = engine.try_borrow_mut() {
                engine.tick(&mut *surface);
            }
        })
    }

    fn is_bound_to(&self, canvas: &HtmlCanvasElement) -> bool {
        self.bound_canvas
            .as_ref()
            .map(|bound| AsRef::<JsValue>::as_ref(bound) == AsRef::<JsValue>::as_ref(canvas))
            .unwrap_or(false)
    }

    /// Stop the timer, drop listeners and idle the engine. Safe to repeat.
    pub fn dispose(&mut self) {
        self.timer = None;
        self.listeners.detach();
        self.bound_canvas = None;
        self.surface = None;
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.dispose();
        }
    }

    pub fn set_candles(&mut self, raw: &[RawCandle]) -> ChartResult<()> {
        self.engine.borrow_mut().set_candles(raw)
    }

    pub fn engine(&self) -> SharedEngine {
        self.engine.clone()
    }

    pub fn listener_attach_count(&self) -> usize {
        self.listeners.attach_count()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl Drop for ChartHost {
    fn drop(&mut self) {
        self.dispose();
    }
}

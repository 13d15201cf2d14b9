use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent, WheelEvent};

use crate::application::ChartEngine;
use crate::domain::chart::Key;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub type SharedEngine = Rc<RefCell<ChartEngine>>;

/// Event position relative to the canvas' top-left corner.
fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Handlers run between ticks; a busy engine just drops the event.
fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut ChartEngine)) {
    if let Ok(mut engine) = engine.try_borrow_mut() {
        f(&mut engine);
    }
}

fn is_focused(canvas: &HtmlCanvasElement) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let canvas_js: &JsValue = canvas.as_ref();
    document
        .active_element()
        .map(|active| AsRef::<JsValue>::as_ref(&active) == canvas_js)
        .unwrap_or(false)
}

/// Wire pointer, wheel and keyboard input of `canvas` into `engine`.
///
/// Pointer listeners live on the canvas and capture the pointer while the
/// button is down, so drags keep reporting outside the element. Key listeners
/// live on the document and only forward keydowns while the canvas has focus.
/// Dropping the returned handles removes every listener.
pub fn attach_chart_listeners(canvas: &HtmlCanvasElement, engine: SharedEngine) -> Vec<EventListener> {
    if !canvas.has_attribute("tabindex") {
        let _ = canvas.set_attribute("tabindex", "0");
    }

    let mut listeners = Vec::with_capacity(7);

    {
        let target = canvas.clone();
        let engine = engine.clone();
        listeners.push(EventListener::new(canvas, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else { return };
            let (x, y) = local_point(&target, event.client_x(), event.client_y());
            with_engine(&engine, |e| e.pointer_moved(x, y));
        }));
    }

    {
        let target = canvas.clone();
        let engine = engine.clone();
        listeners.push(EventListener::new(canvas, "pointerdown", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else { return };
            if event.button() != 0 {
                return;
            }
            let _ = target.set_pointer_capture(event.pointer_id());
            let _ = target.focus();
            let (x, y) = local_point(&target, event.client_x(), event.client_y());
            with_engine(&engine, |e| e.pointer_down(x, y));
        }));
    }

    for name in ["pointerup", "pointercancel"] {
        let target = canvas.clone();
        let engine = engine.clone();
        listeners.push(EventListener::new(canvas, name, move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else { return };
            let _ = target.release_pointer_capture(event.pointer_id());
            let (x, y) = local_point(&target, event.client_x(), event.client_y());
            with_engine(&engine, |e| e.pointer_up(x, y));
        }));
    }

    {
        let engine = engine.clone();
        listeners.push(EventListener::new_with_options(
            canvas,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else { return };
                event.prevent_default();
                with_engine(&engine, |e| e.wheel(wheel.delta_y()));
            },
        ));
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log_warn!(LogComponent::Infrastructure("DomEvents"), "no document, keyboard input disabled");
        return listeners;
    };

    {
        let target = canvas.clone();
        let engine = engine.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
                if !is_focused(&target) {
                    return;
                }
                let Ok(key) = Key::from_str(&event.key()) else { return };
                if matches!(key, Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown) {
                    event.prevent_default();
                }
                with_engine(&engine, |e| e.key_down(key));
            },
        ));
    }

    listeners.push(EventListener::new(&document, "keyup", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
        if let Ok(key) = Key::from_str(&event.key()) {
            with_engine(&engine, |e| e.key_up(key));
        }
    }));

    log_debug!(LogComponent::Infrastructure("DomEvents"), "attached {} listeners", listeners.len());
    listeners
}

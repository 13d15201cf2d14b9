use strum::{EnumIter, IntoEnumIterator};

use super::config::EngineConfig;
use super::value_objects::{Point, Rect, Size};

/// Clickable overlay affordances, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ControlKind {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    Reset,
    FitToView,
}

impl ControlKind {
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::ZoomIn => "+",
            ControlKind::ZoomOut => "-",
            ControlKind::PanLeft => "❬",
            ControlKind::PanRight => "❭",
            ControlKind::Reset => "⟲",
            ControlKind::FitToView => "⛶",
        }
    }

    /// Corner radii (top-left, top-right, bottom-right, bottom-left); paired buttons share a flat edge.
    pub fn radii(&self) -> [f64; 4] {
        match self {
            ControlKind::ZoomIn | ControlKind::PanLeft => [3.0, 0.0, 0.0, 3.0],
            ControlKind::ZoomOut | ControlKind::PanRight => [0.0, 3.0, 3.0, 0.0],
            ControlKind::Reset | ControlKind::FitToView => [3.0; 4],
        }
    }

    /// Extra space before this control; pairs sit flush against each other.
    fn gap_before(&self) -> f64 {
        match self {
            ControlKind::ZoomIn | ControlKind::ZoomOut | ControlKind::PanRight => 0.0,
            ControlKind::PanLeft | ControlKind::Reset | ControlKind::FitToView => CONTROL_GAP,
        }
    }
}

const CONTROL_GAP: f64 = 10.0;
const BOTTOM_OFFSET: f64 = 20.0;
const HOVER_ALPHA: f64 = 1.0;
const IDLE_ALPHA: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayControl {
    pub kind: ControlKind,
    pub rect: Rect,
    pub current: Size,
    pub target: Size,
}

impl OverlayControl {
    fn new(kind: ControlKind, size: Size) -> Self {
        Self { kind, rect: Rect::new(0.0, 0.0, size.width, size.height), current: size, target: size }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// The row of overlay buttons along the bottom edge.
///
/// Sizes ease toward `expanded` while the pointer is over the row, and layout
/// depends on the eased sizes, so both are recomputed every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    controls: Vec<OverlayControl>,
    resting: Size,
    expanded: Size,
    easing: f64,
    hovered: bool,
}

impl ControlPanel {
    pub fn new(config: &EngineConfig) -> Self {
        let resting = Size::new(config.control_size.0, config.control_size.1);
        Self {
            controls: ControlKind::iter().map(|kind| OverlayControl::new(kind, resting)).collect(),
            resting,
            expanded: Size::new(config.control_expanded_size.0, config.control_expanded_size.1),
            easing: config.control_easing,
            hovered: false,
        }
    }

    pub fn controls(&self) -> &[OverlayControl] {
        &self.controls
    }

    pub fn get(&self, kind: ControlKind) -> Option<&OverlayControl> {
        self.controls.iter().find(|c| c.kind == kind)
    }

    /// Bounding box of the whole row.
    pub fn region(&self) -> Rect {
        let (Some(first), Some(last)) = (self.controls.first(), self.controls.last()) else {
            return Rect::default();
        };
        let top = self.controls.iter().map(|c| c.rect.y).fold(f64::INFINITY, f64::min);
        let bottom = self.controls.iter().map(|c| c.rect.bottom()).fold(f64::NEG_INFINITY, f64::max);
        Rect::new(first.rect.x, top, last.rect.right() - first.rect.x, bottom - top)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn alpha(&self) -> f64 {
        if self.hovered { HOVER_ALPHA } else { IDLE_ALPHA }
    }

    pub fn hit_test(&self, p: Point) -> Option<ControlKind> {
        self.controls.iter().find(|c| c.contains(p)).map(|c| c.kind)
    }

    pub fn is_over_any(&self, p: Point) -> bool {
        self.hit_test(p).is_some()
    }

    /// One easing step toward the resting or expanded size.
    pub fn animate(&mut self, pointer: Point) {
        self.hovered = self.region().contains(pointer);
        let target = if self.hovered { self.expanded } else { self.resting };
        for control in &mut self.controls {
            control.target = target;
            control.current = Size::new(
                lerp(control.current.width, target.width, self.easing),
                lerp(control.current.height, target.height, self.easing),
            );
        }
    }

    /// Centre the row horizontally, `BOTTOM_OFFSET` above the bottom edge.
    pub fn layout(&mut self, view: Size) {
        let total: f64 = self.controls.iter().map(|c| c.current.width + c.kind.gap_before()).sum();
        let mut x = view.width / 2.0 - total / 2.0;
        for control in &mut self.controls {
            x += control.kind.gap_before();
            control.rect = Rect::new(
                x,
                view.height - control.current.height - BOTTOM_OFFSET,
                control.current.width,
                control.current.height,
            );
            x += control.current.width;
        }
    }
}

pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + amount * (end - start)
}

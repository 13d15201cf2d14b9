use candle_chart_wasm::domain::chart::Key;
use candle_chart_wasm::infrastructure::rendering::RecordingSurface;
use candle_chart_wasm::{ChartEngine, ChartMode, EngineConfig, EngineState};

#[test]
fn empty_interactive_init_is_idle_and_draws_nothing() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());

    let state = engine.initialize(&mut surface, &[], ChartMode::Interactive).unwrap();
    assert_eq!(state, EngineState::Idle);

    let report = engine.tick(&mut surface);
    assert!(!report.drawn);
    assert!(surface.commands.is_empty());
    assert_eq!(engine.frames_rendered(), 0);
}

#[test]
fn empty_preview_init_draws_nothing() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());

    let state = engine.initialize(&mut surface, &[], ChartMode::Preview).unwrap();
    assert_eq!(state, EngineState::Idle);
    assert!(surface.commands.is_empty());
}

#[test]
fn input_before_initialize_is_ignored() {
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.pointer_down(10.0, 10.0);
    engine.wheel(-120.0);
    engine.key_down(Key::ZoomIn);
    engine.zoom_in();

    assert!(!engine.input().primary_down);
    assert_eq!(engine.input().wheel_delta, 0.0);
    assert!(!engine.input().is_held(Key::ZoomIn));
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn zero_sized_surface_draws_nothing() {
    let raw = vec![candle_chart_wasm::RawCandle::new(1.0, 2.0, 0.5, 1.5, 0u64)];
    let mut surface = RecordingSurface::new(0.0, 0.0);
    let mut engine = ChartEngine::new(EngineConfig::default());

    engine.initialize(&mut surface, &raw, ChartMode::Interactive).unwrap();
    let report = engine.tick(&mut surface);
    assert!(!report.drawn);
    assert!(surface.commands.is_empty());
}

use candle_chart_wasm::infrastructure::rendering::RecordingSurface;
use candle_chart_wasm::{ChartEngine, ChartMode, EngineConfig, RawCandle};

fn candles(n: usize) -> Vec<RawCandle> {
    (0..n)
        .map(|i| {
            let base = 30.0 + (i % 9) as f64;
            RawCandle::new(base, base + 1.0, base - 1.0, base + 0.5, i as u64)
        })
        .collect()
}

fn interactive(surface: &mut RecordingSurface, n: usize) -> ChartEngine {
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.initialize(surface, &candles(n), ChartMode::Interactive).unwrap();
    engine.tick(surface);
    engine
}

#[test]
fn new_candle_scrolls_when_right_edge_is_visible() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = interactive(&mut surface, 100);
    assert_eq!(engine.camera().camera_x, 60.0);

    engine.set_candles(&candles(101)).unwrap();
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_x, 61.0);

    // only the tick that sees the growth scrolls
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_x, 61.0);
}

#[test]
fn panned_away_view_stays_put() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = interactive(&mut surface, 100);
    engine.camera_mut().camera_x = 10.0;

    engine.set_candles(&candles(101)).unwrap();
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_x, 10.0);
}

#[test]
fn no_scroll_while_dragging() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = interactive(&mut surface, 100);
    engine.pointer_moved(150.0, 100.0);
    engine.tick(&mut surface);
    engine.pointer_down(150.0, 100.0);
    engine.tick(&mut surface);

    engine.set_candles(&candles(101)).unwrap();
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_x, 60.0);
}

#[test]
fn shrinking_series_clamps_the_camera() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = interactive(&mut surface, 100);

    engine.set_candles(&candles(20)).unwrap();
    assert_eq!(engine.camera().camera_x, 19.0);
    assert_eq!(engine.series().len(), 20);
}

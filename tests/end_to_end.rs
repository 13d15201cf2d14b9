use candle_chart_wasm::infrastructure::rendering::RecordingSurface;
use candle_chart_wasm::{ChartEngine, ChartMode, EngineConfig, EngineState, RawCandle};

/// 30 rising bars then 30 falling ones.
fn peak_series() -> Vec<RawCandle> {
    (0..60)
        .map(|i| {
            let (open, close) = if i < 30 {
                let base = 100.0 + i as f64;
                (base, base + 1.0)
            } else {
                let base = 130.0 - (i - 30) as f64;
                (base, base - 1.0)
            };
            RawCandle::new(open, open.max(close) + 0.5, open.min(close) - 0.5, close, i as u64 * 60_000)
        })
        .collect()
}

#[test]
fn reset_puts_newest_candle_flush_right() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());

    let state = engine.initialize(&mut surface, &peak_series(), ChartMode::Interactive).unwrap();
    assert_eq!(state, EngineState::Interactive);

    engine.camera_mut().camera_x = 3.0;
    engine.reset();
    let report = engine.tick(&mut surface);

    let camera = engine.camera();
    assert_eq!(camera.candle_width, 5.0);
    assert!((camera.camera_x + 300.0 / camera.candle_spacing() - 60.0).abs() < 1e-9);

    assert!(report.drawn);
    let window = report.window.unwrap();
    assert_eq!((window.start, window.end), (20, 60));
    // peak wick at the turn, trough wick on the last bar
    assert_eq!(report.price_range, Some((99.5, 130.5)));
}

#[test]
fn every_tick_draws_background_first() {
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.initialize(&mut surface, &peak_series(), ChartMode::Interactive).unwrap();

    for _ in 0..3 {
        surface.clear();
        engine.tick(&mut surface);
        let (rect, _) = surface.rects().next().unwrap();
        assert_eq!((rect.w, rect.h), (300.0, 200.0));
    }
    assert_eq!(engine.frames_rendered(), 3);
}

use candle_chart_wasm::infrastructure::rendering::RecordingSurface;
use candle_chart_wasm::{ChartEngine, ChartMode, EngineConfig, RawCandle};

fn interactive(surface: &mut RecordingSurface) -> ChartEngine {
    let raw: Vec<RawCandle> = (0..500)
        .map(|i| {
            let base = 200.0 + (i % 30) as f64;
            RawCandle::new(base, base + 4.0, base - 4.0, base + 2.0, i as u64)
        })
        .collect();
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.initialize(surface, &raw, ChartMode::Interactive).unwrap();
    engine
}

#[test]
fn vertical_pan_engages_only_past_the_threshold() {
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut engine = interactive(&mut surface);

    engine.pointer_moved(300.0, 200.0);
    engine.tick(&mut surface);
    engine.pointer_down(300.0, 200.0);
    engine.tick(&mut surface);
    assert_eq!(engine.controller().anchor_y(), Some(200.0));

    engine.pointer_moved(300.0, 300.0);
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_y, 0.0);
    assert!(!engine.controller().is_vertical_pan_engaged());

    engine.pointer_moved(300.0, 360.0);
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_y, 160.0);
    assert!(engine.controller().is_vertical_pan_engaged());

    // once engaged it follows the pointer frame by frame
    engine.pointer_moved(300.0, 380.0);
    engine.tick(&mut surface);
    assert_eq!(engine.camera().camera_y, 180.0);

    engine.pointer_up(300.0, 380.0);
    engine.tick(&mut surface);
    assert!(!engine.controller().is_vertical_pan_engaged());
    assert_eq!(engine.controller().anchor_y(), None);
    assert_eq!(engine.camera().camera_y, 180.0);
}

#[test]
fn vertical_pan_shifts_the_price_scale() {
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut engine = interactive(&mut surface);
    let before = engine.tick(&mut surface).scale.unwrap();

    engine.camera_mut().pan_vertical(50.0);
    let after = engine.tick(&mut surface).scale.unwrap();

    let price = (before.low + before.high) / 2.0;
    assert!((after.price_to_y(price) - before.price_to_y(price) - 50.0).abs() < 1e-9);
}

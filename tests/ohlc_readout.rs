use candle_chart_wasm::domain::chart::Palette;
use candle_chart_wasm::domain::market_data::Candle;
use candle_chart_wasm::infrastructure::rendering::{OhlcReadout, RecordingSurface};
use candle_chart_wasm::{ChartEngine, ChartMode, EngineConfig, RawCandle};

#[test]
fn readout_text_and_colours() {
    let palette = Palette::default();
    let up = OhlcReadout::for_candle(&Candle::new(100.0, 110.0, 95.0, 105.0, 0u64), &palette);
    insta::assert_snapshot!(up.text(), @"O: 100.00 H: 110.00 L: 95.00 C: 105.00");
    assert_eq!(up.segments[0].1, palette.text_neutral);
    assert_eq!(up.segments[1].1, palette.text_up);

    let down = OhlcReadout::for_candle(&Candle::new(105.0, 110.0, 95.0, 100.0, 0u64), &palette);
    assert_eq!(down.segments[7].1, palette.text_down);

    let doji = OhlcReadout::for_candle(&Candle::new(1.0, 2.0, 0.5, 1.0, 0u64), &palette);
    assert!(doji.segments.iter().all(|(_, color)| *color == palette.text_neutral));
}

#[test]
fn readout_sticks_to_the_last_hovered_candle() {
    let raw: Vec<RawCandle> = (0..10)
        .map(|i| {
            let base = 100.0 + i as f64 * 10.0;
            RawCandle::new(base, base + 5.0, base - 5.0, base + 2.0, i as u64)
        })
        .collect();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.initialize(&mut surface, &raw, ChartMode::Interactive).unwrap();

    // column 1 spans (7.5, 15]
    engine.pointer_moved(10.0, 100.0);
    let report = engine.tick(&mut surface);
    assert_eq!(report.hovered, Some(1));

    engine.pointer_moved(200.0, 100.0);
    surface.clear();
    let report = engine.tick(&mut surface);
    assert_eq!(report.hovered, None);
    assert!(surface.texts().any(|t| t == "110.00"));
    assert!(surface.texts().any(|t| t == "O: "));
}

#[test]
fn no_readout_before_anything_is_hovered() {
    let raw = vec![RawCandle::new(1.0, 2.0, 0.5, 1.5, 0u64)];
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let mut engine = ChartEngine::new(EngineConfig::default());
    engine.initialize(&mut surface, &raw, ChartMode::Interactive).unwrap();

    engine.pointer_moved(250.0, 50.0);
    engine.tick(&mut surface);
    assert!(!surface.texts().any(|t| t == "O: "));
}

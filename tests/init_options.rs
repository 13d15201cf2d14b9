use candle_chart_wasm::domain::chart::{ChartMode, InitOptions};
use candle_chart_wasm::{ChartError, EngineConfig};

#[test]
fn missing_options_mean_interactive_defaults() {
    for json in ["", "  ", "null"] {
        let options = InitOptions::from_json(json).unwrap();
        assert_eq!(options, InitOptions::default());
        assert_eq!(options.mode(), ChartMode::Interactive);
    }
}

#[test]
fn interactive_false_selects_preview() {
    let options = InitOptions::from_json(r#"{"interactive": false}"#).unwrap();
    assert_eq!(options.mode(), ChartMode::Preview);
    assert_eq!(options.config, EngineConfig::default());
}

#[test]
fn tuning_keys_are_camel_case_and_partial() {
    let options = InitOptions::from_json(
        r#"{"interactive": true, "maxCandleWidth": 40, "scrollFriction": 0.9, "fps": 30, "controlSize": [40, 24]}"#,
    )
    .unwrap();

    assert_eq!(options.config.max_candle_width, 40.0);
    assert_eq!(options.config.scroll_friction, 0.9);
    assert_eq!(options.config.control_size, (40.0, 24.0));
    assert_eq!(options.config.frame_period_ms(), 33);
    assert_eq!(options.config.drag_lock_threshold, 150.0);
}

#[test]
fn frame_period_never_hits_zero() {
    let config = EngineConfig { fps: 0, ..EngineConfig::default() };
    assert_eq!(config.frame_period_ms(), 1000);
    let config = EngineConfig { fps: 5_000, ..EngineConfig::default() };
    assert_eq!(config.frame_period_ms(), 1);
    assert_eq!(EngineConfig::default().frame_period_ms(), 16);
}

#[test]
fn wrongly_typed_option_is_malformed() {
    let err = InitOptions::from_json(r#"{"interactive": "yes"}"#).unwrap_err();
    assert!(matches!(err, ChartError::MalformedInput(_)));
}

#[test]
fn defaults_pass_validation() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn unusable_tuning_is_malformed() {
    for json in [
        r#"{"interactive": true, "minCandleWidth": 100}"#,
        r#"{"minCandleWidth": 0}"#,
        r#"{"minCandleWidth": -2}"#,
        r#"{"gridPitch": 0}"#,
        r#"{"scrollFriction": 0}"#,
        r#"{"scrollFriction": 1.5}"#,
        r#"{"marginRatio": -0.1}"#,
    ] {
        let err = InitOptions::from_json(json).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(_)), "{json} gave {err:?}");
    }
}

#[test]
fn nan_widths_are_rejected() {
    let config = EngineConfig { max_candle_width: f64::NAN, ..EngineConfig::default() };
    assert!(matches!(config.validate(), Err(ChartError::MalformedInput(_))));
}

use candle_chart_wasm::domain::errors::ChartError;
use candle_chart_wasm::domain::market_data::{CandleSeries, CandleTimestamp, RawCandle};

#[test]
fn numbers_and_numeric_strings_coerce() {
    let raw = RawCandle::parse_array(
        r#"[{"open":"1.5","high":2,"low":" 1 ","close":1.8,"volume":"12.5","timestamp":1700000000000,"vwap":1.7,"otc":false}]"#,
    )
    .unwrap();
    let series = CandleSeries::ingest(&raw).unwrap();
    let candle = series.get(0).unwrap();

    assert_eq!(candle.open, 1.5);
    assert_eq!(candle.high, 2.0);
    assert_eq!(candle.low, 1.0);
    assert_eq!(candle.close, 1.8);
    assert_eq!(candle.volume, Some(12.5));
    assert_eq!(candle.timestamp, CandleTimestamp::Epoch(1_700_000_000_000.0));
}

#[test]
fn iso_timestamp_is_kept_verbatim() {
    let raw = vec![RawCandle::new(1.0, 2.0, 0.5, 1.5, "2024-03-01T10:00:00Z")];
    let series = CandleSeries::ingest(&raw).unwrap();
    assert_eq!(series.get(0).unwrap().timestamp.to_string(), "2024-03-01T10:00:00Z");
}

#[test]
fn blank_string_is_rejected_with_its_index() {
    let raw = vec![
        RawCandle::new(1.0, 2.0, 0.5, 1.5, 0u64),
        RawCandle::new("", 2.0, 0.5, 1.5, 1u64),
    ];
    let err = CandleSeries::ingest(&raw).unwrap_err();
    assert_eq!(
        err,
        ChartError::InvalidCandle { index: 1, field: "open", value: "\"\"".to_string() }
    );
    insta::assert_snapshot!(err.to_string(), @r#"Invalid candle at index 1: field 'open' is not numeric ("")"#);
}

#[test]
fn non_finite_and_non_numeric_values_are_rejected() {
    for bad in ["NaN", "inf", "abc"] {
        let raw = vec![RawCandle::new(1.0, bad, 0.5, 1.5, 0u64)];
        assert!(
            matches!(CandleSeries::ingest(&raw), Err(ChartError::InvalidCandle { index: 0, field: "high", .. })),
            "{bad} should not coerce"
        );
    }
}

#[test]
fn missing_or_null_price_reports_missing() {
    let raw = RawCandle::parse_array(r#"[{"open":1,"high":2,"low":0.5,"close":null,"timestamp":0}]"#).unwrap();
    let err = CandleSeries::ingest(&raw).unwrap_err();
    assert_eq!(
        err,
        ChartError::InvalidCandle { index: 0, field: "close", value: "missing".to_string() }
    );
}

#[test]
fn unusable_volume_is_dropped_not_fatal() {
    let raw = RawCandle::parse_array(r#"[{"open":1,"high":2,"low":0.5,"close":1.5,"volume":"n/a","timestamp":0}]"#)
        .unwrap();
    let series = CandleSeries::ingest(&raw).unwrap();
    assert_eq!(series.get(0).unwrap().volume, None);
}

#[test]
fn payload_that_is_not_an_array_is_malformed() {
    assert!(matches!(RawCandle::parse_array(r#"{"open":1}"#), Err(ChartError::MalformedInput(_))));
}

#[test]
fn window_and_price_range_clamp_to_series() {
    let raw: Vec<RawCandle> = (0..5)
        .map(|i| {
            let base = 10.0 + i as f64;
            RawCandle::new(base, base + 2.0, base - 1.0, base + 1.0, i as u64)
        })
        .collect();
    let series = CandleSeries::ingest(&raw).unwrap();

    assert_eq!(series.window(3..100).len(), 2);
    assert!(series.window(7..9).is_empty());
    assert_eq!(series.price_range(1..3), Some((10.0, 14.0)));
    assert_eq!(series.price_range(5..8), None);
}

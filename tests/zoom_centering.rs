use candle_chart_wasm::domain::chart::{Camera, EngineConfig, Size};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn camera_at(width: f64) -> Camera {
    let mut camera = Camera::new(&EngineConfig::default());
    camera.set_view(Size::new(800.0, 600.0));
    camera.set_series_len(10_000);
    camera.candle_width = width;
    camera.camera_x = 5_000.0;
    camera
}

/// Width in `[lo, hi)` from two arbitrary seeds.
fn width_from(seed: u16, frac: u8, lo: f64, hi: f64) -> f64 {
    lo + (seed as f64 % (hi - lo).floor()) + frac as f64 / 256.0
}

#[quickcheck]
fn zoom_in_then_out_restores_width_and_center(seed: u16, frac: u8) -> TestResult {
    let width = width_from(seed, frac, 1.0, 70.0);
    let mut camera = camera_at(width);
    let center = camera.center_index();

    camera.zoom_in();
    if camera.candle_width >= 80.0 {
        return TestResult::discard();
    }
    camera.zoom_out();

    TestResult::from_bool(
        (camera.candle_width - width).abs() < 1e-9 && (camera.center_index() - center).abs() <= 0.5,
    )
}

#[quickcheck]
fn zoom_out_then_in_restores_width_and_center(seed: u16, frac: u8) -> bool {
    let width = width_from(seed, frac, 3.0, 79.0);
    let mut camera = camera_at(width);
    let center = camera.center_index();

    camera.zoom_out();
    camera.zoom_in();

    (camera.candle_width - width).abs() < 1e-9 && (camera.center_index() - center).abs() <= 0.5
}

#[test]
fn zoom_in_step_follows_log_of_width() {
    let mut camera = camera_at(5.0);
    camera.zoom_in();
    assert!((camera.candle_width - (5.0 + 6f64.ln() * 2.0)).abs() < 1e-12);
}

#[test]
fn fit_to_view_zooms_out_below_threshold() {
    let mut camera = camera_at(40.0);
    let center = camera.center_index();
    camera.fit_to_view(3.0);
    assert!(camera.candle_width < 3.0);
    assert!((camera.center_index() - center).abs() <= 0.5);
}

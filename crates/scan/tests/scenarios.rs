use std::convert::Infallible;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use resonance_core::{Axis, Observation, Switch, SwitchConfig};
use resonance_scan::{
    Event, Scanner, Status,
    calibrate::calibrate_threshold,
    manifold::{ManifoldError, extract_resonant, peak, summarize},
};

fn square(params: &[f64; 1]) -> Result<Vec<f64>, Infallible> {
    Ok(vec![params[0] * params[0]])
}

fn switch(threshold: f64) -> Switch {
    Switch::new(SwitchConfig {
        threshold,
        ..SwitchConfig::default()
    })
    .expect("valid switch")
}

#[test]
fn square_root_of_four() {
    let obs = Observation::new(vec![4.0]).unwrap();
    let axis = Axis::new(0.0, 5.0, 1000).unwrap();
    let scanner = Scanner::new(&square, &obs, Switch::default());

    let scan = scanner.scan_1d_unobserved(&axis).expect("scan succeeds");

    assert_eq!(scan.len(), 1000);

    // With T = 1 every residual below 296 is resonant, which covers the grid.
    assert_eq!(scan.status(), Status::Resonant { count: 1000 });

    // The strongest point sits next to x = 2.
    let top = peak(&scan).unwrap();
    assert!((top.coordinates[0] - 2.0).abs() <= axis.step().abs());

    // A stricter threshold keeps only |x² - 4| <= 0.5, a window around x = 2.
    let tight = scan.with_threshold(296.0 / 0.5).unwrap();
    let set = extract_resonant(&tight);
    assert!(!set.is_empty());
    for [x] in &set.points {
        assert!((3.5_f64.sqrt()..=4.5_f64.sqrt()).contains(x));
    }

    let summary = summarize(&tight).unwrap();
    assert_abs_diff_eq!(summary.centroid[0], 2.0, epsilon = 0.01);
    assert!(summary.spread[0] < 0.1);
}

#[test]
fn resonant_points_lie_below_the_crossing() {
    let obs = Observation::new(vec![4.0]).unwrap();
    let axis = Axis::new(-3.0, 3.0, 601).unwrap();
    let switch = switch(100.0);
    let scanner = Scanner::new(&square, &obs, switch);

    let scan = scanner.scan_1d_unobserved(&axis).unwrap();

    for (residual, s) in scan.residuals.iter().zip(&scan.switches) {
        if *s == 1 {
            assert!(*residual <= switch.crossing());
        }
    }
    // Both roots are found.
    let set = extract_resonant(&scan);
    assert!(set.points.iter().any(|[x]| *x < 0.0));
    assert!(set.points.iter().any(|[x]| *x > 0.0));
}

#[test]
fn switch_against_tight_threshold() {
    let switch = switch(100.0);

    assert_eq!(switch.evaluate(0.001), Ok(1));
    assert_eq!(switch.evaluate(10.0), Ok(0));
    assert_relative_eq!(switch.resonance_strength(10.0).unwrap(), 29.6);
}

#[test]
fn empty_manifold_is_reported_then_refused() {
    let obs = Observation::new(vec![1.0e6]).unwrap();
    let axis = Axis::new(0.0, 5.0, 50).unwrap();
    let scanner = Scanner::new(&square, &obs, Switch::default());

    let scan = scanner.scan_1d_unobserved(&axis).expect("no resonance is not an error");

    assert_eq!(scan.status(), Status::NoResonantPoints);
    assert!(extract_resonant(&scan).is_empty());
    assert_eq!(
        summarize(&scan),
        Err(ManifoldError::NoResonantPoints { total: 50 })
    );
}

#[test]
fn calibrated_threshold_keeps_requested_share() {
    let obs = Observation::new(vec![4.0]).unwrap();
    let axis = Axis::new(0.0, 5.0, 500).unwrap();
    let scanner = Scanner::new(&square, &obs, Switch::default());
    let scan = scanner.scan_1d_unobserved(&axis).unwrap();

    let threshold = calibrate_threshold(&scan.switch, &scan.residuals, 0.05).unwrap();
    let tuned = scan.with_threshold(threshold).unwrap();

    assert!(tuned.resonant_count() >= 25);
    assert!(tuned.resonant_count() < 30);
    let summary = summarize(&tuned).unwrap();
    assert_abs_diff_eq!(summary.centroid[0], 2.0, epsilon = 0.05);
}

#[test]
fn observer_sees_every_point_once() {
    let obs = Observation::new(vec![4.0]).unwrap();
    let axis = Axis::new(0.0, 5.0, 37).unwrap();
    let scanner = Scanner::new(&square, &obs, Switch::default());

    let mut indices = Vec::new();
    let mut last = 0;
    let scan = scanner
        .scan_1d(&axis, |event: &Event<'_, 1>| {
            indices.push(event.index);
            if event.is_last() {
                last += 1;
            }
            None
        })
        .unwrap();

    assert_eq!(indices, (0..37).collect::<Vec<_>>());
    assert_eq!(last, 1);
    assert_eq!(scan.len(), 37);
}

#[test]
fn model_error_names_the_point() {
    #[derive(Debug, thiserror::Error)]
    #[error("negative input")]
    struct Negative;

    let model = |p: &[f64; 2]| {
        if p[0] < 0.0 {
            Err(Negative)
        } else {
            Ok(vec![p[0] + p[1]])
        }
    };
    let obs = Observation::new(vec![1.0]).unwrap();
    let scanner = Scanner::new(&model, &obs, Switch::default());

    let err = scanner
        .scan_2d_unobserved(&Axis::new(1.0, -1.0, 3).unwrap(), &Axis::new(0.0, 1.0, 4).unwrap())
        .unwrap_err();

    // Rows 0 and 1 (a = 1, 0) succeed, row 2 (a = -1) fails on its first column.
    assert_eq!(err.index(), Some(8));
    assert!(err.to_string().contains("grid point 8"));
}

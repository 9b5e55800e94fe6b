//! Scans a two-parameter line fit with progress logging.
//!
//! Run with `RUST_LOG=debug` to also see the scanner's own summary lines.

use std::{convert::Infallible, error::Error};

use resonance_core::{Axis, Observer, Switch, SwitchConfig, TabulatedDataset};
use resonance_observers::{CancelFlag, LogProgress};
use resonance_scan::{
    Action, Event, Scanner,
    calibrate::calibrate_threshold,
    manifold::{peak, summarize},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let xs = vec![0.1, 0.4, 0.9, 1.3, 2.0, 2.6];
    let values = xs.iter().map(|x| 0.7 + 1.9 * x).collect();
    let data = TabulatedDataset::with_uncertainties(xs.clone(), values, vec![0.1; 6])?;

    let model = move |p: &[f64; 2]| -> Result<Vec<f64>, Infallible> {
        Ok(xs.iter().map(|x| p[0] + p[1] * x).collect())
    };

    let switch = Switch::new(SwitchConfig::default())?;
    let scanner = Scanner::new(&model, data.as_observation(), switch);
    let axis_a = Axis::new(0.0, 2.0, 201)?;
    let axis_b = Axis::new(0.0, 4.0, 201)?;

    let mut progress = LogProgress::every(10_000);
    let mut cancel = CancelFlag::new();
    let scan = scanner.scan_2d(&axis_a, &axis_b, |event: &Event<'_, 2>| -> Option<Action> {
        progress.observe(event).or_else(|| cancel.observe(event))
    })?;

    if let Some(top) = peak(&scan) {
        log::info!(
            "peak strength {:.3e} at a = {:.3}, b = {:.3}",
            top.strength,
            top.coordinates[0],
            top.coordinates[1]
        );
    }

    let threshold = calibrate_threshold(&scan.switch, &scan.residuals, 0.01)?;
    let tuned = scan.with_threshold(threshold)?;
    let summary = summarize(&tuned)?;
    log::info!(
        "threshold {threshold:.1}: {} resonant points, centroid ({:.3}, {:.3}), spread ({:.3}, {:.3})",
        summary.count,
        summary.centroid[0],
        summary.centroid[1],
        summary.spread[0],
        summary.spread[1],
    );

    Ok(())
}

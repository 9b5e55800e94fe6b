use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use resonance_core::Observer;

use crate::traits::CanStopEarly;

/// A shareable cancellation flag.
///
/// Clones share the same flag. Pass one clone to the scan as its observer and
/// keep another to call [`CancelFlag::cancel`] from elsewhere, for example a
/// signal handler or another thread. The scan stops after the point during
/// which the flag was set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clears the flag so the next scan can run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelFlag {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use resonance_core::{Axis, Observation, Switch};
    use resonance_scan::{Error, Scanner};

    #[test]
    fn clones_share_state() {
        let flag = CancelFlag::new();
        let other = flag.clone();

        assert!(!other.is_cancelled());
        flag.cancel();
        assert!(other.is_cancelled());
        other.reset();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn stops_scan_once_set() {
        let flag = CancelFlag::new();
        let trigger = flag.clone();

        // The model itself pulls the trigger past x = 0.5.
        let model = move |p: &[f64; 1]| -> Result<Vec<f64>, Infallible> {
            if p[0] > 0.5 {
                trigger.cancel();
            }
            Ok(vec![p[0]])
        };
        let obs = Observation::new(vec![0.0]).unwrap();
        let scanner = Scanner::new(&model, &obs, Switch::default());
        let axis = Axis::new(0.0, 1.0, 11).unwrap();

        let result = scanner.scan_1d(&axis, flag.clone());

        assert!(matches!(
            result,
            Err(Error::Cancelled {
                completed: 7,
                total: 11
            })
        ));
        assert!(flag.is_cancelled());
    }

    #[test]
    fn idle_flag_lets_scan_finish() {
        let model = |p: &[f64; 1]| -> Result<Vec<f64>, Infallible> { Ok(vec![p[0]]) };
        let obs = Observation::new(vec![0.0]).unwrap();
        let scanner = Scanner::new(&model, &obs, Switch::default());
        let axis = Axis::new(0.0, 1.0, 11).unwrap();

        let scan = scanner.scan_1d(&axis, CancelFlag::new()).unwrap();

        assert_eq!(scan.len(), 11);
    }
}

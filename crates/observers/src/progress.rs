use log::Level;
use resonance_core::Observer;

use crate::traits::{HasProgress, HasResonance};

/// Logs scan progress at a fixed stride.
///
/// Every `n`-th point, and the last one, produce a single log record with the
/// completed count, the percentage done, and the number of resonant points
/// seen so far. The observer never steers the scan.
///
/// # Example
///
/// ```rust,ignore
/// let scan = scanner.scan_2d(&axis_a, &axis_b, LogProgress::every(1000))?;
/// ```
#[derive(Debug, Clone)]
pub struct LogProgress {
    every: usize,
    level: Level,
    resonant: usize,
}

impl LogProgress {
    /// Logs every `n` points at `info` level.
    ///
    /// A stride of zero is treated as one.
    #[must_use]
    pub fn every(n: usize) -> Self {
        Self {
            every: n.max(1),
            level: Level::Info,
            resonant: 0,
        }
    }

    /// Sets the level of the emitted records.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the number of resonant points seen in the current scan.
    #[must_use]
    pub fn resonant_seen(&self) -> usize {
        self.resonant
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasProgress + HasResonance,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.index() == 0 {
            self.resonant = 0;
        }
        if event.is_resonant() {
            self.resonant += 1;
        }

        let completed = event.completed();
        if completed % self.every == 0 || event.is_last() {
            #[allow(clippy::cast_precision_loss)]
            let percent = 100.0 * completed as f64 / event.total() as f64;
            log::log!(
                self.level,
                "scanned {completed}/{} points ({percent:.1}%), {} resonant",
                event.total(),
                self.resonant,
            );
        }
        None
    }
}

use crate::math::stats::SignalStats;
use crate::synthesis::SignalBank;
use log::{debug, info};

/// Routes run progress through the `log` facade under a component name.
#[derive(Debug)]
pub struct LogManager {
    component: String,
}

impl LogManager {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.component, message);
    }

    /// One debug line per signal, then an info line for the joint signal.
    pub fn record_bank(&self, bank: &SignalBank) {
        for (index, row) in bank.matrix().rows().into_iter().enumerate() {
            let samples = row.to_vec();
            let stats = SignalStats::from_samples(&samples);
            debug!(
                "[{}] signal {} at {} Hz: {} samples, peak {:.4}, rms {:.4}",
                self.component,
                index,
                bank.frequencies()[index],
                samples.len(),
                stats.peak,
                stats.rms
            );
        }

        let joint = SignalStats::from_samples(bank.joint());
        info!(
            "[{}] joint of {} signals: {} samples, range [{:.4}, {:.4}], rms {:.4}",
            self.component,
            bank.signal_count(),
            bank.sample_count(),
            joint.min,
            joint.max,
            joint.rms
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("wavecore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TimeBase;
    use crate::synthesis::synthesize;

    #[test]
    fn record_bank_accepts_empty_and_populated_banks() {
        let logger = LogManager::default();
        assert_eq!(logger.component(), "wavecore");

        let time_base = TimeBase::linspace(0.0, 1.0, 16);
        logger.record_bank(&synthesize(&time_base, &[]));
        logger.record_bank(&synthesize(&time_base, &[1.0, 3.0]));
    }
}

use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use wavecore::math::{SignalStats, TimeBase};
use wavecore::synthesis::{synthesize, SignalBank};
use wavecore::telemetry::LogManager;

pub struct WorkflowResult {
    pub time_base: TimeBase,
    pub bank: SignalBank,
    pub signal_stats: Vec<SignalStats>,
    pub joint_stats: SignalStats,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let logger = LogManager::new("runner");
        let synth_config = self.config.to_synth_config();

        let time_base = synth_config.time_base().context("building time base")?;
        let frequencies = synth_config
            .frequency_set()
            .context("resolving frequency list")?;
        logger.record(&format!(
            "synthesizing {} signals over {} samples",
            frequencies.len(),
            time_base.len()
        ));

        let bank = synthesize(&time_base, frequencies.as_slice());
        logger.record_bank(&bank);

        let signal_stats = bank
            .signals()
            .iter()
            .map(|signal| SignalStats::from_samples(&signal.samples))
            .collect();
        let joint_stats = SignalStats::from_samples(bank.joint());

        Ok(WorkflowResult {
            time_base,
            bank,
            signal_stats,
            joint_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_executes_default_workflow() {
        let runner = Runner::new(WorkflowConfig::default());
        let result = runner.execute().unwrap();
        assert_eq!(result.bank.frequencies(), &[10.0, 7.0, 5.0]);
        assert_eq!(result.bank.sample_count(), result.time_base.len());
        assert_eq!(result.signal_stats.len(), 3);
        assert!(result.joint_stats.peak <= 3.0);
    }

    #[test]
    fn runner_rejects_empty_frequency_list() {
        let cfg = WorkflowConfig {
            frequencies_hz: Some(Vec::new()),
            ..Default::default()
        };
        let err = Runner::new(cfg).execute().err().unwrap();
        assert_eq!(err.to_string(), "resolving frequency list");
    }

    #[test]
    fn runner_rejects_sampleless_time_base() {
        let cfg = WorkflowConfig {
            duration_secs: 0.0,
            ..Default::default()
        };
        let err = Runner::new(cfg).execute().err().unwrap();
        assert_eq!(err.to_string(), "building time base");
    }
}

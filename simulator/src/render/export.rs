use crate::workflow::runner::WorkflowResult;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use wavecore::synthesis::Signal;

/// Serializable view of a run for consumers outside this tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotModel {
    pub time_base: Vec<f64>,
    pub signals: Vec<Signal>,
    pub joint: Vec<f64>,
}

impl PlotModel {
    pub fn from_result(result: &WorkflowResult) -> Self {
        Self {
            time_base: result.time_base.as_slice().to_vec(),
            signals: result.bank.signals(),
            joint: result.bank.joint().to_vec(),
        }
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating export file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("writing export file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use std::io::BufReader;

    fn read_model(path: &Path) -> PlotModel {
        let file = File::open(path).unwrap();
        serde_json::from_reader(BufReader::new(file)).unwrap()
    }

    #[test]
    fn export_keeps_signal_order_and_lengths() {
        let cfg = WorkflowConfig {
            duration_secs: 1.0,
            sampling_rate_hz: 64.0,
            frequencies_hz: Some(vec![2.0, 1.0]),
            ..Default::default()
        };
        let result = Runner::new(cfg).execute().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");

        PlotModel::from_result(&result).write_json(&path).unwrap();
        let model = read_model(&path);

        assert_eq!(model.time_base.len(), 64);
        assert_eq!(
            model
                .signals
                .iter()
                .map(|signal| signal.frequency_hz)
                .collect::<Vec<_>>(),
            vec![2.0, 1.0]
        );
        assert!(model.signals.iter().all(|signal| signal.samples.len() == 64));
        assert_eq!(model.joint.len(), 64);
    }
}

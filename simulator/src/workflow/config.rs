use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wavecore::prelude::{SynthConfig, DEFAULT_DURATION_SECS, DEFAULT_SAMPLING_RATE_HZ};

pub const DEFAULT_PLOT_PATH: &str = "wavesum.png";

/// Settings for one run, loadable from YAML and overridable from the command line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub duration_secs: f64,
    pub sampling_rate_hz: f64,
    pub frequencies_hz: Option<Vec<f64>>,
    pub plot: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            sampling_rate_hz: DEFAULT_SAMPLING_RATE_HZ,
            frequencies_hz: None,
            plot: Some(PathBuf::from(DEFAULT_PLOT_PATH)),
            export: None,
            width: 1200,
            height: 900,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub duration_secs: Option<f64>,
    pub sampling_rate_hz: Option<f64>,
    pub frequencies_hz: Option<Vec<f64>>,
    pub plot: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(duration) = overrides.duration_secs {
            self.duration_secs = duration;
        }
        if let Some(rate) = overrides.sampling_rate_hz {
            self.sampling_rate_hz = rate;
        }
        if overrides.frequencies_hz.is_some() {
            self.frequencies_hz = overrides.frequencies_hz;
        }
        if overrides.plot.is_some() {
            self.plot = overrides.plot;
        }
        if overrides.export.is_some() {
            self.export = overrides.export;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        self
    }

    pub fn to_synth_config(&self) -> SynthConfig {
        SynthConfig {
            duration_secs: self.duration_secs,
            sampling_rate_hz: self.sampling_rate_hz,
            frequencies_hz: self.frequencies_hz.clone(),
        }
    }
}

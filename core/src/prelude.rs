use crate::math::timebase::TimeBase;
use crate::synthesis::frequency::FrequencySet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_SECS: f64 = 5.0;
pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 1000.0;

/// Parameters for a single synthesis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub duration_secs: f64,
    pub sampling_rate_hz: f64,
    /// `None` selects the default frequency list.
    pub frequencies_hz: Option<Vec<f64>>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            sampling_rate_hz: DEFAULT_SAMPLING_RATE_HZ,
            frequencies_hz: None,
        }
    }
}

impl SynthConfig {
    pub fn time_base(&self) -> WaveResult<TimeBase> {
        TimeBase::uniform(self.duration_secs, self.sampling_rate_hz)
    }

    pub fn frequency_set(&self) -> WaveResult<FrequencySet> {
        FrequencySet::resolve(self.frequencies_hz.clone())
    }
}

/// Errors raised while assembling the inputs of a run.
///
/// Synthesis itself cannot fail; every variant here is produced before it
/// starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("invalid time base: {0}")]
    InvalidTimeBase(String),
    #[error("frequency list is empty")]
    EmptyFrequencySet,
    #[error("invalid frequency: {0}")]
    InvalidFrequency(String),
}

pub type WaveResult<T> = Result<T, WaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_spans_five_seconds_at_one_khz() {
        let config = SynthConfig::default();
        let time_base = config.time_base().unwrap();
        assert_eq!(time_base.len(), 5000);
        assert_eq!(config.frequency_set().unwrap().as_slice(), &[10.0, 7.0, 5.0]);
    }

    #[test]
    fn explicit_empty_frequencies_are_rejected() {
        let config = SynthConfig {
            frequencies_hz: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(config.frequency_set(), Err(WaveError::EmptyFrequencySet));
    }
}

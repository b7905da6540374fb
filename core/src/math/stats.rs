use serde::{Deserialize, Serialize};

/// Summary of a waveform's amplitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub rms: f64,
    /// Largest absolute sample value.
    pub peak: f64,
}

impl SignalStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for &value in samples {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            sum_sq += value * value;
        }

        let len = samples.len() as f64;
        Self {
            min,
            max,
            mean: sum / len,
            rms: (sum_sq / len).sqrt(),
            peak: min.abs().max(max.abs()),
        }
    }
}

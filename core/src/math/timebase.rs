use crate::prelude::{WaveError, WaveResult};
use ndarray::Array1;

/// Largest sample count `uniform` will allocate.
pub const MAX_SAMPLES: usize = 1 << 28;

/// Ordered, uniformly spaced sample instants shared by every signal of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    samples: Array1<f64>,
    stop: f64,
}

impl TimeBase {
    /// `count` instants covering the half-open interval `[start, stop)`.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Self {
        let step = if count > 0 {
            (stop - start) / count as f64
        } else {
            0.0
        };
        let samples = Array1::from_shape_fn(count, |i| start + i as f64 * step);
        Self { samples, stop }
    }

    /// Time base spanning `[0, duration_secs)` at `sampling_rate_hz`.
    pub fn uniform(duration_secs: f64, sampling_rate_hz: f64) -> WaveResult<Self> {
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(WaveError::InvalidTimeBase(format!(
                "duration must be a finite non-negative number of seconds, got {}",
                duration_secs
            )));
        }
        if !sampling_rate_hz.is_finite() || sampling_rate_hz < 0.0 {
            return Err(WaveError::InvalidTimeBase(format!(
                "sampling rate must be a finite non-negative frequency, got {}",
                sampling_rate_hz
            )));
        }

        let count = (duration_secs * sampling_rate_hz).round();
        if count < 1.0 {
            return Err(WaveError::InvalidTimeBase(format!(
                "{} s at {} Hz yields no samples",
                duration_secs, sampling_rate_hz
            )));
        }

        if count > MAX_SAMPLES as f64 {
            return Err(WaveError::InvalidTimeBase(format!(
                "{} s at {} Hz needs {:e} samples, limit is {}",
                duration_secs, sampling_rate_hz, count, MAX_SAMPLES
            )));
        }

        Ok(Self::linspace(0.0, duration_secs, count as usize))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.samples.as_slice().unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub(crate) fn view(&self) -> ndarray::ArrayView1<'_, f64> {
        self.samples.view()
    }

    /// Spacing between consecutive instants.
    pub fn step(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }
        Some(self.samples[1] - self.samples[0])
    }

    /// Exclusive end of the covered interval.
    pub fn span(&self) -> f64 {
        self.stop
    }
}

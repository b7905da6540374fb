use crate::math::timebase::TimeBase;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One sine wave sampled over a time base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub frequency_hz: f64,
    pub samples: Vec<f64>,
}

/// Per-frequency signals of a run together with their joint signal.
///
/// Row `i` of the signal matrix belongs to the `i`-th requested frequency and
/// every row has the time base's length.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBank {
    frequencies: Vec<f64>,
    signals: Array2<f64>,
    joint: Array1<f64>,
}

/// Evaluates `sin(2π·f·t)` for every frequency over `time_base` and sums the
/// results sample by sample.
///
/// No validation is done here. An empty `frequencies` slice produces no
/// signals and an all-zero joint signal of the time base's length.
pub fn synthesize(time_base: &TimeBase, frequencies: &[f64]) -> SignalBank {
    let times = time_base.view();
    let signals = Array2::from_shape_fn((frequencies.len(), times.len()), |(row, col)| {
        (2.0 * PI * frequencies[row] * times[col]).sin()
    });
    let joint = signals.sum_axis(Axis(0));

    SignalBank {
        frequencies: frequencies.to_vec(),
        signals,
        joint,
    }
}

impl SignalBank {
    pub fn signal_count(&self) -> usize {
        self.signals.nrows()
    }

    pub fn sample_count(&self) -> usize {
        self.joint.len()
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn signal_row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.signals.nrows()).then(|| self.signals.row(index))
    }

    pub fn signal(&self, index: usize) -> Option<Signal> {
        self.signal_row(index).map(|row| Signal {
            frequency_hz: self.frequencies[index],
            samples: row.to_vec(),
        })
    }

    /// Signals in the order their frequencies were supplied.
    pub fn signals(&self) -> Vec<Signal> {
        (0..self.signal_count())
            .filter_map(|index| self.signal(index))
            .collect()
    }

    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.signals.view()
    }

    pub fn joint(&self) -> &[f64] {
        self.joint.as_slice().unwrap_or(&[])
    }

    pub fn into_parts(self) -> (Vec<Signal>, Vec<f64>) {
        let signals = self.signals();
        (signals, self.joint.to_vec())
    }
}

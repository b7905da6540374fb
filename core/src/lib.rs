//! Sine-wave synthesis core for the wavesum tools.
//!
//! The modules build a uniform time base, evaluate one sine signal per
//! requested frequency over it, and sum the signals into their joint
//! waveform. Rendering and argument handling live in the driver crates.

pub mod math;
pub mod prelude;
pub mod synthesis;
pub mod telemetry;

pub use math::TimeBase;
pub use prelude::{SynthConfig, WaveError, WaveResult};
pub use synthesis::{synthesize, FrequencySet, Signal, SignalBank};

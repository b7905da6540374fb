pub mod bank;
pub mod frequency;

pub use bank::{synthesize, Signal, SignalBank};
pub use frequency::FrequencySet;

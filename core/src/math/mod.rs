pub mod stats;
pub mod timebase;

pub use stats::SignalStats;
pub use timebase::TimeBase;

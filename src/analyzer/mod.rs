// Analyzer module: signal classification and the fetch-then-classify pipeline.

pub mod signal_engine;
pub mod pipeline;

pub use pipeline::analyze_token;
pub use signal_engine::{Analyzer, SignalEngine};

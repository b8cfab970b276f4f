//! @ai:module:intent Per-run samples and their per-method aggregation
//! @ai:module:layer application
//! @ai:module:public_api RunSample, MethodResult, Metadata, MethodAccumulator, stats, mean_or_zero

pub mod aggregator;
pub mod types;

pub use aggregator::{mean_or_zero, stats, MethodAccumulator};
pub use types::{Metadata, MethodResult, RunSample};

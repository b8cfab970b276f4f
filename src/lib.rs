//! @ai:module:intent AA benchmark sweep harness library
//! @ai:module:layer application
//! @ai:module:public_api config, method, runner, collector, metrics, controller, report, harness

pub mod collector;
pub mod config;
pub mod controller;
pub mod error;
pub mod harness;
pub mod method;
pub mod metrics;
pub mod report;
pub mod runner;

pub use collector::StatCollector;
pub use config::SweepConfig;
pub use controller::{SweepController, SweepOutcome};
pub use error::{HarnessError, Result};
pub use harness::run_sweep;
pub use method::Method;
pub use metrics::{mean_or_zero, stats, Metadata, MethodResult, RunSample};
pub use report::{Report, ReportGenerator};
pub use runner::{BinarySampleSource, SampleSource, SweepExecutor};

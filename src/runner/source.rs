//! @ai:module:intent Boundary between the sweep and the effectful sample producer
//! @ai:module:layer application
//! @ai:module:public_api SampleSource, BinarySampleSource

use crate::collector::StatCollector;
use crate::error::Result;
use crate::method::Method;
use crate::metrics::{Metadata, RunSample};
use crate::runner::executor::SweepExecutor;

/// @ai:intent Produces one sample per call and the device metadata
#[allow(async_fn_in_trait)]
pub trait SampleSource {
    /// @ai:intent Run one iteration of a method and return its counters
    async fn run_sample(&self, method: Method, iteration: u32) -> Result<RunSample>;

    /// @ai:intent Read the GPU and driver reported by the latest run
    fn read_metadata(&self) -> Result<Metadata>;
}

/// @ai:intent Sample source backed by the real rendering binary
pub struct BinarySampleSource {
    executor: SweepExecutor,
    collector: StatCollector,
}

impl BinarySampleSource {
    /// @ai:intent Combine an executor with the collector for its artifact
    /// @ai:effects pure
    pub fn new(executor: SweepExecutor, collector: StatCollector) -> Self {
        Self {
            executor,
            collector,
        }
    }
}

impl SampleSource for BinarySampleSource {
    /// @ai:intent Execute the binary, then parse the artifact it left behind
    /// @ai:effects io, fs:read, fs:write
    async fn run_sample(&self, method: Method, iteration: u32) -> Result<RunSample> {
        tracing::info!("Running AA with method: {} (iteration {})", method, iteration + 1);
        self.executor.execute(method).await?;
        let sample = self.collector.read_sample()?;
        tracing::debug!(
            "{} iteration {}: {:.2} us",
            method,
            iteration + 1,
            sample.average_frame_time_us
        );
        Ok(sample)
    }

    fn read_metadata(&self) -> Result<Metadata> {
        self.collector.read_metadata()
    }
}

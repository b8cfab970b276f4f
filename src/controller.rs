//! @ai:module:intent Sequential sweep over the configured AA methods
//! @ai:module:layer application
//! @ai:module:public_api SweepController, SweepOutcome
//! @ai:module:stateless false

use crate::error::{HarnessError, Result};
use crate::method::Method;
use crate::metrics::{Metadata, MethodAccumulator, MethodResult};
use crate::runner::SampleSource;

/// @ai:intent Results of a completed sweep, in method order
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub results: Vec<MethodResult>,
    /// As read after the last method.
    pub metadata: Metadata,
}

/// @ai:intent Drives a sample source through every method and iteration
pub struct SweepController<S: SampleSource> {
    source: S,
    methods: Vec<Method>,
    iterations: u32,
}

impl<S: SampleSource> SweepController<S> {
    /// @ai:intent Create a controller
    /// @ai:pre methods is non-empty and iterations >= 1
    /// @ai:effects pure
    pub fn new(source: S, methods: Vec<Method>, iterations: u32) -> Result<Self> {
        if methods.is_empty() {
            return Err(HarnessError::Argument("No AA methods selected.".to_string()));
        }
        if iterations == 0 {
            return Err(HarnessError::Argument(
                "Iterations must be at least 1.".to_string(),
            ));
        }

        Ok(Self {
            source,
            methods,
            iterations,
        })
    }

    /// @ai:intent Sample one method `iterations` times and aggregate it
    /// @ai:effects io
    async fn sweep_method(&self, method: Method) -> Result<(MethodResult, Metadata)> {
        let mut accumulator = MethodAccumulator::new(method);

        for iteration in 0..self.iterations {
            let sample = self.source.run_sample(method, iteration).await?;
            accumulator.push(&sample);
        }

        let metadata = self.source.read_metadata()?;
        Ok((accumulator.finish(), metadata))
    }

    /// @ai:intent Run the whole sweep; the first failure aborts it
    /// @ai:post results hold one entry per method, in method order
    /// @ai:effects io
    pub async fn run(&self) -> Result<SweepOutcome> {
        let mut results = Vec::with_capacity(self.methods.len());
        let mut metadata = Metadata::default();

        for (i, &method) in self.methods.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Sweeping {} ({} iterations)",
                i + 1,
                self.methods.len(),
                method,
                self.iterations
            );

            let (result, method_metadata) = self.sweep_method(method).await?;

            tracing::info!(
                "{}: avg {:.2} us, stdev {:.2} us, gpu cycles {:.0}, bw read {:.0}, bw write {:.0}",
                result.method,
                result.avg_frame_time_us,
                result.stdev_frame_time_us,
                result.avg_gpu_cycles,
                result.avg_bandwidth_read,
                result.avg_bandwidth_write
            );

            results.push(result);
            metadata = method_metadata;
        }

        Ok(SweepOutcome { results, metadata })
    }

    /// @ai:intent Give the sample source back
    /// @ai:effects pure
    pub fn into_source(self) -> S {
        self.source
    }
}

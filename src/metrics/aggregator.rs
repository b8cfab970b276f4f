//! @ai:module:intent Statistical aggregation for per-method samples
//! @ai:module:layer application
//! @ai:module:public_api stats, mean_or_zero, MethodAccumulator
//! @ai:module:stateless true

use crate::method::Method;
use crate::metrics::types::{MethodResult, RunSample};

/// @ai:intent Mean and unbiased sample standard deviation
/// @ai:pre values is non-empty; an empty slice yields (0.0, 0.0)
/// @ai:post stddev is 0.0 when fewer than two values exist
/// @ai:effects pure
pub fn stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let mean = mean_or_zero(values);

    if values.len() < 2 {
        return (mean, 0.0);
    }

    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let variance = sum_sq / (values.len() - 1) as f64;

    (mean, variance.sqrt())
}

/// @ai:intent Arithmetic mean, 0.0 for an empty slice
/// @ai:effects pure
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// @ai:intent Collects the samples of one method until it is finished
#[derive(Debug, Clone)]
pub struct MethodAccumulator {
    method: Method,
    frame_times: Vec<f64>,
    gpu_cycles: Vec<f64>,
    bandwidth_read: Vec<f64>,
    bandwidth_write: Vec<f64>,
}

impl MethodAccumulator {
    /// @ai:intent Start an empty accumulator for a method
    /// @ai:effects pure
    pub fn new(method: Method) -> Self {
        Self {
            method,
            frame_times: Vec::new(),
            gpu_cycles: Vec::new(),
            bandwidth_read: Vec::new(),
            bandwidth_write: Vec::new(),
        }
    }

    /// @ai:intent Record one sample; absent counters are skipped
    /// @ai:effects pure
    pub fn push(&mut self, sample: &RunSample) {
        self.frame_times.push(sample.average_frame_time_us);
        self.gpu_cycles.extend(sample.gpu_cycles);
        self.bandwidth_read.extend(sample.bandwidth_read);
        self.bandwidth_write.extend(sample.bandwidth_write);
    }

    /// @ai:intent Fold the recorded samples into a method result
    /// @ai:effects pure
    pub fn finish(self) -> MethodResult {
        let (avg, stdev) = stats(&self.frame_times);

        MethodResult {
            method: self.method,
            samples: self.frame_times.len() as u32,
            avg_frame_time_us: avg,
            stdev_frame_time_us: stdev,
            avg_gpu_cycles: mean_or_zero(&self.gpu_cycles),
            avg_bandwidth_read: mean_or_zero(&self.bandwidth_read),
            avg_bandwidth_write: mean_or_zero(&self.bandwidth_write),
        }
    }
}

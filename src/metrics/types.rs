//! @ai:module:intent Metric types for AA benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api RunSample, MethodResult, Metadata
//! @ai:module:stateless true

use crate::method::Method;
use serde::{Deserialize, Serialize};

/// @ai:intent Counters parsed from one invocation of the rendering binary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSample {
    pub average_frame_time_us: f64,
    pub gpu_cycles: Option<f64>,
    pub bandwidth_read: Option<f64>,
    pub bandwidth_write: Option<f64>,
}

impl RunSample {
    /// @ai:intent Sample carrying only the required frame time
    /// @ai:effects pure
    pub fn from_frame_time(average_frame_time_us: f64) -> Self {
        Self {
            average_frame_time_us,
            ..Default::default()
        }
    }
}

/// @ai:intent Aggregate over every sample taken for one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    pub method: Method,
    pub samples: u32,
    pub avg_frame_time_us: f64,
    pub stdev_frame_time_us: f64,
    /// 0.0 when no sample reported the counter.
    pub avg_gpu_cycles: f64,
    pub avg_bandwidth_read: f64,
    pub avg_bandwidth_write: f64,
}

/// @ai:intent Device description reported by the rendering binary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub gpu: String,
    pub driver_version: String,
}

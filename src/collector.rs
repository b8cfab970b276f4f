//! @ai:module:intent Parse stat artifacts written by the rendering binary
//! @ai:module:layer infrastructure
//! @ai:module:public_api StatCollector
//! @ai:module:stateless true

use crate::error::{HarnessError, Result};
use crate::metrics::{Metadata, RunSample};
use serde::Deserialize;
use std::path::PathBuf;

/// @ai:intent Counter fields of the stat artifact
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatCounters {
    average_frame_time_us: Option<f64>,
    gpu_cycles: Option<f64>,
    bandwidth_read: Option<f64>,
    bandwidth_write: Option<f64>,
}

/// @ai:intent Device fields of the stat artifact
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatDevice {
    gpu: Option<String>,
    driver_version: Option<String>,
}

/// @ai:intent Reads samples and metadata from a local stat artifact
#[derive(Debug, Clone)]
pub struct StatCollector {
    path: PathBuf,
}

impl StatCollector {
    /// @ai:intent Create a collector for the artifact at path
    /// @ai:effects pure
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// @ai:intent Parse the counters of the latest invocation
    /// @ai:post average_frame_time_us is finite and non-negative
    /// @ai:effects fs:read
    pub fn read_sample(&self) -> Result<RunSample> {
        let content = self.read()?;
        parse_sample(&content).map_err(|message| self.parse_error(message))
    }

    /// @ai:intent Parse the GPU name and driver version
    /// @ai:effects fs:read
    pub fn read_metadata(&self) -> Result<Metadata> {
        let content = self.read()?;
        parse_metadata(&content).map_err(|message| self.parse_error(message))
    }

    fn read(&self) -> Result<String> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| self.parse_error(format!("cannot read artifact: {}", e)))?;
        tracing::debug!("Stat artifact {}: {}", self.path.display(), content.trim());
        Ok(content)
    }

    fn parse_error(&self, message: String) -> HarnessError {
        HarnessError::Parse {
            path: self.path.clone(),
            message,
        }
    }
}

/// @ai:intent Extract a run sample from artifact JSON
/// @ai:effects pure
fn parse_sample(content: &str) -> std::result::Result<RunSample, String> {
    let counters: StatCounters = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let average_frame_time_us = counters
        .average_frame_time_us
        .ok_or_else(|| "missing averageFrameTimeUs".to_string())?;

    if !average_frame_time_us.is_finite() || average_frame_time_us < 0.0 {
        return Err(format!(
            "averageFrameTimeUs must be a non-negative number, got {}",
            average_frame_time_us
        ));
    }

    Ok(RunSample {
        average_frame_time_us,
        gpu_cycles: counters.gpu_cycles,
        bandwidth_read: counters.bandwidth_read,
        bandwidth_write: counters.bandwidth_write,
    })
}

/// @ai:intent Extract device metadata from artifact JSON
/// @ai:effects pure
fn parse_metadata(content: &str) -> std::result::Result<Metadata, String> {
    let device: StatDevice = serde_json::from_str(content).map_err(|e| e.to_string())?;

    Ok(Metadata {
        gpu: device.gpu.ok_or_else(|| "missing gpu".to_string())?,
        driver_version: device
            .driver_version
            .ok_or_else(|| "missing driverVersion".to_string())?,
    })
}

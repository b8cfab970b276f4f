//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, ReportDocument, RunEntry
//! @ai:module:stateless true

use crate::error::Result;
use crate::method::Method;
use crate::report::Report;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Generate JSON report from results
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()>;
}

/// @ai:intent Top-level shape of the results file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub runs: Vec<RunEntry>,
}

/// @ai:intent One method's row in the results file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEntry {
    pub method: Method,
    pub avg: f64,
    pub stdev: f64,
    pub width: u32,
    pub height: u32,
    pub gpu: String,
    pub version: String,
    pub gpu_cycles: f64,
    pub bandwidth_read: f64,
    pub bandwidth_write: f64,
}

impl From<&Report> for ReportDocument {
    fn from(report: &Report) -> Self {
        let runs = report
            .results
            .iter()
            .map(|r| RunEntry {
                method: r.method,
                avg: r.avg_frame_time_us,
                stdev: r.stdev_frame_time_us,
                width: report.width,
                height: report.height,
                gpu: report.metadata.gpu.clone(),
                version: report.metadata.driver_version.clone(),
                gpu_cycles: r.avg_gpu_cycles,
                bandwidth_read: r.avg_bandwidth_read,
                bandwidth_write: r.avg_bandwidth_write,
            })
            .collect();

        Self { runs }
    }
}

/// @ai:intent Generates the JSON results file
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Serialize a report with four-space indentation
    /// @ai:effects pure
    pub fn render(&self, report: &Report) -> Result<String> {
        let document = ReportDocument::from(report);
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()> {
        let json = self.render(report)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}

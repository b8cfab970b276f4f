//! @ai:module:intent Report generation for sweep results
//! @ai:module:layer infrastructure
//! @ai:module:public_api Report, ReportGenerator, JsonReporter, MarkdownReporter, ChartGenerator

pub mod charts;
pub mod json_report;
pub mod markdown_report;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use json_report::{JsonReporter, JsonReporterTrait, ReportDocument, RunEntry};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::config::OutputConfig;
use crate::controller::SweepOutcome;
use crate::error::Result;
use crate::metrics::{Metadata, MethodResult};

/// @ai:intent Everything a sweep produced, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub results: Vec<MethodResult>,
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub iterations: u32,
    pub metadata: Metadata,
}

impl Report {
    /// @ai:intent Attach the sweep shape to a finished outcome
    /// @ai:effects pure
    pub fn new(outcome: SweepOutcome, width: u32, height: u32, frames: u32, iterations: u32) -> Self {
        Self {
            results: outcome.results,
            width,
            height,
            frames,
            iterations,
            metadata: outcome.metadata,
        }
    }
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
    charts: ChartGenerator,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
            charts: ChartGenerator::new(),
        }
    }

    /// @ai:intent Write every configured report
    /// @ai:effects fs:write
    pub fn generate_all(&self, report: &Report, output: &OutputConfig) -> Result<()> {
        if let Some(ref path) = output.results {
            create_parent(path)?;
            self.json.generate(report, path)?;
            tracing::info!("Results written to {}", path.display());
        }

        if let Some(ref path) = output.markdown {
            create_parent(path)?;
            self.markdown.generate(report, path)?;
            tracing::info!("Markdown report written to {}", path.display());
        }

        if let Some(ref path) = output.chart {
            create_parent(path)?;
            self.charts.generate(report, path)?;
            tracing::info!("Chart written to {}", path.display());
        }

        Ok(())
    }

    /// @ai:intent Summary table for the console
    /// @ai:effects pure
    pub fn console_table(&self, report: &Report) -> String {
        MarkdownReporter::results_table(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn create_parent(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

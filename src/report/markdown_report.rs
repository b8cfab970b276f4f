//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::Report;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown reports from sweep results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Generate the header with run parameters
    /// @ai:effects pure
    fn generate_summary(report: &Report, date: &str) -> String {
        let mut output = String::new();

        writeln!(output, "# AA Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", date).unwrap();
        writeln!(output, "**GPU:** {}", report.metadata.gpu).unwrap();
        writeln!(output, "**Driver:** {}", report.metadata.driver_version).unwrap();
        writeln!(output, "**Resolution:** {}x{}", report.width, report.height).unwrap();
        writeln!(output, "**Frames:** {}", report.frames).unwrap();
        writeln!(output, "**Iterations:** {}", report.iterations).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Per-method results table
    /// @ai:effects pure
    pub fn results_table(report: &Report) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "| Method | Avg (us) | Stdev (us) | GPU Cycles | BW Read | BW Write |"
        )
        .unwrap();
        writeln!(
            output,
            "|--------|----------|------------|------------|---------|----------|"
        )
        .unwrap();

        for r in &report.results {
            writeln!(
                output,
                "| {} | {:.2} | {:.2} | {:.0} | {:.0} | {:.0} |",
                r.method,
                r.avg_frame_time_us,
                r.stdev_frame_time_us,
                r.avg_gpu_cycles,
                r.avg_bandwidth_read,
                r.avg_bandwidth_write
            )
            .unwrap();
        }

        output
    }

    /// @ai:intent Full document for a report
    /// @ai:effects pure
    pub fn render(&self, report: &Report, date: &str) -> String {
        let mut output = Self::generate_summary(report, date);
        output.push_str("## Results\n\n");
        output.push_str(&Self::results_table(report));
        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()> {
        let date = chrono::Utc::now().to_rfc3339();
        std::fs::write(output_path, self.render(report, &date))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_summary_lists_run_parameters() {
        let summary = MarkdownReporter::generate_summary(&sample_report(), "2026-10-19T00:00:00Z");
        assert!(summary.contains("**Date:** 2026-10-19T00:00:00Z"));
        assert!(summary.contains("**GPU:** Test GPU"));
        assert!(summary.contains("**Resolution:** 1920x1080"));
        assert!(summary.contains("**Iterations:** 3"));
    }

    #[test]
    fn test_table_rows_in_method_order() {
        let table = MarkdownReporter::results_table(&sample_report());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "| none | 11.00 | 1.00 | 0 | 0 | 0 |");
        assert_eq!(
            lines[3],
            "| taaHigh | 14.50 | 0.25 | 2000000 | 1000000000 | 500000000 |"
        );
    }

    #[test]
    fn test_generate_markdown_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("results.md");

        MarkdownReporter::new()
            .generate(&sample_report(), &output)
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("# AA Benchmark Results"));
        assert!(content.contains("## Results"));
    }
}

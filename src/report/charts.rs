//! @ai:module:intent Chart generation for sweep results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::error::{HarnessError, Result};
use crate::report::Report;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Render the frame time chart to a PNG file
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()>;
}

/// @ai:intent Draws mean frame time per method with stddev whiskers
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Upper bound of the y axis with some headroom
    /// @ai:effects pure
    fn y_max(report: &Report) -> f64 {
        let peak = report
            .results
            .iter()
            .map(|r| r.avg_frame_time_us + r.stdev_frame_time_us)
            .fold(0.0, f64::max);

        if peak > 0.0 {
            peak * 1.15
        } else {
            1.0
        }
    }

    /// @ai:intent Generate frame time bar chart
    /// @ai:effects fs:write
    fn generate_frame_time_chart(&self, report: &Report, output_path: &Path) -> anyhow::Result<()> {
        let width = (report.results.len() as u32 * 70).max(800);
        let root = BitMapBackend::new(output_path, (width, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let count = report.results.len() as i32;
        let caption = format!(
            "AA frame time, {} ({}x{})",
            report.metadata.gpu, report.width, report.height
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d((0..count).into_segmented(), 0f64..Self::y_max(report))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(report.results.len())
            .y_desc("Frame time (us)")
            .x_desc("Method")
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) => report
                    .results
                    .get(*i as usize)
                    .map(|r| r.method.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(report.results.iter().enumerate().map(|(i, r)| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), r.avg_frame_time_us),
                ],
                BLUE.mix(0.7).filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))?;

        chart.draw_series(report.results.iter().enumerate().map(|(i, r)| {
            let i = i as i32;
            PathElement::new(
                vec![
                    (
                        SegmentValue::CenterOf(i),
                        (r.avg_frame_time_us - r.stdev_frame_time_us).max(0.0),
                    ),
                    (
                        SegmentValue::CenterOf(i),
                        r.avg_frame_time_us + r.stdev_frame_time_us,
                    ),
                ],
                BLACK.stroke_width(2),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate the frame time chart
    /// @ai:effects fs:write
    fn generate(&self, report: &Report, output_path: &Path) -> Result<()> {
        self.generate_frame_time_chart(report, output_path)
            .map_err(|e| HarnessError::Chart(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use tempfile::TempDir;

    #[test]
    fn test_y_max_leaves_headroom() {
        let report = sample_report();
        assert!((ChartGenerator::y_max(&report) - 14.75 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_y_max_of_empty_report() {
        let mut report = sample_report();
        report.results.clear();
        assert_eq!(ChartGenerator::y_max(&report), 1.0);
    }

    #[test]
    fn test_generate_chart() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("frame_time.png");

        generator.generate(&sample_report(), &output).unwrap();

        assert!(output.exists());
    }
}

//! @ai:module:intent CLI for the AA benchmark sweep
//! @ai:module:layer presentation

use aa_bench::{
    config::SweepConfig, harness::run_sweep, method::Method, report::Report, ReportGenerator,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aa-bench")]
#[command(about = "Run the AA benchmark sweep against a headless rendering binary")]
#[command(version)]
struct Cli {
    /// The 2 input images to test
    #[arg(long, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Path to binary
    #[arg(long)]
    binary: Option<PathBuf>,

    /// Resolution X
    #[arg(long)]
    width: Option<u32>,

    /// Resolution Y
    #[arg(long)]
    height: Option<u32>,

    /// Number of frames
    #[arg(long)]
    frames: Option<u32>,

    /// Number of iterations per method (default 1)
    #[arg(long)]
    iterations: Option<u32>,

    /// Remove the stat artifact from the device after running
    #[arg(long)]
    cleanup: bool,

    /// Store results JSON
    #[arg(long)]
    results: Option<PathBuf>,

    /// Where to find the builtin assets/shaders
    #[arg(long)]
    builtin: Option<PathBuf>,

    /// Helper library for HW counters
    #[arg(long)]
    hw_counter_lib: Option<PathBuf>,

    /// Pull the stat artifact from an adb device after each run
    #[arg(long)]
    device_pull: bool,

    /// adb executable used for device transfers
    #[arg(long)]
    adb: Option<PathBuf>,

    /// Stat artifact path on the device
    #[arg(long)]
    remote_stat: Option<String>,

    /// Restrict the sweep to these methods (comma-separated)
    #[arg(long)]
    methods: Option<String>,

    /// Abort when a single run takes longer than this
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Store a Markdown report
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Store a PNG frame time chart
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aa_bench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        return ExitCode::from(e.exit_code());
    }

    match run_sweep(&config).await {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Sweep aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// @ai:intent Merge the optional config file with command line overrides
/// @ai:effects fs:read
fn build_config(cli: Cli) -> Result<SweepConfig> {
    let mut config = match cli.config {
        Some(ref path) => SweepConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SweepConfig::default(),
    };

    if !cli.images.is_empty() {
        config.binary.images = cli.images;
    }
    if let Some(binary) = cli.binary {
        config.binary.path = binary;
    }
    if let Some(builtin) = cli.builtin {
        config.binary.builtin = Some(builtin);
    }
    if let Some(lib) = cli.hw_counter_lib {
        config.binary.hw_counter_lib = Some(lib);
    }

    if let Some(width) = cli.width {
        config.run.width = width;
    }
    if let Some(height) = cli.height {
        config.run.height = height;
    }
    if let Some(frames) = cli.frames {
        config.run.frames = frames;
    }
    if let Some(iterations) = cli.iterations {
        config.run.iterations = iterations;
    }
    if let Some(ref methods) = cli.methods {
        config.run.methods = Method::parse_list(methods)?;
    }
    if cli.timeout_secs.is_some() {
        config.run.timeout_secs = cli.timeout_secs;
    }

    config.device.pull |= cli.device_pull;
    config.device.cleanup |= cli.cleanup;
    if let Some(adb) = cli.adb {
        config.device.adb = adb;
    }
    if let Some(remote) = cli.remote_stat {
        config.device.remote_stat = remote;
    }

    if cli.results.is_some() {
        config.output.results = cli.results;
    }
    if cli.markdown.is_some() {
        config.output.markdown = cli.markdown;
    }
    if cli.chart.is_some() {
        config.output.chart = cli.chart;
    }

    Ok(config)
}

/// @ai:intent Print per-method results to the console
/// @ai:effects io
fn print_summary(report: &Report) {
    println!();
    println!(
        "AA sweep on {} (driver {}), {}x{}, {} frames, {} iterations",
        report.metadata.gpu,
        report.metadata.driver_version,
        report.width,
        report.height,
        report.frames,
        report.iterations
    );
    println!();
    print!("{}", ReportGenerator::new().console_table(report));
}

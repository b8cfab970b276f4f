//! @ai:module:intent Wires config, executor, collector and controller into one sweep
//! @ai:module:layer application
//! @ai:module:public_api run_sweep

use crate::collector::StatCollector;
use crate::config::SweepConfig;
use crate::controller::SweepController;
use crate::error::Result;
use crate::method::Method;
use crate::report::{Report, ReportGenerator};
use crate::runner::{BinarySampleSource, DeviceTransfer, SweepCommand, SweepExecutor};
use std::time::Duration;
use tempfile::NamedTempFile;

/// @ai:intent Run the full sweep described by config and write its reports
/// @ai:pre config passes validate()
/// @ai:post on error no report file has been written
/// @ai:effects io, fs:read, fs:write
pub async fn run_sweep(config: &SweepConfig) -> Result<Report> {
    config.validate()?;

    let stat_file = NamedTempFile::new()?;
    let stat_path = stat_file.path().to_path_buf();
    tracing::debug!("Local stat artifact: {}", stat_path.display());

    let device = DeviceTransfer::from_config(&config.device);
    let executor = SweepExecutor::new(SweepCommand::from_config(config, &stat_path), &stat_path)
        .with_device(device.clone())
        .with_timeout(config.run.timeout_secs.map(Duration::from_secs));
    let source = BinarySampleSource::new(executor, StatCollector::new(&stat_path));

    let methods = Method::in_sweep_order(&config.run.methods);
    let controller = SweepController::new(source, methods, config.run.iterations)?;
    let outcome = controller.run().await?;

    if config.device.cleanup {
        if let Some(ref device) = device {
            if let Err(e) = device.remove_remote().await {
                tracing::warn!("Failed to remove {} from device: {}", device.remote(), e);
            }
        }
    }

    if let Err(e) = stat_file.close() {
        tracing::warn!("Failed to remove {}: {}", stat_path.display(), e);
    }

    let report = Report::new(
        outcome,
        config.run.width,
        config.run.height,
        config.run.frames,
        config.run.iterations,
    );
    ReportGenerator::new().generate_all(&report, &config.output)?;

    Ok(report)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::HarnessError;
    use crate::report::ReportDocument;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const REMOTE_STAT: &str = "/sdcard/aa-bench/stat.json";

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn config(dir: &Path, binary: PathBuf) -> SweepConfig {
        let mut config = SweepConfig::default();
        config.binary.path = binary;
        config.binary.images = vec![dir.join("a.png"), dir.join("b.png")];
        config.run.width = 64;
        config.run.height = 64;
        config.run.frames = 1;
        config.run.methods = vec![Method::Fxaa];
        config.output.results = Some(dir.join("results.json"));
        config
    }

    /// Logs every adb call; `pull` writes an artifact, `shell` exits with `rm_status`.
    fn stub_adb(dir: &Path, rm_status: i32) -> PathBuf {
        let body = format!(
            r#"echo "adb $*" >> "$(dirname "$0")/adb.log"
case "$1" in
    pull) printf '{{"averageFrameTimeUs": 5, "gpu": "Stub GPU", "driverVersion": "1.0"}}' > "$3" ;;
    shell) exit {} ;;
esac"#,
            rm_status
        );
        script(dir, "adb", &body)
    }

    fn device_config(dir: &Path, rm_status: i32) -> SweepConfig {
        let binary = script(dir, "render.sh", "exit 0");
        let mut config = config(dir, binary);
        config.device.pull = true;
        config.device.cleanup = true;
        config.device.adb = stub_adb(dir, rm_status);
        config.device.remote_stat = REMOTE_STAT.to_string();
        config
    }

    fn adb_calls(dir: &Path) -> Vec<String> {
        std::fs::read_to_string(dir.join("adb.log"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_artifact_missing_on_later_iteration_fails_sweep() {
        let temp = TempDir::new().unwrap();
        let binary = script(
            temp.path(),
            "render.sh",
            r#"dir="$(dirname "$0")"
while [ $# -gt 0 ]; do
    case "$1" in
        --stat) stat="$2"; shift 2 ;;
        *) shift ;;
    esac
done
if [ ! -e "$dir/ran" ]; then
    touch "$dir/ran"
    printf '{"averageFrameTimeUs": 7, "gpu": "Stub GPU", "driverVersion": "1.0"}' > "$stat"
fi"#,
        );
        let mut config = config(temp.path(), binary);
        config.run.iterations = 3;

        let result = run_sweep(&config).await;

        assert!(matches!(result, Err(HarnessError::Parse { .. })));
        assert!(!temp.path().join("results.json").exists());
    }

    #[tokio::test]
    async fn test_cleanup_removes_remote_artifact_after_sweep() {
        let temp = TempDir::new().unwrap();
        let config = device_config(temp.path(), 0);

        let report = run_sweep(&config).await.unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.metadata.gpu, "Stub GPU");
        let calls = adb_calls(temp.path());
        assert!(calls[0].starts_with(&format!("adb pull {} ", REMOTE_STAT)));
        assert_eq!(
            calls.last().unwrap(),
            &format!("adb shell rm -f {}", REMOTE_STAT)
        );
    }

    #[tokio::test]
    async fn test_failed_cleanup_still_writes_report() {
        let temp = TempDir::new().unwrap();
        let config = device_config(temp.path(), 1);

        let report = run_sweep(&config).await.unwrap();

        assert_eq!(report.results[0].method, Method::Fxaa);
        let content = std::fs::read_to_string(temp.path().join("results.json")).unwrap();
        let document: ReportDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document.runs.len(), 1);
        assert_eq!(document.runs[0].avg, 5.0);
        assert_eq!(
            adb_calls(temp.path()).last().unwrap(),
            &format!("adb shell rm -f {}", REMOTE_STAT)
        );
    }
}

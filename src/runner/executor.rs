//! @ai:module:intent Runs the rendering binary once per iteration
//! @ai:module:layer infrastructure
//! @ai:module:public_api SweepExecutor
//! @ai:module:stateless true

use crate::error::{HarnessError, Result};
use crate::method::Method;
use crate::runner::command::SweepCommand;
use crate::runner::device::DeviceTransfer;
use std::path::PathBuf;
use std::time::Duration;

/// @ai:intent Executes one invocation and leaves its artifact at the local stat path
#[derive(Debug, Clone)]
pub struct SweepExecutor {
    command: SweepCommand,
    local_stat: PathBuf,
    device: Option<DeviceTransfer>,
    timeout: Option<Duration>,
}

impl SweepExecutor {
    /// @ai:intent Create an executor without device transfer or timeout
    /// @ai:effects pure
    pub fn new(command: SweepCommand, local_stat: impl Into<PathBuf>) -> Self {
        Self {
            command,
            local_stat: local_stat.into(),
            device: None,
            timeout: None,
        }
    }

    /// @ai:intent Pull the artifact from a device after every run
    /// @ai:effects pure
    pub fn with_device(mut self, device: Option<DeviceTransfer>) -> Self {
        self.device = device;
        self
    }

    /// @ai:intent Kill and fail runs that outlive the timeout
    /// @ai:effects pure
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// @ai:intent Remove the previous run's artifact so a missing one cannot be re-read
    /// @ai:effects fs:write
    fn clear_local_stat(&self) -> Result<()> {
        match std::fs::remove_file(&self.local_stat) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// @ai:intent Run the binary for a method, then fetch the artifact if remote
    /// @ai:post the local stat path holds this run's artifact
    /// @ai:effects io, fs:write
    pub async fn execute(&self, method: Method) -> Result<()> {
        let command_line = self.command.display_for(method);
        tracing::debug!("Executing: {}", command_line);

        self.clear_local_stat()?;

        let mut child = self
            .command
            .to_command(method)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| HarnessError::Spawn {
                command: command_line.clone(),
                source: e,
            })?;

        let status = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait())
                .await
                .map_err(|_| HarnessError::Timeout {
                    command: command_line.clone(),
                    secs: limit.as_secs(),
                })??,
            None => child.wait().await?,
        };

        if !status.success() {
            return Err(HarnessError::ProcessExecution {
                command: command_line,
                status: status.to_string(),
            });
        }

        if let Some(ref device) = self.device {
            device.pull(&self.local_stat).await?;
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::SweepConfig;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn executor(binary: PathBuf, stat: &Path) -> SweepExecutor {
        let mut config = SweepConfig::default();
        config.binary.path = binary;
        config.binary.images = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        config.run.width = 64;
        config.run.height = 64;
        config.run.frames = 1;
        SweepExecutor::new(SweepCommand::from_config(&config, stat), stat)
    }

    #[tokio::test]
    async fn test_successful_run() {
        let temp = TempDir::new().unwrap();
        let binary = script(temp.path(), "ok.sh", "exit 0");
        let stat = temp.path().join("stat.json");

        executor(binary, &stat).execute(Method::Fxaa).await.unwrap();
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_fatal() {
        let temp = TempDir::new().unwrap();
        let binary = script(temp.path(), "fail.sh", "exit 3");
        let stat = temp.path().join("stat.json");

        let err = executor(binary, &stat)
            .execute(Method::None)
            .await
            .unwrap_err();
        match err {
            HarnessError::ProcessExecution { command, .. } => {
                assert!(command.ends_with("--aa-method none"))
            }
            other => panic!("expected process error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let stat = temp.path().join("stat.json");

        let err = executor(temp.path().join("missing"), &stat)
            .execute(Method::None)
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_timeout_kills_hung_binary() {
        let temp = TempDir::new().unwrap();
        let binary = script(temp.path(), "hang.sh", "exec sleep 30");
        let stat = temp.path().join("stat.json");

        let err = executor(binary, &stat)
            .with_timeout(Some(Duration::from_millis(200)))
            .execute(Method::TaaLow)
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_device_pull_runs_after_binary() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("calls.log");
        let binary = script(
            temp.path(),
            "bench.sh",
            &format!("echo bench >> {}", log.display()),
        );
        let adb = script(
            temp.path(),
            "adb.sh",
            &format!("echo \"adb $1 $2\" >> {}\necho '{{}}' > \"$3\"", log.display()),
        );
        let stat = temp.path().join("stat.json");

        executor(binary, &stat)
            .with_device(Some(DeviceTransfer::new(adb, "/data/local/tmp/granite/stat.json")))
            .execute(Method::SmaaHigh)
            .await
            .unwrap();

        let calls = std::fs::read_to_string(&log).unwrap();
        assert_eq!(calls, "bench\nadb pull /data/local/tmp/granite/stat.json\n");
        assert!(stat.exists());
    }

    #[tokio::test]
    async fn test_failed_pull_is_fatal() {
        let temp = TempDir::new().unwrap();
        let binary = script(temp.path(), "ok.sh", "exit 0");
        let adb = script(temp.path(), "adb.sh", "exit 1");
        let stat = temp.path().join("stat.json");

        let err = executor(binary, &stat)
            .with_device(Some(DeviceTransfer::new(adb, "/remote/stat.json")))
            .execute(Method::None)
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Transfer { .. }));
    }

    #[tokio::test]
    async fn test_previous_artifact_removed_before_run() {
        let temp = TempDir::new().unwrap();
        let binary = script(temp.path(), "silent.sh", "exit 0");
        let stat = temp.path().join("stat.json");
        std::fs::write(&stat, r#"{"averageFrameTimeUs": 10}"#).unwrap();

        executor(binary, &stat).execute(Method::Fxaa).await.unwrap();

        assert!(!stat.exists());
    }
}

//! @ai:module:intent Stat artifact transfer from a remote device over adb
//! @ai:module:layer infrastructure
//! @ai:module:public_api DeviceTransfer
//! @ai:module:stateless true

use crate::config::DeviceConfig;
use crate::error::{HarnessError, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// @ai:intent Copies the stat artifact off the device after each run
#[derive(Debug, Clone)]
pub struct DeviceTransfer {
    adb: PathBuf,
    remote: String,
}

impl DeviceTransfer {
    /// @ai:intent Create a transfer for the configured remote artifact
    /// @ai:effects pure
    pub fn new(adb: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            adb: adb.into(),
            remote: remote.into(),
        }
    }

    /// @ai:intent Transfer described by config, or None when pulling is disabled
    /// @ai:effects pure
    pub fn from_config(config: &DeviceConfig) -> Option<Self> {
        config
            .pull
            .then(|| Self::new(config.adb.clone(), config.remote_stat.clone()))
    }

    /// @ai:intent Remote artifact path
    /// @ai:effects pure
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// @ai:intent Pull the remote artifact over the local path
    /// @ai:effects io, fs:write
    pub async fn pull(&self, local: &Path) -> Result<()> {
        tracing::debug!("Pulling {} to {}", self.remote, local.display());

        let status = Command::new(&self.adb)
            .arg("pull")
            .arg(&self.remote)
            .arg(local)
            .status()
            .await
            .map_err(|e| HarnessError::Transfer {
                remote: self.remote.clone(),
                status: e.to_string(),
            })?;

        if !status.success() {
            return Err(HarnessError::Transfer {
                remote: self.remote.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }

    /// @ai:intent Delete the remote artifact
    /// @ai:effects io
    pub async fn remove_remote(&self) -> Result<()> {
        let status = Command::new(&self.adb)
            .args(["shell", "rm", "-f"])
            .arg(&self.remote)
            .status()
            .await
            .map_err(|e| HarnessError::Spawn {
                command: format!("{} shell rm -f {}", self.adb.display(), self.remote),
                source: e,
            })?;

        if !status.success() {
            return Err(HarnessError::ProcessExecution {
                command: format!("{} shell rm -f {}", self.adb.display(), self.remote),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

//! @ai:module:intent Configuration structs for the AA benchmark sweep
//! @ai:module:layer infrastructure
//! @ai:module:public_api SweepConfig, BinaryConfig, RunConfig, DeviceConfig, OutputConfig
//! @ai:module:stateless true

use crate::error::HarnessError;
use crate::method::Method;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for one benchmark sweep
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub binary: BinaryConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// @ai:intent The rendering binary and the inputs handed to it
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryConfig {
    #[serde(default = "default_binary")]
    pub path: PathBuf,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    pub builtin: Option<PathBuf>,
    pub hw_counter_lib: Option<PathBuf>,
}

/// @ai:intent Sweep shape: resolution, frame count, iterations and methods
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Zero means "not configured".
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub frames: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Always held in sweep order.
    #[serde(default = "default_methods", deserialize_with = "deserialize_methods")]
    pub methods: Vec<Method>,
    /// Unbounded wait when unset.
    pub timeout_secs: Option<u64>,
}

/// @ai:intent Remote device settings for pulling the stat artifact
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub pull: bool,
    #[serde(default = "default_adb")]
    pub adb: PathBuf,
    #[serde(default = "default_remote_stat")]
    pub remote_stat: String,
    #[serde(default)]
    pub cleanup: bool,
    /// Passed as --hw-counter-lib instead of the local path when pulling.
    #[serde(default = "default_remote_hw_counter_lib")]
    pub remote_hw_counter_lib: String,
}

/// @ai:intent Destinations for the rendered reports
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub results: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    pub chart: Option<PathBuf>,
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            path: default_binary(),
            images: Vec::new(),
            builtin: None,
            hw_counter_lib: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            frames: 0,
            iterations: default_iterations(),
            methods: default_methods(),
            timeout_secs: None,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            pull: false,
            adb: default_adb(),
            remote_stat: default_remote_stat(),
            cleanup: false,
            remote_hw_counter_lib: default_remote_hw_counter_lib(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("./tools/aa-bench-headless")
}

fn default_iterations() -> u32 {
    1
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

fn deserialize_methods<'de, D>(deserializer: D) -> Result<Vec<Method>, D::Error>
where
    D: Deserializer<'de>,
{
    let selected = Vec::<Method>::deserialize(deserializer)?;
    Ok(Method::in_sweep_order(&selected))
}

fn default_adb() -> PathBuf {
    PathBuf::from("adb")
}

fn default_remote_stat() -> String {
    "/data/local/tmp/granite/stat.json".to_string()
}

fn default_remote_hw_counter_lib() -> String {
    "/data/local/tmp/granite/hwcounter.so".to_string()
}

impl SweepConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Reject configurations the sweep cannot run with
    /// @ai:effects pure
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.binary.images.len() != 2 {
            return Err(HarnessError::Argument("Need --images.".to_string()));
        }

        if self.run.width == 0 || self.run.height == 0 || self.run.frames == 0 {
            return Err(HarnessError::Argument(
                "Need width, height and frames.".to_string(),
            ));
        }

        if self.run.iterations == 0 {
            return Err(HarnessError::Argument(
                "Iterations must be at least 1.".to_string(),
            ));
        }

        if self.run.methods.is_empty() {
            return Err(HarnessError::Argument("No AA methods selected.".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SweepConfig {
        let mut config = SweepConfig::default();
        config.binary.images = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        config.run.width = 1920;
        config.run.height = 1080;
        config.run.frames = 100;
        config
    }

    #[test]
    fn test_defaults_sweep_every_method_once() {
        let config = SweepConfig::default();
        assert_eq!(config.run.iterations, 1);
        assert_eq!(config.run.methods, Method::ALL.to_vec());
        assert!(!config.device.pull);
        assert_eq!(config.binary.path, PathBuf::from("./tools/aa-bench-headless"));
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_two_images() {
        let mut config = valid_config();
        config.binary.images.pop();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Need --images"));
    }

    #[test]
    fn test_validate_requires_resolution_and_frames() {
        let mut config = valid_config();
        config.run.frames = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Need width, height and frames"));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let mut config = valid_config();
        config.run.iterations = 0;
        assert!(matches!(config.validate(), Err(HarnessError::Argument(_))));
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("sweep.toml");
        std::fs::write(
            &path,
            r#"
[run]
width = 1280
height = 720
frames = 50
methods = ["fxaa", "taaHigh"]

[device]
pull = true
"#,
        )
        .unwrap();

        let config = SweepConfig::load(&path).unwrap();
        assert_eq!(config.run.width, 1280);
        assert_eq!(config.run.iterations, 1);
        assert_eq!(config.run.methods, vec![Method::Fxaa, Method::TaaHigh]);
        assert!(config.device.pull);
        assert_eq!(config.device.remote_stat, "/data/local/tmp/granite/stat.json");
    }

    #[test]
    fn test_load_puts_methods_in_sweep_order() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("sweep.toml");
        std::fs::write(
            &path,
            r#"
[run]
methods = ["taaHigh", "fxaa", "fxaa"]
"#,
        )
        .unwrap();

        let config = SweepConfig::load(&path).unwrap();
        assert_eq!(config.run.methods, vec![Method::Fxaa, Method::TaaHigh]);
    }
}

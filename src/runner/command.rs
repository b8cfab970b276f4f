//! @ai:module:intent Command line construction for the rendering binary
//! @ai:module:layer application
//! @ai:module:public_api SweepCommand
//! @ai:module:stateless true

use crate::config::SweepConfig;
use crate::method::Method;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Read by the rendering binary to locate builtin shaders and assets.
pub const BUILTIN_DIRECTORY_ENV: &str = "GRANITE_DEFAULT_BUILTIN_DIRECTORY";

/// @ai:intent Base invocation shared by every method of a sweep
#[derive(Debug, Clone)]
pub struct SweepCommand {
    program: PathBuf,
    base_args: Vec<OsString>,
    envs: Vec<(String, OsString)>,
}

impl SweepCommand {
    /// @ai:intent Build the base invocation from config and the local stat path
    /// @ai:pre config has been validated
    /// @ai:effects pure
    pub fn from_config(config: &SweepConfig, stat_path: &Path) -> Self {
        let run = &config.run;
        let mut base_args: Vec<OsString> = vec![
            "--frames".into(),
            run.frames.to_string().into(),
            "--width".into(),
            run.width.to_string().into(),
            "--height".into(),
            run.height.to_string().into(),
            "--input-images".into(),
        ];
        base_args.extend(config.binary.images.iter().map(|p| p.clone().into_os_string()));
        base_args.push("--stat".into());
        base_args.push(stat_path.as_os_str().to_owned());

        if let Some(ref lib) = config.binary.hw_counter_lib {
            base_args.push("--hw-counter-lib".into());
            if config.device.pull {
                base_args.push(config.device.remote_hw_counter_lib.clone().into());
            } else {
                base_args.push(lib.clone().into_os_string());
            }
        }

        let envs = config
            .binary
            .builtin
            .iter()
            .map(|dir| (BUILTIN_DIRECTORY_ENV.to_string(), dir.clone().into_os_string()))
            .collect();

        Self {
            program: config.binary.path.clone(),
            base_args,
            envs,
        }
    }

    /// @ai:intent Environment overrides for the child process
    /// @ai:effects pure
    pub fn envs(&self) -> &[(String, OsString)] {
        &self.envs
    }

    /// @ai:intent Full argument list for one method
    /// @ai:effects pure
    pub fn args_for(&self, method: Method) -> Vec<OsString> {
        let mut args = self.base_args.clone();
        args.push("--aa-method".into());
        args.push(method.as_str().into());
        args
    }

    /// @ai:intent Human-readable command line for logs and errors
    /// @ai:effects pure
    pub fn display_for(&self, method: Method) -> String {
        std::iter::once(self.program.as_os_str().to_owned())
            .chain(self.args_for(method))
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// @ai:intent Ready-to-spawn process for one method
    /// @ai:effects pure
    pub fn to_command(&self, method: Method) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(self.args_for(method));
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command
    }
}

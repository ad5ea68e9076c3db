use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{ConfigError, RegisterScriptConfig};
use crate::script::DevicePath;

/// Generate a bash script that loads coefficients into device registers
pub struct RegisterScriptGenerator {
    config: RegisterScriptConfig,
    device: DevicePath,
}

impl RegisterScriptGenerator {
    pub fn new(config: RegisterScriptConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let device = DevicePath::from_config(&config);
        Ok(Self { config, device })
    }

    pub fn config(&self) -> &RegisterScriptConfig {
        &self.config
    }

    pub fn device(&self) -> &DevicePath {
        &self.device
    }

    /// Generate the complete script text.
    ///
    /// Output depends only on the configuration, so regenerating with the
    /// same settings yields byte-identical text.
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("#!/bin/bash\n");
        output.push_str(&format!("input={}\n", self.config.input_path));
        output.push_str(&self.generate_register_paths());
        output.push('\n');
        output.push_str(&format!("echo \"{}\"\n", self.config.start_message));
        output.push_str("mapfile -t a < \"$input\"\n");
        output.push_str(&self.generate_register_writes());
        output.push('\n');
        output.push_str(&format!("echo \"{}\"\n", self.config.done_message));

        output
    }

    fn generate_register_paths(&self) -> String {
        let mut output = String::new();
        for i in 0..self.config.register_count {
            output.push_str(&format!("register{}=\"{}\"\n", i, self.device.register(i)));
        }
        output
    }

    fn generate_register_writes(&self) -> String {
        let mut output = String::new();
        // The driver strips commas and whitespace before parsing the value
        for i in 0..self.config.register_count {
            output.push_str(&format!(
                "echo \"$(({}#${{a[{}]}}))\",| tee \"$register{}\" > /dev/null;\n",
                self.config.radix, i, i
            ));
        }
        output
    }

    /// Write the script to `path` and mark it executable.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let script = self.generate();

        fs::write(path, &script)
            .context(format!("Failed to write register script to: {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755))
                .context(format!("Failed to set permissions on: {}", path.display()))?;
        }

        tracing::info!(
            "Wrote {} register(s) for {} to {}",
            self.config.register_count,
            self.device.device_name(),
            path.display()
        );
        Ok(())
    }
}

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::RegisterScriptConfig;
use crate::constants;
use crate::script::RegisterScriptGenerator;
use crate::tools::{BaseToolImpl, Tool, ToolParameter, ToolSchema};

/// Tool for generating the register programming script
pub struct RegisterScriptTool {
    base: BaseToolImpl,
    config: RegisterScriptConfig,
}

impl RegisterScriptTool {
    pub fn new(config: RegisterScriptConfig) -> Self {
        let parameters = vec![
            ToolParameter {
                name: "register_count".to_string(),
                param_type: "integer".to_string(),
                description: "Number of device registers to program".to_string(),
                required: false,
                default: Some(serde_json::json!(config.register_count)),
            },
            ToolParameter {
                name: "major_number".to_string(),
                param_type: "integer".to_string(),
                description: "Major number of the driver, as shown under /sys/class".to_string(),
                required: false,
                default: Some(serde_json::json!(config.major_number)),
            },
            ToolParameter {
                name: "input_file".to_string(),
                param_type: "string".to_string(),
                description: "Coefficient file read by the script at runtime".to_string(),
                required: false,
                default: Some(serde_json::json!(config.input_path)),
            },
            ToolParameter {
                name: "output_file".to_string(),
                param_type: "string".to_string(),
                description: "Path of the generated script".to_string(),
                required: false,
                default: Some(serde_json::json!(config.output_path.display().to_string())),
            },
            ToolParameter {
                name: "radix".to_string(),
                param_type: "integer".to_string(),
                description: "Base of the coefficient values in the input file".to_string(),
                required: false,
                default: Some(serde_json::json!(config.radix)),
            },
            ToolParameter {
                name: "write".to_string(),
                param_type: "boolean".to_string(),
                description: "Write the script to output_file; when false the script text is returned".to_string(),
                required: false,
                default: Some(serde_json::Value::Bool(true)),
            },
        ];

        let base = BaseToolImpl::new(
            constants::TOOL_REGISTER_SCRIPT.to_string(),
            "Generate a bash script that writes coefficients from an input file into sequentially numbered sysfs register attributes.".to_string(),
            parameters,
        );

        Self { base, config }
    }

    fn config_from_arguments(&self, arguments: &serde_json::Value) -> Result<RegisterScriptConfig> {
        let mut config = self.config.clone();

        if let Some(v) = arguments.get("register_count") {
            let count = v.as_u64().context("'register_count' must be a non-negative integer")?;
            config.register_count = usize::try_from(count).context("'register_count' is too large")?;
        }
        if let Some(v) = arguments.get("major_number") {
            let major = v.as_u64().context("'major_number' must be a non-negative integer")?;
            config.major_number = u32::try_from(major).context("'major_number' is too large")?;
        }
        if let Some(v) = arguments.get("radix") {
            let radix = v.as_u64().context("'radix' must be a non-negative integer")?;
            config.radix = u32::try_from(radix).context("'radix' is too large")?;
        }
        if let Some(v) = arguments.get("input_file").and_then(|v| v.as_str()) {
            config.input_path = v.to_string();
        }
        if let Some(v) = arguments.get("output_file").and_then(|v| v.as_str()) {
            config.output_path = PathBuf::from(v);
        }

        Ok(config)
    }
}

impl Tool for RegisterScriptTool {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn schema(&self) -> ToolSchema {
        self.base.schema.clone()
    }

    fn execute(&self, arguments: &serde_json::Value) -> Result<String> {
        let config = self.config_from_arguments(arguments)?;
        let write = arguments
            .get("write")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        let generator = RegisterScriptGenerator::new(config)?;

        if !write {
            return Ok(generator.generate());
        }

        let output_path = generator.config().output_path.clone();
        generator.write_to(&output_path)?;

        let mut report = String::new();
        report.push_str("=== Register Script Generated ===\n");
        report.push_str(&format!("Output file: {}\n", output_path.display()));
        report.push_str(&format!("Input file:  {}\n", generator.config().input_path));
        report.push_str(&format!("Device:      {}\n", generator.device().device_name()));
        report.push_str(&format!("Registers:   {}\n", generator.config().register_count));

        Ok(report)
    }
}

use anyhow::Result;
use std::path::Path;

use crate::config::{FilesetConfig, ListingOrder};
use crate::constants;
use crate::fileset::FilesetLister;
use crate::tools::{BaseToolImpl, Tool, ToolParameter, ToolSchema};

/// Tool that lists VHDL sources of a folder as `add_fileset_file` directives
pub struct ListFilesetTool {
    base: BaseToolImpl,
    config: FilesetConfig,
}

impl ListFilesetTool {
    pub fn new(config: FilesetConfig) -> Self {
        let parameters = vec![
            ToolParameter {
                name: "directory".to_string(),
                param_type: "string".to_string(),
                description: "Folder to scan for VHDL sources (defaults to the current directory)".to_string(),
                required: false,
                default: Some(serde_json::Value::String(".".to_string())),
            },
            ToolParameter {
                name: "sorted".to_string(),
                param_type: "boolean".to_string(),
                description: "Sort filenames lexicographically instead of keeping directory order".to_string(),
                required: false,
                default: Some(serde_json::Value::Bool(config.order == ListingOrder::Sorted)),
            },
        ];

        let base = BaseToolImpl::new(
            constants::TOOL_LIST_FILESET.to_string(),
            format!(
                "List '{}' files containing one of {:?} and none of {:?} as Platform Designer add_fileset_file directives.",
                config.extension, config.includes, config.excludes
            ),
            parameters,
        );

        Self { base, config }
    }
}

impl Tool for ListFilesetTool {
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
        let directory = arguments
            .get("directory")
            .and_then(|v| v.as_str())
            .unwrap_or(".");

        let mut config = self.config.clone();
        if let Some(sorted) = arguments.get("sorted").and_then(|v| v.as_bool()) {
            config.order = if sorted {
                ListingOrder::Sorted
            } else {
                ListingOrder::Directory
            };
        }
        config.validate()?;

        FilesetLister::from_config(&config).generate(Path::new(directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_fileset_tool() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["DSBF_core.vhd", "DSBF_core_avalon.vhd", "pkg_types.vhd", "readme.txt"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let tool = ListFilesetTool::new(FilesetConfig::default());
        let args = serde_json::json!({
            "directory": temp_dir.path().to_str().unwrap(),
        });

        let result = tool.execute(&args).unwrap();

        assert_eq!(
            result,
            "add_fileset_file DSBF_core.vhd VHDL PATH DSBF_core.vhd\n\
             add_fileset_file pkg_types.vhd VHDL PATH pkg_types.vhd\n"
        );
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let tool = ListFilesetTool::new(FilesetConfig::default());
        let args = serde_json::json!({
            "directory": temp_dir.path().join("gone").to_str().unwrap(),
        });

        assert!(tool.execute(&args).is_err());
    }
}

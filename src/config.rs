use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Fileset extension must not be empty")]
    EmptyExtension,

    #[error("Fileset {0} list contains an empty substring, which would match every name")]
    EmptySubstring(&'static str),

    #[error("Input radix {0} is outside the range bash accepts ({min}..={max})", min = constants::MIN_RADIX, max = constants::MAX_RADIX)]
    InvalidRadix(u32),

    #[error("Device class prefix must not be empty")]
    EmptyClassPrefix,

    #[error("Field '{field}' contains characters that are unsafe in a shell script: {value:?}")]
    UnsafeShellText { field: &'static str, value: String },
}

/// Order in which qualifying filenames are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrder {
    /// Lexicographic byte order, stable across platforms
    #[default]
    Sorted,
    /// Whatever order the OS returns directory entries in
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesetConfig {
    pub extension: String,
    pub excludes: Vec<String>,
    pub includes: Vec<String>,
    pub order: ListingOrder,
}

impl Default for FilesetConfig {
    fn default() -> Self {
        Self {
            extension: constants::DEFAULT_EXTENSION.to_string(),
            excludes: constants::DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            includes: constants::DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
            order: ListingOrder::default(),
        }
    }
}

impl FilesetConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        if self.excludes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::EmptySubstring("exclusion"));
        }
        if self.includes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::EmptySubstring("inclusion"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterScriptConfig {
    pub register_count: usize,
    /// Driver major number; differs between kernels, check /sys/class
    pub major_number: u32,
    pub sysfs_root: String,
    pub class_prefix: String,
    pub attribute_prefix: String,
    pub output_path: PathBuf,
    pub input_path: String,
    pub radix: u32,
    pub start_message: String,
    pub done_message: String,
}

impl Default for RegisterScriptConfig {
    fn default() -> Self {
        Self {
            register_count: constants::DEFAULT_REGISTER_COUNT,
            major_number: constants::DEFAULT_MAJOR_NUMBER,
            sysfs_root: constants::DEFAULT_SYSFS_ROOT.to_string(),
            class_prefix: constants::DEFAULT_CLASS_PREFIX.to_string(),
            attribute_prefix: constants::DEFAULT_ATTRIBUTE_PREFIX.to_string(),
            output_path: PathBuf::from(constants::DEFAULT_SCRIPT_PATH),
            input_path: constants::DEFAULT_INPUT_PATH.to_string(),
            radix: constants::DEFAULT_INPUT_RADIX,
            start_message: constants::DEFAULT_START_MESSAGE.to_string(),
            done_message: constants::DEFAULT_DONE_MESSAGE.to_string(),
        }
    }
}

impl RegisterScriptConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(constants::MIN_RADIX..=constants::MAX_RADIX).contains(&self.radix) {
            return Err(ConfigError::InvalidRadix(self.radix));
        }
        if self.class_prefix.is_empty() {
            return Err(ConfigError::EmptyClassPrefix);
        }

        // The input path is emitted unquoted, the rest inside double quotes
        check_shell_text("input_path", &self.input_path, true)?;
        check_shell_text("sysfs_root", &self.sysfs_root, false)?;
        check_shell_text("class_prefix", &self.class_prefix, false)?;
        check_shell_text("attribute_prefix", &self.attribute_prefix, false)?;
        check_shell_text("start_message", &self.start_message, false)?;
        check_shell_text("done_message", &self.done_message, false)?;
        Ok(())
    }
}

fn check_shell_text(
    field: &'static str,
    value: &str,
    unquoted: bool,
) -> std::result::Result<(), ConfigError> {
    let unsafe_char = |c: char| {
        matches!(c, '"' | '$' | '`' | '\\' | '\n' | '\r')
            || (unquoted && (c.is_whitespace() || matches!(c, '\'' | ';' | '&' | '|' | '<' | '>')))
    };
    if value.chars().any(unsafe_char) {
        return Err(ConfigError::UnsafeShellText {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub fileset: FilesetConfig,
    pub register_script: RegisterScriptConfig,
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.fileset.validate()?;
        self.register_script.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fileset.extension, ".vhd");
        assert_eq!(config.fileset.order, ListingOrder::Sorted);
        assert_eq!(config.register_script.register_count, 512);
        assert_eq!(config.register_script.major_number, 248);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "register_script": { "major_number": 250, "register_count": 4 },
                 "fileset": { "order": "directory" } }"#,
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.register_script.major_number, 250);
        assert_eq!(config.register_script.register_count, 4);
        assert_eq!(config.register_script.class_prefix, "fe_DPRAM");
        assert_eq!(config.fileset.order, ListingOrder::Directory);
        assert_eq!(config.fileset.includes, vec!["DSBF", "pkg"]);
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = GeneratorConfig::from_file(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_radix_bounds() {
        let mut config = RegisterScriptConfig::default();
        config.radix = 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadix(1)));
        config.radix = 65;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadix(65)));
        config.radix = 64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_extension_rejected() {
        let config = FilesetConfig {
            extension: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyExtension));
    }

    #[test]
    fn test_empty_substrings_rejected() {
        let config = FilesetConfig {
            excludes: vec!["_avalon".to_string(), String::new()],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySubstring("exclusion")));

        let config = FilesetConfig {
            includes: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySubstring("inclusion")));

        // An empty exclusion list is fine, it just excludes nothing
        let config = FilesetConfig {
            excludes: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsafe_shell_text_rejected() {
        let mut config = RegisterScriptConfig::default();
        config.input_path = "/root/my coefficients.txt".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsafeShellText { field: "input_path", .. })
        ));

        let mut config = RegisterScriptConfig::default();
        config.done_message = "done \"now\"".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsafeShellText { field: "done_message", .. })
        ));
    }
}

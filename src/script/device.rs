use crate::config::RegisterScriptConfig;

/// Location of a driver's per-register sysfs attributes.
///
/// The driver registers both its class and its device as
/// `<class_prefix>_<major>`, so register `i` lives at
/// `<sysfs_root>/<name>/<name>/<attribute_prefix><i>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePath {
    pub sysfs_root: String,
    pub class_prefix: String,
    pub major_number: u32,
    pub attribute_prefix: String,
}

impl DevicePath {
    pub fn from_config(config: &RegisterScriptConfig) -> Self {
        Self {
            sysfs_root: config.sysfs_root.trim_end_matches('/').to_string(),
            class_prefix: config.class_prefix.clone(),
            major_number: config.major_number,
            attribute_prefix: config.attribute_prefix.clone(),
        }
    }

    pub fn device_name(&self) -> String {
        format!("{}_{}", self.class_prefix, self.major_number)
    }

    pub fn register(&self, index: usize) -> String {
        let name = self.device_name();
        format!(
            "{}/{}/{}/{}{}",
            self.sysfs_root, name, name, self.attribute_prefix, index
        )
    }
}

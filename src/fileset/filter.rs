use crate::config::FilesetConfig;

/// Filename predicate for VHDL sources that belong in a fileset.
///
/// A name qualifies when it ends with the extension, contains none of the
/// exclusion substrings and at least one of the inclusion substrings.
#[derive(Debug, Clone, PartialEq)]
pub struct FilesetFilter {
    extension: String,
    excludes: Vec<String>,
    includes: Vec<String>,
}

impl FilesetFilter {
    pub fn new(extension: String, excludes: Vec<String>, includes: Vec<String>) -> Self {
        Self {
            extension,
            excludes,
            includes,
        }
    }

    pub fn from_config(config: &FilesetConfig) -> Self {
        Self::new(
            config.extension.clone(),
            config.excludes.clone(),
            config.includes.clone(),
        )
    }

    pub fn matches(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
            && !self.excludes.iter().any(|s| name.contains(s.as_str()))
            && self.includes.iter().any(|s| name.contains(s.as_str()))
    }
}

impl Default for FilesetFilter {
    fn default() -> Self {
        Self::from_config(&FilesetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = FilesetFilter::default();

        assert!(filter.matches("DSBF_core.vhd"));
        assert!(filter.matches("pkg_types.vhd"));
        assert!(filter.matches("my_DSBF_pkg.vhd"));

        // exclusion wins over inclusion
        assert!(!filter.matches("DSBF_core_avalon.vhd"));
        assert!(!filter.matches("readme.txt"));
        assert!(!filter.matches("DSBF_core.vhdl"));
        assert!(!filter.matches("counter.vhd"));
        // matching is case sensitive
        assert!(!filter.matches("dsbf_core.vhd"));
    }

    #[test]
    fn test_empty_includes_match_nothing() {
        let filter = FilesetFilter::new(".vhd".to_string(), vec![], vec![]);
        assert!(!filter.matches("DSBF_core.vhd"));
    }

    #[test]
    fn test_custom_rules() {
        let filter = FilesetFilter::new(
            ".sv".to_string(),
            vec!["_tb".to_string(), "_sim".to_string()],
            vec!["fir".to_string()],
        );
        assert!(filter.matches("fir_top.sv"));
        assert!(!filter.matches("fir_top_tb.sv"));
        assert!(!filter.matches("fir_sim_model.sv"));
        assert!(!filter.matches("fir_top.vhd"));
    }
}

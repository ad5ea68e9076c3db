pub mod config;
pub mod constants;
pub mod fileset;
pub mod script;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigError, FilesetConfig, GeneratorConfig, ListingOrder, RegisterScriptConfig};
pub use fileset::{FilesetDirective, FilesetFilter, FilesetLister};
pub use script::{DevicePath, RegisterScriptGenerator};

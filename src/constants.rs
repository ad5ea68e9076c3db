// Tool names
pub const TOOL_LIST_FILESET: &str = "list_vhdl_fileset";
pub const TOOL_REGISTER_SCRIPT: &str = "generate_register_script";

// Fileset defaults
pub const DEFAULT_EXTENSION: &str = ".vhd";
pub const DEFAULT_EXCLUDES: &[&str] = &["_avalon"];
pub const DEFAULT_INCLUDES: &[&str] = &["DSBF", "pkg"];

// Register script defaults
pub const DEFAULT_REGISTER_COUNT: usize = 512;
pub const DEFAULT_MAJOR_NUMBER: u32 = 248;
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class";
pub const DEFAULT_CLASS_PREFIX: &str = "fe_DPRAM";
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "register";
pub const DEFAULT_SCRIPT_PATH: &str = "bash.sh";
pub const DEFAULT_INPUT_PATH: &str = "/root/pFIR/hpf_coefficients.txt";
pub const DEFAULT_INPUT_RADIX: u32 = 16;
pub const DEFAULT_START_MESSAGE: &str = "Programming the FIR filter...";
pub const DEFAULT_DONE_MESSAGE: &str = "FIR filter successfully programmed!";

// Bash arithmetic accepts bases 2 through 64
pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 64;

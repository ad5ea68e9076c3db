pub mod device;
pub mod generator;

pub use device::DevicePath;
pub use generator::RegisterScriptGenerator;

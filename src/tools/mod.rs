pub mod base;
pub mod fileset;
pub mod register_script;

use std::sync::Arc;
use anyhow::Result;

use crate::config::GeneratorConfig;
use crate::constants;

pub use base::{Tool, ToolCall, ToolExecutor, ToolResult, ToolParameter, ToolSchema, BaseToolImpl};
pub use fileset::ListFilesetTool;
pub use register_script::RegisterScriptTool;

pub fn create_tool(tool_name: &str, config: &GeneratorConfig) -> Result<Arc<dyn Tool>> {
    match tool_name {
        constants::TOOL_LIST_FILESET => {
            Ok(Arc::new(ListFilesetTool::new(config.fileset.clone())))
        }
        constants::TOOL_REGISTER_SCRIPT => {
            Ok(Arc::new(RegisterScriptTool::new(config.register_script.clone())))
        }
        _ => Err(anyhow::anyhow!("Unknown tool: {}", tool_name)),
    }
}

/// Executor with every generator registered
pub fn default_executor(config: &GeneratorConfig) -> Result<ToolExecutor> {
    let tools = [constants::TOOL_LIST_FILESET, constants::TOOL_REGISTER_SCRIPT]
        .iter()
        .map(|name| create_tool(name, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(ToolExecutor::new(tools))
}

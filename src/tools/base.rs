use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

fn new_call_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default = "new_call_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: String, arguments: serde_json::Value) -> Self {
        Self {
            id: new_call_id(),
            name,
            arguments,
        }
    }

    pub fn with_id(id: String, name: String, arguments: serde_json::Value) -> Self {
        Self { id, name, arguments }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub content: String,
    pub success: bool,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(tool_call_id: String, content: String) -> Self {
        Self {
            tool_call_id,
            content,
            success: true,
            error: None,
        }
    }

    pub fn error(tool_call_id: String, error: String) -> Self {
        Self {
            tool_call_id,
            content: format!("Error: {}", error),
            success: false,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub param_type: String,
    pub description: String,
    pub required: bool,
    pub default: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> ToolSchema;

    fn execute(&self, arguments: &serde_json::Value) -> Result<String>;

    /// JSON Schema style description of the tool's arguments
    fn to_json_schema(&self) -> serde_json::Value {
        let schema = self.schema();
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &schema.parameters {
            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(param.param_type));
            prop.insert("description".to_string(), serde_json::json!(param.description));

            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }

            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(param.name.clone());
            }
        }

        serde_json::json!({
            "name": schema.name,
            "description": schema.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

pub struct ToolExecutor {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolExecutor {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        let mut tool_map = BTreeMap::new();
        for tool in tools {
            tool_map.insert(tool.name().to_string(), tool);
        }
        Self { tools: tool_map }
    }

    pub fn execute(&self, tool_call: &ToolCall) -> ToolResult {
        match self.tools.get(&tool_call.name) {
            Some(tool) => {
                tracing::debug!("Executing tool '{}' ({})", tool_call.name, tool_call.id);
                match tool.execute(&tool_call.arguments) {
                    Ok(result) => ToolResult::success(tool_call.id.clone(), result),
                    Err(e) => {
                        tracing::error!("Tool '{}' failed: {:#}", tool_call.name, e);
                        ToolResult::error(tool_call.id.clone(), format!("{:#}", e))
                    }
                }
            }
            None => ToolResult::error(
                tool_call.id.clone(),
                format!("Tool '{}' not found", tool_call.name),
            ),
        }
    }

    /// Argument schemas of every registered tool, ordered by name
    pub fn schemas(&self) -> Vec<serde_json::Value> {
        self.tools.values().map(|tool| tool.to_json_schema()).collect()
    }

    pub fn list_tools(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

// Base implementation helper for tools
pub struct BaseToolImpl {
    pub name: String,
    pub description: String,
    pub schema: ToolSchema,
}

impl BaseToolImpl {
    pub fn new(name: String, description: String, parameters: Vec<ToolParameter>) -> Self {
        Self {
            name: name.clone(),
            description: description.clone(),
            schema: ToolSchema {
                name,
                description,
                parameters,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        base: BaseToolImpl,
    }

    impl EchoTool {
        fn new() -> Self {
            let parameters = vec![ToolParameter {
                name: "text".to_string(),
                param_type: "string".to_string(),
                description: "Text to echo".to_string(),
                required: true,
                default: None,
            }];
            Self {
                base: BaseToolImpl::new("echo".to_string(), "Echo text".to_string(), parameters),
            }
        }
    }

    impl Tool for EchoTool {
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
            arguments
                .get("text")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow::anyhow!("Missing 'text' argument"))
        }
    }

    #[test]
    fn test_executor_dispatch() {
        let executor = ToolExecutor::new(vec![Arc::new(EchoTool::new())]);

        let call = ToolCall::with_id("1".to_string(), "echo".to_string(), serde_json::json!({ "text": "hi" }));
        let result = executor.execute(&call);
        assert!(result.success);
        assert_eq!(result.content, "hi");
        assert_eq!(result.tool_call_id, "1");

        let call = ToolCall::new("echo".to_string(), serde_json::json!({}));
        let result = executor.execute(&call);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Missing 'text' argument"));

        let call = ToolCall::new("missing".to_string(), serde_json::json!({}));
        let result = executor.execute(&call);
        assert!(!result.success);
        assert!(result.content.contains("Tool 'missing' not found"));
    }

    #[test]
    fn test_tool_call_without_id_gets_one() {
        let call: ToolCall = serde_json::from_str(r#"{ "name": "echo" }"#).unwrap();
        assert!(!call.id.is_empty());
        assert!(call.arguments.is_null());
    }

    #[test]
    fn test_executor_schemas() {
        let executor = ToolExecutor::new(vec![Arc::new(EchoTool::new())]);
        let schemas = executor.schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0]["description"], "Echo text");
    }

    #[test]
    fn test_json_schema() {
        let schema = EchoTool::new().to_json_schema();
        assert_eq!(schema["name"], "echo");
        assert_eq!(schema["parameters"]["required"][0], "text");
        assert_eq!(schema["parameters"]["properties"]["text"]["type"], "string");
    }
}

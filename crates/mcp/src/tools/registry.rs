// MCP tool definitions and dispatch

use rmcp::model::{CallToolResult, ErrorData, JsonObject, Tool as ToolSchema};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema advertised to MCP clients
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ErrorData>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas
    pub fn list(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Resolve a tool by name and execute it.
    ///
    /// Unknown names surface as a protocol-level invalid-params error, not
    /// an error-flagged tool result.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ErrorData> {
        match self.get(name) {
            Some(tool) => tool.execute(arguments).await,
            None => Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", name),
                None,
            )),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> JsonObject {
    let schema = serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    });
    match schema {
        serde_json::Value::Object(map) => map,
        _ => unreachable!("object literal"),
    }
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

// MCP server wiring for the Hey Bible tools

use crate::tools::{GetImagesTool, GetNotesTool, GetVersesTool, ToolRegistry};
use heybible_client::BibleApi;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use std::sync::Arc;

/// MCP server exposing the Hey Bible read tools.
pub struct HeyBibleServer {
    tools: ToolRegistry,
}

impl HeyBibleServer {
    /// Register the verses, notes, and images tools against the given API
    /// handle.
    pub fn new(api: Arc<dyn BibleApi>) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(GetVersesTool::new(api.clone())));
        tools.register(Arc::new(GetNotesTool::new(api.clone())));
        tools.register(Arc::new(GetImagesTool::new(api)));
        Self { tools }
    }

    /// Resolve and run a tool call. A missing arguments object dispatches
    /// as empty, i.e. the first page of the collection.
    async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        self.tools.dispatch(name, arguments.unwrap_or_default()).await
    }
}

impl ServerHandler for HeyBibleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to Hey Bible: saved verses, user notes, and AI-generated \
                 images."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tools.list(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

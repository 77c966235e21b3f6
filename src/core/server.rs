//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services. Every service reads
//! from the same `Arc<CatalogStore>`, loaded once at startup.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/catalog/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    catalog::CatalogStore,
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "AI tool directory. Use catalog_search to find tools by text, category, pricing or tags (sorted by newest, popular, rating or alphabetical), catalog_get_tool for a full entry, catalog_list_categories and catalog_browse_category to explore categories, and catalog_featured for highlights. Resources under catalog:// expose the same data as JSON; the recommend_tools and compare_tools prompts embed catalog facts.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The directory catalog shared by every domain.
    catalog: Arc<CatalogStore>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,

    /// Tool dispatch for the HTTP transport.
    #[cfg(feature = "http")]
    tool_registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server over a loaded catalog.
    pub fn new(config: Config, catalog: Arc<CatalogStore>) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(catalog.clone()));
        let prompt_service = Arc::new(PromptService::new(catalog.clone()));

        Self {
            tool_router: build_tool_router::<Self>(catalog.clone(), config.clone()),
            #[cfg(feature = "http")]
            tool_registry: Arc::new(ToolRegistry::new(catalog.clone(), config.clone())),
            config,
            catalog,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the catalog the server answers from.
    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// This method uses the ToolRegistry to dispatch to the appropriate
    /// tool handler. Each tool's http_handler is defined in its own file
    /// under `domains/tools/definitions/catalog/`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.tool_registry.call_tool(name, arguments)
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, PromptError> {
        // Convert serde_json::Value to HashMap<String, String>
        let args = arguments.and_then(|v| {
            v.as_object().map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
        });

        let result = self.prompt_service.get_prompt(name, args).await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

fn resource_error(err: ResourceError) -> McpError {
    match err {
        ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
        ResourceError::Internal(_) => McpError::internal_error(err.to_string(), None),
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Convert serde_json::Map to HashMap<String, String>
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(CatalogStore::seed().unwrap()))
    }

    #[test]
    fn test_server_identity() {
        let server = server();
        assert_eq!(server.name(), "ai-tool-directory");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.catalog().list_tools().len(), 6);

        let info = server.get_info();
        assert_eq!(info.instructions.as_deref(), Some(INSTRUCTIONS));
        assert_eq!(info.server_info.name, "ai-tool-directory");
    }

    #[test]
    fn test_list_tools() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 6);
        assert!(tools.iter().any(|t| t["name"] == "catalog_search"));
    }

    #[tokio::test]
    async fn test_read_resource_by_template() {
        let server = server();
        let result = server.read_resource("catalog://tools/chatgpt").await.unwrap();
        assert!(result["contents"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"ChatGPT\""));

        let err = server.read_resource("catalog://tools/unknown").await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert_eq!(
            resource_error(err).code.0,
            McpError::resource_not_found("", None).code.0
        );
    }

    #[tokio::test]
    async fn test_get_prompt_from_json_arguments() {
        let server = server();
        let result = server
            .get_prompt(
                "compare_tools",
                Some(serde_json::json!({ "first": "chatgpt", "second": "github-copilot" })),
            )
            .await
            .unwrap();
        assert_eq!(result["messages"].as_array().unwrap().len(), 1);

        let err = server.get_prompt("compare_tools", None).await.unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument(_)));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_via_registry() {
        let server = server();
        let result = server
            .call_tool("catalog_get_tool", serde_json::json!({ "id": "midjourney" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);

        let err = server
            .call_tool("catalog_nope", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(_)));
    }
}

//! Model Context Protocol binding for the ledger.
//!
//! Exposes the expense operations as tools and the category document as a
//! readable resource. The server is a thin adapter: arguments are decoded by
//! rmcp into the structs in [`args`], handed to [`LedgerService`], and the
//! results are returned as JSON text content.

mod args;

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, ListResourcesResult, PaginatedRequestParams,
    RawResource, ReadResourceRequestParams, ReadResourceResult, Resource, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::application::{AppError, LedgerService};
use crate::domain::{CATEGORIES_MIME_TYPE, CATEGORIES_URI};

pub use args::*;

/// Name the server reports during initialization.
pub const SERVER_NAME: &str = "expense-tracker-mcp-server";

const INSTRUCTIONS: &str = "Personal expense ledger. Use add_expense to record spending, \
list_expenses to see entries in an inclusive date range, and summarize for per-category \
totals. Dates are compared as plain text, so always use YYYY-MM-DD. The suggested \
categories are published as the expense://categories resource.";

#[derive(Clone)]
pub struct ExpenseServer {
    service: Arc<LedgerService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ExpenseServer {
    pub fn new(service: LedgerService) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Add a new expense to the database.")]
    async fn add_expense(
        &self,
        Parameters(args): Parameters<AddExpenseArgs>,
    ) -> Result<CallToolResult, McpError> {
        let recorded = self
            .service
            .record_expense(args.into())
            .await
            .map_err(internal_error)?;
        json_result(&recorded)
    }

    #[tool(description = "List expense entries within an inclusive date range.")]
    async fn list_expenses(
        &self,
        Parameters(args): Parameters<DateRangeArgs>,
    ) -> Result<CallToolResult, McpError> {
        let expenses = self
            .service
            .list_expenses(&args.start_date, &args.end_date)
            .await
            .map_err(internal_error)?;
        json_result(&expenses)
    }

    #[tool(description = "Summarize total expenses by category within an inclusive date range.")]
    async fn summarize(
        &self,
        Parameters(args): Parameters<SummarizeArgs>,
    ) -> Result<CallToolResult, McpError> {
        let totals = self
            .service
            .summarize(&args.start_date, &args.end_date, args.category.as_deref())
            .await
            .map_err(internal_error)?;
        json_result(&totals)
    }

    fn categories_resource() -> Resource {
        let mut resource = RawResource::new(CATEGORIES_URI, "categories".to_string());
        resource.description = Some("Suggested expense categories and subcategories.".to_string());
        resource.mime_type = Some(CATEGORIES_MIME_TYPE.to_string());
        resource.no_annotation()
    }

    fn resource_list() -> ListResourcesResult {
        ListResourcesResult::with_all_items(vec![Self::categories_resource()])
    }

    async fn read_categories(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        if uri != CATEGORIES_URI {
            return Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            ));
        }

        let document = self.service.categories().await.map_err(internal_error)?;
        let declared_type = document.mime_type();
        let mut contents = ResourceContents::text(document.content, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(declared_type.to_string());
        }

        Ok(ReadResourceResult::new(vec![contents]))
    }
}

#[tool_handler]
impl ServerHandler for ExpenseServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(Self::resource_list())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_categories(&request.uri).await
    }
}

/// Serve the ledger over stdin/stdout until the client disconnects.
pub async fn serve_stdio(service: LedgerService) -> anyhow::Result<()> {
    info!(name = SERVER_NAME, "starting tool server on stdio");

    let running = ExpenseServer::new(service)
        .serve(stdio())
        .await
        .inspect_err(|e| error!(error = %e, "tool server failed to start"))?;

    let reason = running.waiting().await?;
    info!(?reason, "tool server stopped");
    Ok(())
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::json(value)?]))
}

fn internal_error(err: AppError) -> McpError {
    McpError::internal_error(err.to_string(), None)
}

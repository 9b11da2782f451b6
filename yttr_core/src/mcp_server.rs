// src/mcp_server.rs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::service::TranscriptService;
use crate::transcript::{flatten_lines, select_track, AUTO_LANG};
use crate::utils::clean_html_entities;
use crate::video_id::VideoId;
use rmcp::model::*;

/// Input/Output structs for tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTranscriptInput {
    /// YouTube video URL or ID (e.g. 'https://www.youtube.com/watch?v=dQw4w9WgXcQ' or 'dQw4w9WgXcQ')
    pub url: String,
    /// Language code for the transcript (e.g. 'ko', 'en'). Defaults to 'auto',
    /// which picks the best available track, preferring manual over generated
    #[serde(default = "default_lang")]
    #[schemars(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    AUTO_LANG.to_string()
}

/// MCP Server exposing the transcript tool over a transcript service
pub struct McpServer {
    service: Arc<dyn TranscriptService>,
}

impl McpServer {
    pub fn new(service: Arc<dyn TranscriptService>) -> Self {
        Self { service }
    }

    pub fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities {
            tools: Some(ToolsCapability::default()),
            ..Default::default()
        }
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        _request: InitializeRequestParam,
    ) -> Result<InitializeResult, ServiceError> {
        info!("MCP Server initializing");

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: self.capabilities(),
            server_info: Implementation {
                name: "yttranscrpter".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Extracts YouTube video transcripts as plain text, preferring manually created tracks over auto-generated ones.".to_string(),
            ),
        })
    }

    /// Handle tools/list request
    pub async fn handle_list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
    ) -> Result<ListToolsResult, ServiceError> {
        let tools = vec![Tool {
            name: Cow::Borrowed("get_transcript"),
            title: None,
            description: Some(Cow::Borrowed(
                "Extract the transcript of a YouTube video as plain text, given its URL or ID. Prioritizes manually created transcripts over auto-generated ones.",
            )),
            input_schema: Arc::new(
                serde_json::to_value(schemars::schema_for!(GetTranscriptInput))
                    .map_err(|e| ServiceError::Other(e.to_string()))?
                    .as_object()
                    .expect("Schema object")
                    .clone(),
            ),
            output_schema: None,
            annotations: None,
            icons: None,
        }];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    /// Handle tools/call request
    pub async fn handle_call_tool(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ServiceError> {
        let name = request.name.as_ref();
        let args = request.arguments.unwrap_or_default();
        let args_map = serde_json::Map::from_iter(args);

        match name {
            "get_transcript" => {
                let input: GetTranscriptInput = serde_json::from_value(Value::Object(args_map))
                    .map_err(|e| ServiceError::InvalidParams(e.to_string()))?;

                match self.get_transcript(&input).await {
                    Ok(text) => Ok(CallToolResult::success(text.into_contents())),
                    // Availability failures are reported as successful calls
                    // carrying an error-shaped text body, so the tool stays
                    // usable when a video simply has no matching transcript.
                    Err(err) if err.is_transcript_error() => {
                        warn!(error = %err, "Transcript processing failed");
                        Ok(CallToolResult::success(
                            format!("Transcript Error: {}", err).into_contents(),
                        ))
                    }
                    Err(err @ ServiceError::InvalidParams(_)) => Err(err),
                    Err(err) => Err(ServiceError::InternalError(format!(
                        "An unexpected error occurred: {}",
                        err
                    ))),
                }
            }
            _ => Err(ServiceError::ToolNotFound),
        }
    }

    /// Resolves the input to a video id, selects a track, fetches it, and
    /// flattens the caption lines into one string.
    async fn get_transcript(&self, input: &GetTranscriptInput) -> Result<String, ServiceError> {
        let video_id = VideoId::extract(&input.url)?;
        info!(video_id = %video_id, lang = %input.lang, "Processing transcript request");

        let tracks = self.service.list_tracks(&video_id).await?;
        let track = select_track(&input.lang, &tracks)?;
        debug!(
            language_code = %track.language_code,
            is_generated = track.is_generated,
            "Selected transcript track"
        );

        let lines = self.service.fetch_track(&video_id, track).await?;
        let text = clean_html_entities(&flatten_lines(&lines));

        info!(
            video_id = %video_id,
            language_code = %track.language_code,
            chars = text.len(),
            "Successfully extracted transcript"
        );

        Ok(text)
    }
}

/// JSON-RPC message handler for the MCP server
pub struct JsonRpcHandler {
    server: McpServer,
}

impl JsonRpcHandler {
    pub fn new(server: McpServer) -> Self {
        Self { server }
    }

    /// Process a JSON-RPC request and return a response. Notifications
    /// (requests without an id) yield no response.
    pub async fn handle_request(&self, request: Value) -> Option<Value> {
        debug!("Handling JSON-RPC request: {:?}", request);

        let id = request.get("id").cloned();
        let method = request.get("method").and_then(|m| m.as_str()).unwrap_or("");
        let params = request.get("params").cloned().unwrap_or(json!({}));

        if id.is_none() {
            debug!("Ignoring notification: {}", method);
            return None;
        }

        let result = match method {
            "initialize" => match serde_json::from_value::<InitializeRequestParam>(params) {
                Ok(req) => self
                    .server
                    .handle_initialize(req)
                    .await
                    .and_then(|r| serde_json::to_value(r).map_err(ServiceError::SerdeJson))
                    .map_err(|e| e.to_jsonrpc_error()),
                Err(e) => Err(ServiceError::SerdeJson(e).to_jsonrpc_error()),
            },
            "ping" => Ok(json!({})),
            "tools/list" => match serde_json::from_value::<Option<PaginatedRequestParam>>(params) {
                Ok(req) => self
                    .server
                    .handle_list_tools(req)
                    .await
                    .and_then(|r| serde_json::to_value(r).map_err(ServiceError::SerdeJson))
                    .map_err(|e| e.to_jsonrpc_error()),
                Err(e) => Err(ServiceError::SerdeJson(e).to_jsonrpc_error()),
            },
            "tools/call" => match serde_json::from_value::<CallToolRequestParam>(params) {
                Ok(req) => self
                    .server
                    .handle_call_tool(req)
                    .await
                    .and_then(|r| serde_json::to_value(r).map_err(ServiceError::SerdeJson))
                    .map_err(|e| e.to_jsonrpc_error()),
                Err(e) => Err(ServiceError::SerdeJson(e).to_jsonrpc_error()),
            },
            _ => Err(ServiceError::MethodNotFound.to_jsonrpc_error()),
        };

        Some(match result {
            Ok(result) => json!({
                "jsonrpc": "2.0",
                "result": result,
                "id": id,
            }),
            Err(error) => json!({
                "jsonrpc": "2.0",
                "error": error,
                "id": id,
            }),
        })
    }
}

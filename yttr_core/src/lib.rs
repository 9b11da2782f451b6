// src/lib.rs
pub mod error;
pub mod mcp_server;
pub mod service;
pub mod transcript;
pub mod transport;
pub mod utils;
pub mod video_id;

// Re-export types from rmcp that users of your library might need
pub use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
    InitializeResult, IntoContents, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, Tool,
};

pub use error::ServiceError;
pub use mcp_server::{GetTranscriptInput, JsonRpcHandler, McpServer};
pub use service::{TranscriptService, YouTubeTranscriptService};
pub use transcript::{flatten_lines, select_track, TranscriptLine, TranscriptTrack, AUTO_LANG};
pub use video_id::VideoId;

//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes detection, profiling and comparison to AI assistants over stdio.
//! The server is a presentation layer: every `#[tool]` method delegates to
//! the same [`Engine`] the CLI commands use and returns its report as JSON.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call the engine, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use prosemetry_core::markdown::strip_to_prose;
use prosemetry_core::{ALL_FEATURES, Engine, EngineError, Lexicon};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `detect_patterns` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectPatternsParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Features to run. Omit for all features.
    pub features: Option<Vec<String>>,
}

/// Parameters for the `profile_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ProfileTextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `compare_texts` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareTextsParams {
    /// The baseline text.
    pub text_a: String,
    /// The revised text; changes are reported relative to the baseline.
    pub text_b: String,
    /// Whether to strip markdown formatting from both texts.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing prosemetry analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    lexicon: Arc<Lexicon>,
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ProjectServer {
    /// Create a server over `lexicon`, rejecting inputs above `max_input_bytes`.
    pub fn new(lexicon: Lexicon, max_input_bytes: Option<usize>) -> Result<Self, EngineError> {
        let engine = Engine::new(&lexicon)?;
        Ok(Self {
            lexicon: Arc::new(lexicon),
            engine: Arc::new(engine),
            max_input_bytes,
            tool_router: Self::tool_router(),
        })
    }

    fn prepare(&self, text: String, strip_markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(if strip_markdown {
            strip_to_prose(&text)
        } else {
            text
        })
    }

    /// Get project information.
    #[tool(description = "Get project name, version, description and available features")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "features": ALL_FEATURES,
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\nFeatures: {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                ALL_FEATURES.join(", "),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for machine-generated writing patterns.
    #[tool(
        description = "Score text for machine-generated writing patterns. Returns an overall score, a likelihood tier, and per-feature scores for sentence uniformity, transitions, abstraction, vocabulary diversity, passive voice and paragraph openings."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_patterns(
        &self,
        Parameters(params): Parameters<DetectPatternsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "detect_patterns",
            strip_md = params.strip_markdown,
            features = ?params.features,
            "executing MCP tool"
        );

        let text = self.prepare(params.text, params.strip_markdown)?;
        let result = match params.features {
            Some(names) => Engine::new(&self.lexicon)
                .and_then(|engine| engine.with_features(names.as_slice()))
                .and_then(|engine| engine.detect(&text)),
            None => self.engine.detect(&text),
        }
        .map_err(engine_error)?;

        tracing::info!(
            tool = "detect_patterns",
            overall = result.overall_score,
            "MCP tool completed"
        );
        json_result(&result)
    }

    /// Descriptive quality statistics.
    #[tool(
        description = "Profile text quality: sentence length statistics, vocabulary richness, academic vocabulary, transition words by category, passive voice and readability."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn profile_text(
        &self,
        Parameters(params): Parameters<ProfileTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "profile_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(params.text, params.strip_markdown)?;
        let profile = self.engine.profile(&text).map_err(engine_error)?;

        tracing::info!(tool = "profile_text", "MCP tool completed");
        json_result(&profile)
    }

    /// Compare the quality statistics of two texts.
    #[tool(
        description = "Compare two texts. Returns before, after and change for mean sentence length, sentence length deviation, type-token ratio, lexical density, transition density and passive percentage."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_texts(
        &self,
        Parameters(params): Parameters<CompareTextsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "compare_texts",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let first = self.prepare(params.text_a, params.strip_markdown)?;
        let second = self.prepare(params.text_b, params.strip_markdown)?;
        let comparison = self
            .engine
            .compare(&first, &second)
            .map_err(engine_error)?;

        tracing::info!(tool = "compare_texts", "MCP tool completed");
        json_result(&comparison)
    }
}

fn engine_error(err: EngineError) -> McpError {
    match err {
        EngineError::EmptyInput | EngineError::UnknownFeature { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        other => McpError::internal_error(other.to_string(), None),
    }
}

fn json_result<T: Serialize>(report: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use detect_patterns to score text for machine-generated \
                 patterns, profile_text for quality statistics and compare_texts to \
                 measure a revision.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

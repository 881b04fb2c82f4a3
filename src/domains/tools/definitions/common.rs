//! Common utilities shared across tool definitions.
//!
//! Metadata, rmcp routing and dispatch are generic over [`ToolDefinition`],
//! so individual tool files only describe their arguments and body.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::ToolDefinition;
use crate::domains::nhl::NhlClient;
use crate::domains::tools::ToolError;

/// Default number of leaders to return.
pub fn default_limit() -> u32 {
    crate::domains::nhl::client::DEFAULT_LEADERS_LIMIT
}

/// Accept a non-negative whole number, written either as an integer or
/// as a float with no fractional part (`2024020001.0`).
pub fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let value = match number.as_u64() {
        Some(value) => value,
        None => match number.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => f as u64,
            _ => return Err(D::Error::custom(format!("expected a whole number, got {}", number))),
        },
    };
    T::try_from(value).map_err(|_| D::Error::custom(format!("number out of range: {}", value)))
}

/// Log a failure and answer it as ordinary text content.
///
/// Failures are not flagged `isError`, so clients read them the same way
/// as analytics messages such as "Team not found: XYZ".
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    success_result(message.to_string())
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render a pass-through payload as indented JSON text.
pub fn pretty_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Create a Tool model (metadata) for a definition.
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: schema_for_type::<T::Params>().into(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Decode `arguments` and run the tool.
///
/// Never fails: argument and upstream errors come back as a text result
/// starting with `Error executing {name}: `.
#[instrument(skip(client, arguments), fields(tool = T::NAME))]
pub async fn dispatch<T: ToolDefinition>(client: &NhlClient, arguments: Value) -> CallToolResult {
    info!("Tool called");

    let outcome = match serde_json::from_value::<T::Params>(arguments) {
        Ok(params) => T::execute(client, params).await,
        Err(e) => Err(ToolError::invalid_arguments(e.to_string())),
    };

    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(&format!("Error executing {}: {}", T::NAME, e)),
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(client: NhlClient) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            let result = dispatch::<T>(&client, Value::Object(args)).await;
            Ok::<_, McpError>(result)
        }
        .boxed()
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::{mock_client, unreachable_client};
    use crate::domains::tools::definitions::{GameDetailsTool, StandingsTool};
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::MockServer;

    /// Text of the first content item of a tool result.
    pub(crate) fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    pub(crate) fn is_error(result: &CallToolResult) -> bool {
        result.is_error.unwrap_or(false)
    }

    #[test]
    fn test_to_tool_uses_definition_metadata() {
        let tool = to_tool::<GameDetailsTool>();
        assert_eq!(tool.name, "get_game_details");
        assert!(tool.description.is_some());

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert!(schema["properties"]["gameId"].is_object());
        assert_eq!(schema["required"], json!(["gameId"]));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments() {
        let server = MockServer::start().await;
        let result = dispatch::<GameDetailsTool>(&mock_client(&server), json!({})).await;

        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error executing get_game_details: Invalid arguments:"));
    }

    #[tokio::test]
    async fn test_dispatch_upstream_failure() {
        let result = dispatch::<StandingsTool>(&unreachable_client(), json!({})).await;

        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error executing get_standings: "));
    }

    #[derive(Debug, Deserialize)]
    struct Whole {
        #[serde(deserialize_with = "whole_number")]
        n: u32,
    }

    #[test]
    fn test_whole_number_accepts_integral_floats() {
        let parse = |v: Value| serde_json::from_value::<Whole>(v).map(|w| w.n);

        assert_eq!(parse(json!({"n": 5})).unwrap(), 5);
        assert_eq!(parse(json!({"n": 5.0})).unwrap(), 5);
        assert!(parse(json!({"n": 2.5})).is_err());
        assert!(parse(json!({"n": -1})).is_err());
        assert!(parse(json!({"n": "5"})).is_err());
        assert!(parse(json!({"n": 5_000_000_000u64})).is_err());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(default_limit(), 20);
    }
}

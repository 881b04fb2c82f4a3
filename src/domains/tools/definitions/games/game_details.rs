//! Game details tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::nhl::NhlClient;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{
    ToolDefinition,
    common::{pretty_json, whole_number},
};

/// Parameters for the game details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailsParams {
    /// The NHL game ID
    #[serde(deserialize_with = "whole_number")]
    pub game_id: u64,
}

/// Game details tool - play-by-play feed as JSON.
pub struct GameDetailsTool;

#[async_trait]
impl ToolDefinition for GameDetailsTool {
    const NAME: &'static str = "get_game_details";

    const DESCRIPTION: &'static str = "Get detailed information about a specific game including play-by-play data, scoring plays, and period summaries.";

    type Params = GameDetailsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let details = client.game_details(params.game_id).await?;
        pretty_json(&details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::mock_client;
    use crate::domains::tools::definitions::common::{
        dispatch,
        tests::{is_error, result_text},
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_game_details_pretty_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2024020001/play-by-play"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2024020001, "plays": []})))
            .mount(&server)
            .await;

        let result =
            dispatch::<GameDetailsTool>(&mock_client(&server), json!({"gameId": 2024020001u64})).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "{\n  \"id\": 2024020001,\n  \"plays\": []\n}");
    }

    #[tokio::test]
    async fn test_game_details_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/1/play-by-play"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = dispatch::<GameDetailsTool>(&mock_client(&server), json!({"gameId": 1})).await;
        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error executing get_game_details: "));
    }

    #[tokio::test]
    async fn test_game_details_rejects_string_id() {
        let server = MockServer::start().await;
        let result =
            dispatch::<GameDetailsTool>(&mock_client(&server), json!({"gameId": "abc"})).await;
        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error executing get_game_details: Invalid arguments:"));
    }

    #[tokio::test]
    async fn test_game_details_accepts_integral_float_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2024020001/play-by-play"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2024020001})))
            .expect(1)
            .mount(&server)
            .await;

        let result =
            dispatch::<GameDetailsTool>(&mock_client(&server), json!({"gameId": 2024020001.0})).await;
        assert_eq!(result_text(&result), "{\n  \"id\": 2024020001\n}");

        let result = dispatch::<GameDetailsTool>(&mock_client(&server), json!({"gameId": 1.5})).await;
        assert!(result_text(&result).starts_with("Error executing get_game_details: "));
    }
}

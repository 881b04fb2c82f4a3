//! Current season resource definition.

use rmcp::model::ResourceContents;
use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::nhl::{current_season_id, format_season};
use crate::domains::resources::ResourceError;
use crate::domains::resources::service::ResourceKind;

/// The season id in effect today, in raw and display form.
pub struct CurrentSeasonResource;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonBody {
    season_id: String,
    display: String,
}

impl ResourceDefinition for CurrentSeasonResource {
    const URI: &'static str = "nhl://season/current";
    const NAME: &'static str = "Current Season";
    const DESCRIPTION: &'static str = "Current NHL season id (YYYYYYYY) and its display form";

    fn kind() -> ResourceKind {
        ResourceKind::CurrentSeason
    }
}

impl CurrentSeasonResource {
    pub fn resolve(uri: &str) -> Result<ResourceContents, ResourceError> {
        Self::resolve_for(uri, &current_season_id())
    }

    fn resolve_for(uri: &str, season_id: &str) -> Result<ResourceContents, ResourceError> {
        let body = SeasonBody {
            season_id: season_id.to_string(),
            display: format_season(season_id),
        };
        Ok(ResourceContents::text(serde_json::to_string_pretty(&body)?, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_season_body() {
        let contents = CurrentSeasonResource::resolve_for(CurrentSeasonResource::URI, "20242025").unwrap();
        let ResourceContents::TextResourceContents { text, .. } = contents else {
            panic!("Expected text contents");
        };
        assert_eq!(
            text,
            "{\n  \"seasonId\": \"20242025\",\n  \"display\": \"2024-2025\"\n}"
        );
    }

    #[test]
    fn test_current_season_is_eight_digits() {
        let contents = CurrentSeasonResource::resolve(CurrentSeasonResource::URI).unwrap();
        let ResourceContents::TextResourceContents { text, .. } = contents else {
            panic!("Expected text contents");
        };
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["seasonId"].as_str().unwrap().len(), 8);
    }
}

//! Team list resource definition.
//!
//! Served from the statistics API rather than the general web API.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceKind;

/// Franchise list resource.
pub struct TeamsResource;

impl ResourceDefinition for TeamsResource {
    const URI: &'static str = "nhl://teams";
    const NAME: &'static str = "NHL Teams";
    const DESCRIPTION: &'static str = "All NHL franchises with ids, names and abbreviations";

    fn kind() -> ResourceKind {
        ResourceKind::TeamList
    }
}

//! The fixed set of `nhl://` resources and templates.
//!
//! New static resources get a file in `definitions/` and a line in
//! [`get_all_resources`].

use rmcp::model::{AnnotateAble, RawResource, ResourceTemplate};

use super::definitions::{
    CurrentSeasonResource, ResourceDefinition, ServerInfoResource, TeamsResource, templates,
};
use super::service::ResourceEntry;

fn entry<R: ResourceDefinition>() -> ResourceEntry {
    let resource = RawResource {
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(R::MIME_TYPE.to_string()),
        ..RawResource::new(R::URI, R::NAME)
    };

    ResourceEntry {
        resource: resource.no_annotation(),
        kind: R::kind(),
    }
}

pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        entry::<ServerInfoResource>(),
        entry::<CurrentSeasonResource>(),
        entry::<TeamsResource>(),
    ]
}

/// RFC 6570 templates for boxscores, players, rosters and playoff series.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    templates::all()
}

//! Resource definitions.
//!
//! One file per static resource, plus `templates.rs` for the
//! parameterized `nhl://` URIs. Every body is JSON.

use super::service::ResourceKind;

pub mod current_season;
pub mod server_info;
pub mod teams;
pub mod templates;

pub use current_season::CurrentSeasonResource;
pub use server_info::ServerInfoResource;
pub use teams::TeamsResource;
pub use templates::TemplateTarget;

pub const JSON_MIME_TYPE: &str = "application/json";

/// Metadata for a fixed-URI resource.
pub trait ResourceDefinition {
    const URI: &'static str;

    /// Display name shown in `resources/list`.
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    const MIME_TYPE: &'static str = JSON_MIME_TYPE;

    /// Where [`ResourceService`](super::ResourceService) reads the body from.
    fn kind() -> ResourceKind;
}

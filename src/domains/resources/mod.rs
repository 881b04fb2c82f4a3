//! Resources domain module.
//!
//! Read-only data that MCP clients can fetch by URI: server and season
//! metadata, the team list, and templated views onto games, players,
//! rosters and playoff series.
//!
//! ## Architecture
//!
//! - `definitions/` - Resource definitions (one file per static resource,
//!   plus the URI templates)
//! - `registry.rs` - Central resource and template registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs` and resolve its kind in `service.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources};
pub use service::{ResourceEntry, ResourceKind, ResourceService, ServerInfo};

//! Domains module containing business logic organized by bounded contexts.
//!
//! - **nhl**: upstream API client, record model, formatting and analytics
//! - **tools**: MCP tools exposed to clients, built on the nhl domain
//! - **resources**: read-only MCP resources, built on the nhl domain

pub mod nhl;
pub mod resources;
pub mod tools;

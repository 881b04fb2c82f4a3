//! Tools domain module.
//!
//! Tools are the callable surface of the server: each maps a named call with
//! a JSON argument object onto the NHL client or an analytics helper and
//! answers with text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Static tool catalog and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! Every failure is answered as a tool result; nothing here produces a
//! protocol-level error.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

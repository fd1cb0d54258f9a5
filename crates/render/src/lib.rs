//! kv-switch-render: Default capability implementations for kv-switch.
//!
//! [`TagBuilder`] builds escaped HTML tags; [`ScriptBuffer`] collects
//! registered asset bundles and inline scripts for page placement. Both
//! can be replaced by a host framework's own implementations of the
//! kv-switch-core traits.

pub mod script;
pub mod tag;

pub use script::ScriptBuffer;
pub use tag::TagBuilder;

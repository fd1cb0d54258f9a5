//! kv-switch-types: Shared data types for the kv-switch widget.
//!
//! This crate contains pure data types (widget configuration, radio-group
//! items, error kinds) with no markup or asset dependencies, making them
//! suitable as a foundation layer.

pub mod config;
pub mod error;
pub mod item;

// Re-export commonly used types at the crate root for convenience
pub use config::{IndeterminateToggle, SwitchConfig, CHECKBOX, RADIO};
pub use error::ConfigError;
pub use item::SwitchItem;

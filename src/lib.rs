//! kv-switch: Server-side switch input widget.
//!
//! Renders a toggle-switch form control (checkbox or radio-group variant)
//! as HTML, validates its configuration up front, and derives the
//! initialization options handed to the client-side switch plugin.
//!
//! Markup construction and client-asset registration go through the
//! kv-switch-core capability traits so rendering stays testable without a
//! host web framework; kv-switch-render supplies default implementations.

pub mod asset;
pub mod widget;

// Re-export commonly used types
pub use asset::switch_asset;
pub use kv_switch_core::{
    add_css_class, merge_attrs, AssetBundle, AssetRegistry, BoxedAssetRegistry, BoxedMarkup,
    Markup,
};
pub use kv_switch_render::{ScriptBuffer, TagBuilder};
pub use kv_switch_types::{
    ConfigError, IndeterminateToggle, SwitchConfig, SwitchItem, CHECKBOX, RADIO,
};
pub use widget::SwitchInput;

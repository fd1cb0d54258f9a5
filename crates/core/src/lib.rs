//! kv-switch-core: Capability traits the kv-switch widget renders through.
//!
//! This crate contains the two ports the widget delegates to (HTML tag
//! construction with escaping, and client-asset registration) plus the
//! attribute-map helpers shared by the renderer. Keeping these behind
//! traits leaves the widget unit-testable without a host web framework
//! or DOM present.

mod assets;
mod markup;

pub use assets::{AssetBundle, AssetRegistry, BoxedAssetRegistry};
pub use markup::{add_css_class, merge_attrs, BoxedMarkup, Markup};

//! Client-asset registration capability.

/// A named client-side asset bundle (stylesheets, scripts, dependencies).
///
/// The widget describes the assets it needs; publishing and URL resolution
/// belong to the host page, behind [`AssetRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetBundle {
    /// Bundle identifier.
    pub name: String,
    /// Stylesheet paths, relative to the bundle source.
    pub css: Vec<String>,
    /// Script paths, relative to the bundle source.
    pub js: Vec<String>,
    /// Names of bundles this one depends on.
    pub depends: Vec<String>,
}

/// Client-side asset and script registration.
///
/// Stands in for the host framework's view layer: bundle registration and
/// inline script placement are observable effects the caller routes into
/// its page.
pub trait AssetRegistry {
    /// Register a client asset bundle.
    fn register_asset(&mut self, bundle: &AssetBundle);

    /// Queue an inline script for page placement.
    fn register_js(&mut self, code: &str);
}

/// Type-erased asset registry for dynamic dispatch.
pub type BoxedAssetRegistry = Box<dyn AssetRegistry>;

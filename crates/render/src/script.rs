//! Asset and inline-script collection.

use kv_switch_core::{AssetBundle, AssetRegistry};
use log::debug;

/// Default [`AssetRegistry`] implementation.
///
/// Collects registered bundles and inline scripts in registration order so
/// the caller can drain them into the page. Bundles are deduplicated by
/// name; scripts are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuffer {
    bundles: Vec<AssetBundle>,
    scripts: Vec<String>,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles registered so far, in registration order.
    pub fn bundles(&self) -> &[AssetBundle] {
        &self.bundles
    }

    /// Inline scripts registered so far, in registration order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Render all queued scripts as a single inline script tag.
    ///
    /// Returns an empty string when nothing was registered.
    pub fn render(&self) -> String {
        if self.scripts.is_empty() {
            return String::new();
        }
        format!("<script>{}</script>", self.scripts.join("\n"))
    }
}

impl AssetRegistry for ScriptBuffer {
    fn register_asset(&mut self, bundle: &AssetBundle) {
        if self.bundles.iter().any(|known| known.name == bundle.name) {
            return;
        }
        debug!("registering asset bundle '{}'", bundle.name);
        self.bundles.push(bundle.clone());
    }

    fn register_js(&mut self, code: &str) {
        debug!("queueing inline script ({} bytes)", code.len());
        self.scripts.push(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(name: &str) -> AssetBundle {
        AssetBundle {
            name: name.to_string(),
            ..AssetBundle::default()
        }
    }

    #[test]
    fn test_collects_in_order() {
        let mut buffer = ScriptBuffer::new();
        buffer.register_js("first();");
        buffer.register_js("second();");
        assert_eq!(buffer.scripts(), ["first();", "second();"]);
    }

    #[test]
    fn test_bundles_deduplicated_by_name() {
        let mut buffer = ScriptBuffer::new();
        buffer.register_asset(&bundle("kv-switch"));
        buffer.register_asset(&bundle("kv-switch"));
        assert_eq!(buffer.bundles().len(), 1);
    }

    #[test]
    fn test_render_wraps_scripts() {
        let mut buffer = ScriptBuffer::new();
        assert_eq!(buffer.render(), "");
        buffer.register_js("a();");
        buffer.register_js("b();");
        assert_eq!(buffer.render(), "<script>a();\nb();</script>");
    }
}

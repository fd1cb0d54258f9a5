//! Client asset bundle for the switch plugin.

use kv_switch_core::AssetBundle;

/// The asset bundle backing the client-side switch plugin: the plugin's
/// stylesheets and script, on top of jQuery.
pub fn switch_asset() -> AssetBundle {
    AssetBundle {
        name: "kv-switch".to_string(),
        css: vec![
            "css/bootstrap-switch".to_string(),
            "css/bootstrap-switch-kv".to_string(),
        ],
        js: vec!["js/bootstrap-switch".to_string()],
        depends: vec!["jquery".to_string()],
    }
}

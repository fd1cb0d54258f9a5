//! Switch input widget: renders checkbox or radio-group toggles as HTML
//! and wires them to the client-side switch plugin.

use kv_switch_core::{add_css_class, merge_attrs, AssetRegistry, Markup};
use kv_switch_types::{ConfigError, SwitchConfig, SwitchItem};
use log::debug;
use serde_json::{Map, Value};

use crate::asset::switch_asset;

/// Toggle content used when `indeterminateToggle` supplies no label.
const DEFAULT_TOGGLE_LABEL: &str = "<i class=\"glyphicon glyphicon-minus-sign\"></i>";

/// Server-side switch input widget.
///
/// Owns a [`SwitchConfig`] for one render invocation. [`SwitchInput::run`]
/// validates the configuration, produces the widget's HTML fragment, and
/// registers the client assets and plugin-initialization scripts through
/// the injected capabilities.
#[derive(Debug, Clone)]
pub struct SwitchInput {
    config: SwitchConfig,
}

impl From<SwitchConfig> for SwitchInput {
    fn from(config: SwitchConfig) -> Self {
        Self::new(config)
    }
}

impl SwitchInput {
    pub fn new(config: SwitchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SwitchConfig {
        &mut self.config
    }

    /// Render the widget.
    ///
    /// Validates the configuration first; no output is produced when
    /// validation fails. On success returns the HTML fragment, after
    /// merging plugin options and registering client assets on `view`.
    /// Repeated runs with an unchanged config yield byte-identical markup.
    pub fn run(
        &mut self,
        html: &dyn Markup,
        view: &mut dyn AssetRegistry,
    ) -> Result<String, ConfigError> {
        self.config.validate()?;
        let output = self.render_input(html);
        self.register_assets(view);
        Ok(output)
    }

    /// Build the widget markup for the configured variant.
    fn render_input(&self, html: &dyn Markup) -> String {
        let cfg = &self.config;
        let mut container = cfg.container_options.clone();
        add_css_class(&mut container, "form-group");
        if cfg.is_radio() {
            add_css_class(&mut container, "kv-switch-container");
            return html.tag("div", &self.render_radio_items(html), &container);
        }
        let input = if cfg.tristate {
            self.render_tristate_inputs(html)
        } else {
            html.input("checkbox", &cfg.name, &cfg.value, &cfg.options)
        };
        html.tag("div", &self.merge_ind_toggle(html, &input), &container)
    }

    /// Hidden primary input plus the `_dummy` companion satisfying the
    /// client plugin's DOM contract. The visible control is drawn entirely
    /// by the plugin; the indeterminate state surfaces via plugin options,
    /// not markup.
    fn render_tristate_inputs(&self, html: &dyn Markup) -> String {
        let cfg = &self.config;
        let mut output = html.input("hidden", &cfg.name, &cfg.value, &cfg.options);
        let dummy = format!("{}_dummy", cfg.input_id());
        let mut dummy_attrs = Map::new();
        dummy_attrs.insert("id".to_string(), Value::String(dummy.clone()));
        output.push_str(&html.input("hidden", &dummy, &Value::Null, &dummy_attrs));
        output
    }

    /// Render the radio items in order, skipping elements that are not
    /// well-formed records.
    fn render_radio_items(&self, html: &dyn Markup) -> String {
        let cfg = &self.config;
        let entries = cfg.items.as_array().map(Vec::as_slice).unwrap_or_default();
        let mut rendered = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            let Some(item) = SwitchItem::from_value(entry) else {
                debug!("skipping malformed radio item at index {index}");
                continue;
            };
            let mut attrs = merge_attrs(&cfg.item_options, &item.options);
            if item.value == cfg.value {
                attrs.insert("checked".to_string(), Value::Bool(true));
            }
            let mut input = html.input("radio", &cfg.name, &item.value, &attrs);
            if !item.label_suppressed() {
                let label_attrs = merge_attrs(&cfg.label_options, &item.label_options);
                let text = html.escape(&text_content(&item.label));
                input = if cfg.inline_label {
                    html.tag("label", &format!("{input} {text}"), &label_attrs)
                } else {
                    format!("{input}{}", html.tag("label", &text, &label_attrs))
                };
            }
            rendered.push(input);
        }
        rendered.join(&cfg.separator)
    }

    /// Append the indeterminate-toggle affordance to the rendered input.
    ///
    /// Returns `output` unchanged when `tristate` is off or the toggle is
    /// disabled. The toggle button carries `data-kv-switch` pointing at the
    /// input's DOM id so the client plugin can find its target.
    fn merge_ind_toggle(&self, html: &dyn Markup, output: &str) -> String {
        let cfg = &self.config;
        let toggle = match cfg.indeterminate_toggle.options() {
            Some(options) if cfg.tristate => options,
            _ => return output.to_string(),
        };
        let mut attrs = toggle.clone();
        let label = match attrs.remove("label") {
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => DEFAULT_TOGGLE_LABEL.to_string(),
        };
        attrs.entry("type").or_insert(Value::from("button"));
        attrs.insert("data-kv-switch".to_string(), Value::from(cfg.input_id()));
        add_css_class(&mut attrs, "kv-ind-toggle");
        let button = html.tag("button", &label, &attrs);

        let mut wrapper = Map::new();
        let mut class = "kv-ind-container".to_string();
        if let Some(size) = cfg.plugin_options.get("size").and_then(Value::as_str) {
            class.push_str(" kv-size-");
            class.push_str(size);
        }
        wrapper.insert("class".to_string(), Value::String(class));
        format!("{output}{}", html.tag("span", &button, &wrapper))
    }

    /// Merge the widget state into the plugin options and register the
    /// client assets and initialization scripts.
    ///
    /// Caller-supplied keys are preserved except for the state mirrors:
    /// `animate` defaults to `true` only when absent, while
    /// `indeterminate`, `disabled` and `readonly` are always recomputed.
    pub fn register_assets(&mut self, view: &mut dyn AssetRegistry) {
        let cfg = &mut self.config;
        cfg.plugin_options
            .entry("animate")
            .or_insert(Value::Bool(true));
        let indeterminate = cfg.indeterminate();
        cfg.plugin_options
            .insert("indeterminate".to_string(), Value::Bool(indeterminate));
        cfg.plugin_options
            .insert("disabled".to_string(), Value::Bool(cfg.disabled));
        cfg.plugin_options
            .insert("readonly".to_string(), Value::Bool(cfg.readonly));

        view.register_asset(&switch_asset());

        let id = cfg.input_id().to_string();
        let options = Value::Object(cfg.plugin_options.clone());
        debug!("initializing plugin '{}' on '#{id}'", cfg.plugin_name);
        view.register_js(&format!(
            "jQuery('#{id}').{}({options});",
            cfg.plugin_name
        ));
        if cfg.tristate {
            view.register_js(&format!(
                "jQuery('[data-kv-switch=\"{id}\"]').on('click', function () {{ jQuery('#{id}').{}('toggleIndeterminate'); }});",
                cfg.plugin_name
            ));
        }
    }
}

fn text_content(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

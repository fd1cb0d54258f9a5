//! Widget configuration for the switch input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// `type` value selecting the checkbox variant.
pub const CHECKBOX: i64 = 1;

/// `type` value selecting the radio-group variant.
pub const RADIO: i64 = 2;

/// Indeterminate-toggle affordance configuration.
///
/// `Options` renders the toggle with the given overrides (the `label` key
/// supplies the toggle content, remaining keys become button attributes);
/// `Disabled` suppresses the toggle entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndeterminateToggle {
    Options(Map<String, Value>),
    Disabled(bool),
}

impl Default for IndeterminateToggle {
    fn default() -> Self {
        Self::Options(Map::new())
    }
}

impl IndeterminateToggle {
    /// The attribute overrides when the toggle is enabled.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Options(options) => Some(options),
            Self::Disabled(_) => None,
        }
    }
}

/// Full render-time configuration for a switch input widget.
///
/// Loosely-typed fields (`input_type`, `value`, `indeterminate_value`,
/// `items`) are kept as [`Value`] so that callers may supply arbitrary
/// scalar types; comparisons against them use strict `Value` equality with
/// no coercion (`"2"` never equals `2`, `1.0` never equals `1`). Attribute
/// maps pass through to markup wrapping unchanged.
///
/// A config is built from [`Default`], adjusted field by field, then handed
/// to the widget's render entry point, which validates before producing any
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchConfig {
    /// Control variant: must be exactly `1` (checkbox) or `2` (radio).
    #[serde(rename = "type")]
    pub input_type: Value,
    /// Whether the checkbox variant supports a third indeterminate state.
    pub tristate: bool,
    /// Logical value denoting the indeterminate state.
    pub indeterminate_value: Value,
    /// Indeterminate-toggle affordance, or `false` to disable it.
    pub indeterminate_toggle: IndeterminateToggle,
    /// The control's current value.
    pub value: Value,
    /// Input element name when no model binding is present.
    pub name: String,
    /// Radio-group entries; required non-empty sequence for the radio type,
    /// ignored for the checkbox type.
    pub items: Value,
    /// Whether item labels wrap their input inline.
    pub inline_label: bool,
    /// Markup inserted between consecutive radio items.
    pub separator: String,
    /// Input element attributes; `id` keys the client plugin hand-off.
    pub options: Map<String, Value>,
    /// Container element attributes.
    pub container_options: Map<String, Value>,
    /// Attributes merged into each radio item input.
    pub item_options: Map<String, Value>,
    /// Attributes merged into each radio item label.
    pub label_options: Map<String, Value>,
    /// Client plugin initialized on the rendered input.
    pub plugin_name: String,
    /// Options handed to the client plugin at initialization.
    pub plugin_options: Map<String, Value>,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the control is read-only.
    pub readonly: bool,
}

fn default_container_options() -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("class".to_string(), Value::from("form-group"));
    options
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            input_type: Value::from(CHECKBOX),
            tristate: false,
            indeterminate_value: Value::Null,
            indeterminate_toggle: IndeterminateToggle::default(),
            value: Value::Null,
            name: String::new(),
            items: Value::Array(Vec::new()),
            inline_label: true,
            separator: " &nbsp;".to_string(),
            options: Map::new(),
            container_options: default_container_options(),
            item_options: Map::new(),
            label_options: Map::new(),
            plugin_name: "bootstrapSwitch".to_string(),
            plugin_options: Map::new(),
            disabled: false,
            readonly: false,
        }
    }
}

impl SwitchConfig {
    /// Check the two configuration invariants that make rendering possible.
    ///
    /// `type` must be exactly the JSON number `1` or `2`; the radio type
    /// additionally requires `items` to be a non-empty array. No other
    /// validation is performed and unknown fields are ignored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_type != Value::from(CHECKBOX) && self.input_type != Value::from(RADIO) {
            return Err(ConfigError::InvalidType);
        }
        if self.is_radio() {
            match self.items.as_array() {
                Some(items) if !items.is_empty() => {}
                _ => return Err(ConfigError::MissingItems),
            }
        }
        Ok(())
    }

    /// Whether the radio-group variant is selected.
    pub fn is_radio(&self) -> bool {
        self.input_type == Value::from(RADIO)
    }

    /// Whether the current value denotes the indeterminate state.
    pub fn indeterminate(&self) -> bool {
        self.tristate && self.value == self.indeterminate_value
    }

    /// The input element's DOM id: the `id` attribute from `options`,
    /// falling back to `name`.
    pub fn input_id(&self) -> &str {
        self.options
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }
}

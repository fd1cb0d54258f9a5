//! HTML construction capability.

use serde_json::{Map, Value};

/// HTML tag-building capability.
///
/// Implementations own escaping and attribute rendering. The widget never
/// emits caller-supplied text or attribute values without routing them
/// through this trait.
pub trait Markup {
    /// Escape text for safe use in element content or attribute values.
    fn escape(&self, text: &str) -> String;

    /// Render a complete element around the given inner content.
    ///
    /// `content` is trusted markup and is emitted as-is; attribute values
    /// are escaped.
    fn tag(&self, name: &str, content: &str, attrs: &Map<String, Value>) -> String;

    /// Render a void `<input>` element.
    ///
    /// An empty `name` and a null `value` omit the respective attribute.
    fn input(&self, input_type: &str, name: &str, value: &Value, attrs: &Map<String, Value>)
        -> String;
}

/// Type-erased markup capability for dynamic dispatch.
pub type BoxedMarkup = Box<dyn Markup>;

/// Append a CSS class to an attribute map, preserving existing classes and
/// skipping whole tokens already present.
pub fn add_css_class(attrs: &mut Map<String, Value>, class: &str) {
    let merged = match attrs.get("class").and_then(Value::as_str) {
        Some(existing) if existing.split_whitespace().any(|token| token == class) => return,
        Some(existing) => format!("{existing} {class}"),
        None => class.to_string(),
    };
    attrs.insert("class".to_string(), Value::String(merged));
}

/// Overlay `overrides` onto `base`; keys in `overrides` win.
pub fn merge_attrs(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_css_class_appends() {
        let mut attrs = Map::new();
        attrs.insert("class".to_string(), json!("form-group"));
        add_css_class(&mut attrs, "kv-switch-container");
        assert_eq!(
            attrs.get("class"),
            Some(&json!("form-group kv-switch-container"))
        );
    }

    #[test]
    fn test_add_css_class_inserts_when_absent() {
        let mut attrs = Map::new();
        add_css_class(&mut attrs, "form-group");
        assert_eq!(attrs.get("class"), Some(&json!("form-group")));
    }

    #[test]
    fn test_add_css_class_deduplicates() {
        let mut attrs = Map::new();
        attrs.insert("class".to_string(), json!("form-group custom"));
        add_css_class(&mut attrs, "form-group");
        assert_eq!(attrs.get("class"), Some(&json!("form-group custom")));
    }

    #[test]
    fn test_merge_attrs_overrides_win() {
        let mut base = Map::new();
        base.insert("class".to_string(), json!("shared"));
        base.insert("data-role".to_string(), json!("item"));
        let mut overrides = Map::new();
        overrides.insert("class".to_string(), json!("custom-option"));

        let merged = merge_attrs(&base, &overrides);
        assert_eq!(merged.get("class"), Some(&json!("custom-option")));
        assert_eq!(merged.get("data-role"), Some(&json!("item")));
    }
}

//! Default HTML tag construction with escaping.

use kv_switch_core::Markup;
use serde_json::{Map, Value};

/// Default [`Markup`] implementation.
///
/// Attribute rendering follows common form-helper conventions: string
/// values are escaped, numbers render plainly, `true` renders the bare
/// attribute name, `false` and null omit the attribute, and structured
/// values render as compact JSON (escaped). Attribute order follows the
/// map's key order, so output is deterministic for a given config.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagBuilder;

impl TagBuilder {
    pub fn new() -> Self {
        Self
    }

    fn attr_text(&self, value: &Value) -> String {
        match value {
            Value::String(text) => self.escape(text),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null => String::new(),
            other => self.escape(&other.to_string()),
        }
    }

    fn attributes(&self, attrs: &Map<String, Value>) -> String {
        let mut out = String::new();
        for (key, value) in attrs {
            match value {
                Value::Bool(true) => {
                    out.push(' ');
                    out.push_str(key);
                }
                Value::Bool(false) | Value::Null => {}
                other => {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&self.attr_text(other));
                    out.push('"');
                }
            }
        }
        out
    }
}

impl Markup for TagBuilder {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        out
    }

    fn tag(&self, name: &str, content: &str, attrs: &Map<String, Value>) -> String {
        format!("<{}{}>{}</{}>", name, self.attributes(attrs), content, name)
    }

    fn input(
        &self,
        input_type: &str,
        name: &str,
        value: &Value,
        attrs: &Map<String, Value>,
    ) -> String {
        let mut out = format!("<input type=\"{}\"", self.escape(input_type));
        if !name.is_empty() {
            out.push_str(" name=\"");
            out.push_str(&self.escape(name));
            out.push('"');
        }
        if !value.is_null() {
            out.push_str(" value=\"");
            out.push_str(&self.attr_text(value));
            out.push('"');
        }
        out.push_str(&self.attributes(attrs));
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_escape() {
        let html = TagBuilder::new();
        assert_eq!(
            html.escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_tag_with_attributes() {
        let html = TagBuilder::new();
        let out = html.tag(
            "div",
            "inner",
            &attrs(json!({"class": "form-group", "data-test": "a \"b\""})),
        );
        assert_eq!(
            out,
            r#"<div class="form-group" data-test="a &quot;b&quot;">inner</div>"#
        );
    }

    #[test]
    fn test_boolean_and_null_attributes() {
        let html = TagBuilder::new();
        let out = html.tag(
            "label",
            "x",
            &attrs(json!({"checked": true, "disabled": false, "title": null})),
        );
        assert_eq!(out, "<label checked>x</label>");
    }

    #[test]
    fn test_input_rendering() {
        let html = TagBuilder::new();
        let out = html.input(
            "radio",
            "test-radio",
            &json!("1"),
            &attrs(json!({"checked": true})),
        );
        assert_eq!(out, r#"<input type="radio" name="test-radio" value="1" checked>"#);
    }

    #[test]
    fn test_input_omits_empty_name_and_null_value() {
        let html = TagBuilder::new();
        let out = html.input("hidden", "", &Value::Null, &Map::new());
        assert_eq!(out, r#"<input type="hidden">"#);
    }

    #[test]
    fn test_numeric_value() {
        let html = TagBuilder::new();
        let out = html.input("radio", "n", &json!(2), &Map::new());
        assert_eq!(out, r#"<input type="radio" name="n" value="2">"#);
    }
}

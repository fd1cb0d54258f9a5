//! Radio-group item records.

use serde_json::{Map, Value};

/// One radio-group entry extracted from the caller-supplied `items`
/// sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchItem {
    /// Label content: a string, `false` to suppress the label, or null.
    pub label: Value,
    /// The value submitted when this entry is selected.
    pub value: Value,
    /// Attributes merged into this entry's input element.
    pub options: Map<String, Value>,
    /// Attributes merged into this entry's label element.
    pub label_options: Map<String, Value>,
}

impl SwitchItem {
    /// Parse one element of the `items` sequence.
    ///
    /// Returns `None` for elements that are not key/value records; such
    /// elements are skipped during rendering rather than raising an error.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        Some(Self {
            label: record.get("label").cloned().unwrap_or(Value::Null),
            value: record.get("value").cloned().unwrap_or(Value::Null),
            options: attrs_of(record.get("options")),
            label_options: attrs_of(record.get("labelOptions")),
        })
    }

    /// Whether the label was explicitly suppressed with `false`.
    pub fn label_suppressed(&self) -> bool {
        self.label == Value::Bool(false)
    }
}

fn attrs_of(value: Option<&Value>) -> Map<String, Value> {
    value
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_full_record() {
        let item = SwitchItem::from_value(&json!({
            "label": "Option 1",
            "value": "1",
            "options": {"class": "custom-option"},
            "labelOptions": {"class": "custom-label"}
        }))
        .unwrap();
        assert_eq!(item.label, json!("Option 1"));
        assert_eq!(item.value, json!("1"));
        assert_eq!(item.options.get("class"), Some(&json!("custom-option")));
        assert_eq!(
            item.label_options.get("class"),
            Some(&json!("custom-label"))
        );
    }

    #[test]
    fn test_missing_keys_default() {
        let item = SwitchItem::from_value(&json!({"value": "3"})).unwrap();
        assert_eq!(item.label, Value::Null);
        assert!(!item.label_suppressed());
        assert!(item.options.is_empty());
    }

    #[test]
    fn test_label_false_suppresses() {
        let item = SwitchItem::from_value(&json!({"label": false, "value": "3"})).unwrap();
        assert!(item.label_suppressed());
    }

    #[test]
    fn test_non_records_are_skipped() {
        for bad in [json!("invalid_item"), json!(123), Value::Null, json!([1, 2])] {
            assert_eq!(SwitchItem::from_value(&bad), None, "{bad} is not a record");
        }
    }
}

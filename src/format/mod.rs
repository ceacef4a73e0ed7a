//! JSON tree formatting.
//!
//! Flattens a parsed JSON tree into an ordered sequence of [`Line`]s, one
//! per scalar value or container label, walking the tree depth-first in
//! document order. Object fields keep their insertion order; array elements
//! keep their positional order.

use serde_json::Value;

use crate::model::Line;

/// The key labelling one entry of a container.
enum Label<'a> {
    /// Object field name
    Key(&'a str),

    /// Array element position
    Index(usize),
}

impl Label<'_> {
    /// Prefix text for the entry, e.g. `name: ` or `[3]: `.
    fn prefix(&self) -> String {
        match self {
            Label::Key(key) => format!("{key}: "),
            Label::Index(index) => format!("[{index}]: "),
        }
    }
}

/// One pending subtree on the formatting worklist.
struct Entry<'a> {
    label: Label<'a>,
    value: &'a Value,
    level: usize,
}

/// Format a parsed JSON tree into indented lines.
///
/// With `include_keys` set, every object field and array element produces a
/// line prefixed with its key (`name: `) or index (`[0]: `). Container
/// entries produce the prefix alone, and their children follow one level
/// deeper; empty containers produce the prefix and nothing below it. With
/// `include_keys` unset, only scalar values are emitted, unprefixed and at
/// indent level zero.
///
/// The walk uses an explicit worklist instead of recursion, so input depth
/// is bounded by memory rather than by the call stack.
///
/// # Example
///
/// ```
/// use json2pdf::format_value;
/// use serde_json::json;
///
/// let value = json!({"person": {"name": "Jo"}});
/// let lines = format_value(&value, true);
///
/// assert_eq!(lines[0].text, "person: ");
/// assert_eq!(lines[1].text, "name: Jo");
/// assert_eq!(lines[1].indent_level, 1);
/// ```
pub fn format_value(root: &Value, include_keys: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut worklist: Vec<Entry> = Vec::new();

    match root {
        Value::Object(_) | Value::Array(_) => push_children(&mut worklist, root, 0),
        scalar => lines.push(Line::new(scalar_text(scalar), 0)),
    }

    while let Some(entry) = worklist.pop() {
        match entry.value {
            Value::Object(_) | Value::Array(_) => {
                if include_keys {
                    lines.push(Line::new(entry.label.prefix(), entry.level));
                }
                push_children(&mut worklist, entry.value, entry.level + 1);
            }
            scalar => {
                if include_keys {
                    let mut text = entry.label.prefix();
                    text.push_str(&scalar_text(scalar));
                    lines.push(Line::new(text, entry.level));
                } else {
                    lines.push(Line::new(scalar_text(scalar), 0));
                }
            }
        }
    }

    lines
}

/// Push the children of a container onto the worklist, in reverse, so the
/// first child is the next entry popped.
fn push_children<'a>(worklist: &mut Vec<Entry<'a>>, container: &'a Value, level: usize) {
    match container {
        Value::Object(fields) => {
            for (key, value) in fields.iter().rev() {
                worklist.push(Entry {
                    label: Label::Key(key),
                    value,
                    level,
                });
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate().rev() {
                worklist.push(Entry {
                    label: Label::Index(index),
                    value,
                    level,
                });
            }
        }
        // scalars carry no children
        _ => {}
    }
}

/// Text representation of a scalar value.
///
/// Strings render as their contents without quotes, booleans and numbers in
/// their canonical form, and null as an empty string.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // containers never reach this point; they expand into child entries
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_flat_object_keeps_document_order() {
        let value = json!({"name": "John Doe", "age": 30});
        let lines = format_value(&value, true);

        assert_eq!(texts(&lines), ["name: John Doe", "age: 30"]);
        assert!(lines.iter().all(|line| line.indent_level == 0));
    }

    #[test]
    fn test_nested_object_indents_one_level_per_depth() {
        let value = json!({"person": {"name": "Jo"}});
        let lines = format_value(&value, true);

        assert_eq!(
            lines,
            vec![Line::new("person: ", 0), Line::new("name: Jo", 1)]
        );
    }

    #[test]
    fn test_array_elements_use_index_labels() {
        let value = json!(["a", "b"]);
        let lines = format_value(&value, true);

        assert_eq!(texts(&lines), ["[0]: a", "[1]: b"]);
    }

    #[test]
    fn test_empty_containers_emit_prefix_only() {
        let value = json!({"a": {}, "b": []});
        let lines = format_value(&value, true);

        assert_eq!(texts(&lines), ["a: ", "b: "]);
    }

    #[test]
    fn test_empty_root_produces_no_lines() {
        assert!(format_value(&json!({}), true).is_empty());
        assert!(format_value(&json!([]), true).is_empty());
        assert!(format_value(&json!({}), false).is_empty());
    }

    #[test]
    fn test_scalar_root_is_a_single_line() {
        assert_eq!(format_value(&json!(42), true), vec![Line::new("42", 0)]);
        assert_eq!(format_value(&json!(42), false), vec![Line::new("42", 0)]);
        assert_eq!(
            format_value(&json!("hello"), true),
            vec![Line::new("hello", 0)]
        );
    }

    #[test]
    fn test_null_renders_as_empty_text() {
        let value = json!({"note": null});

        assert_eq!(format_value(&value, true), vec![Line::new("note: ", 0)]);
        assert_eq!(format_value(&value, false), vec![Line::new("", 0)]);
    }

    #[test]
    fn test_booleans_and_numbers_render_canonically() {
        let value = json!({"active": true, "retired": false, "score": 1.5, "count": -3});
        let lines = format_value(&value, true);

        assert_eq!(
            texts(&lines),
            ["active: true", "retired: false", "score: 1.5", "count: -3"]
        );
    }

    #[test]
    fn test_mixed_nesting_walks_in_document_order() {
        let value = json!({
            "id": 7,
            "items": [{"sku": "a-1"}, "plain"],
            "done": false
        });
        let lines = format_value(&value, true);

        assert_eq!(
            lines,
            vec![
                Line::new("id: 7", 0),
                Line::new("items: ", 0),
                Line::new("[0]: ", 1),
                Line::new("sku: a-1", 2),
                Line::new("[1]: plain", 1),
                Line::new("done: false", 0),
            ]
        );
    }

    #[test]
    fn test_without_keys_only_scalars_remain() {
        let value = json!({
            "id": 7,
            "items": [{"sku": "a-1"}, "plain"],
            "done": false
        });
        let lines = format_value(&value, false);

        assert_eq!(lines.len(), 4);
        assert_eq!(texts(&lines), ["7", "a-1", "plain", "false"]);
        assert!(lines.iter().all(|line| line.indent_level == 0));
    }

    #[test]
    fn test_without_keys_empty_containers_vanish() {
        let value = json!({"a": {}, "b": [], "c": 1});
        let lines = format_value(&value, false);

        assert_eq!(texts(&lines), ["1"]);
    }

    #[test]
    fn test_deeply_nested_input_does_not_overflow() {
        let depth = 2000;
        let mut value = Value::String("x".to_string());
        for _ in 0..depth {
            value = Value::Array(vec![value]);
        }

        let lines = format_value(&value, true);
        assert_eq!(lines.len(), depth);
        assert_eq!(lines[depth - 1], Line::new("[0]: x", depth - 1));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let value = json!({"b": [1, {"c": null}], "a": "z"});

        let first = format_value(&value, true);
        let second = format_value(&value, true);
        assert_eq!(first, second);
    }
}

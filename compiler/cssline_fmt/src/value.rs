//! Value text flattening.
//!
//! Produces the text used to measure a declaration value. A node with direct
//! text contributes that text and nothing else; a container contributes its
//! children's text, concatenated in order with no separators.

use cssline_ir::{Value, ValueNode};
use cssline_stack::ensure_sufficient_stack;

/// Flatten a declaration value to single-line text. Absent values are empty.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::Raw(text)) => text.clone(),
        Some(Value::Tree(node)) => {
            let mut out = String::new();
            collect(node, &mut out);
            out
        }
    }
}

fn collect(node: &ValueNode, out: &mut String) {
    if let Some(text) = &node.value {
        out.push_str(text);
        return;
    }
    ensure_sufficient_stack(|| {
        for child in &node.nodes {
            collect(child, out);
        }
    });
}

//! Selector text reconstruction.
//!
//! Rebuilds canonical single-line text from a structural selector. Components
//! are concatenated without inserted spaces (combinators carry their own),
//! groups are joined with `", "`. Absent fields render as empty text.

use cssline_ir::{AttributeSelector, Selector, SelectorComponent, SelectorGroup};

/// Separator between comma-separated selector groups.
const GROUP_SEPARATOR: &str = ", ";

/// Render a selector as single-line text.
pub fn render_selector(selector: &Selector) -> String {
    match selector {
        Selector::Raw(text) => text.clone(),
        Selector::Root(root) => root
            .groups
            .iter()
            .map(render_group)
            .collect::<Vec<_>>()
            .join(GROUP_SEPARATOR),
    }
}

fn render_group(group: &SelectorGroup) -> String {
    let mut out = String::new();
    for component in &group.nodes {
        push_component(&mut out, component);
    }
    out
}

fn push_component(out: &mut String, component: &SelectorComponent) {
    match component {
        SelectorComponent::Tag { value }
        | SelectorComponent::Combinator { value }
        | SelectorComponent::Other { value, .. } => out.push_str(text_or_empty(value.as_deref())),
        SelectorComponent::Class { value } => {
            out.push('.');
            out.push_str(text_or_empty(value.as_deref()));
        }
        SelectorComponent::Id { value } => {
            out.push('#');
            out.push_str(text_or_empty(value.as_deref()));
        }
        SelectorComponent::Universal => out.push('*'),
        SelectorComponent::Nesting => out.push('&'),
        SelectorComponent::Attribute(attribute) => push_attribute(out, attribute),
        SelectorComponent::Pseudo { value } => {
            let value = text_or_empty(value.as_deref());
            if !value.starts_with(':') {
                out.push(':');
            }
            out.push_str(value);
        }
        SelectorComponent::PseudoElement { value } => {
            let value = text_or_empty(value.as_deref());
            // `:before` gains one colon, `before` gains two.
            if !value.starts_with("::") {
                out.push_str(if value.starts_with(':') { ":" } else { "::" });
            }
            out.push_str(value);
        }
    }
}

fn push_attribute(out: &mut String, attribute: &AttributeSelector) {
    out.push('[');
    out.push_str(text_or_empty(attribute.attribute.as_deref()));
    out.push_str(text_or_empty(attribute.operator.as_deref()));
    out.push_str(text_or_empty(attribute.value.as_deref()));
    if attribute.insensitive {
        out.push_str(" i");
    }
    out.push(']');
}

#[inline]
fn text_or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

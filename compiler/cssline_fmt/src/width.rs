//! Single-line width estimation.
//!
//! Estimates how wide `selector { property: value; }` would be at the rule's
//! position without laying it out.
//!
//! # Width Formula
//!
//! | Part | Width |
//! |------|-------|
//! | Indentation | enclosing rules and at-rules × indent unit |
//! | Selector | rendered selector length |
//! | Property | property name length |
//! | Value | flattened value length |
//! | Punctuation | [`SINGLE_LINE_OVERHEAD`] |
//!
//! Lengths are counted in `char`s. The engine may still reflow the value when
//! printing it; the estimate does not model that.

use cssline_ir::{AstPath, FormatOptions};

/// Fixed columns added for the punctuation around selector, property and value.
pub const SINGLE_LINE_OVERHEAD: usize = 6;

/// Number of enclosing blocks (rules and at-rules) above the current node.
pub fn nesting_depth(path: &AstPath<'_>) -> usize {
    path.ancestors()
        .filter(|ancestor| ancestor.node_kind().is_some_and(|kind| kind.opens_block()))
        .count()
}

/// Columns of indentation in front of the current node.
pub fn indent_columns(path: &AstPath<'_>, options: &FormatOptions) -> usize {
    nesting_depth(path) * options.indent_unit()
}

/// Estimated width of the single-line form of the rule at the top of `path`.
pub fn estimate_line_width(
    selector: &str,
    property: &str,
    value: &str,
    path: &AstPath<'_>,
    options: &FormatOptions,
) -> usize {
    indent_columns(path, options)
        + selector.chars().count()
        + property.chars().count()
        + value.chars().count()
        + SINGLE_LINE_OVERHEAD
}

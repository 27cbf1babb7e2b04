//! Print Dispatcher
//!
//! [`SingleLinePrinter`] wraps the engine's default stylesheet printer. For a
//! rule holding exactly one declaration it renders
//! `selector { property: value; }` when the estimated width fits the print
//! width; every other node, and every rule that does not fit, is handed to the
//! wrapped printer untouched.
//!
//! The declaration value in the single-line form is printed through the
//! engine's own print callback, so value formatting (color case, number
//! normalization, function spacing) matches the multi-line output. The
//! flattened value text is only used for measuring.

use cssline_ir::{AstPath, Doc, FormatOptions, NodeRef, Printer};
use tracing::trace;

use crate::collapse::SingleDeclarationRule;
use crate::selector::render_selector;
use crate::value::render_value;
use crate::width::estimate_line_width;

/// Printer that collapses short single-declaration rules onto one line.
#[derive(Clone, Debug, Default)]
pub struct SingleLinePrinter<P> {
    default: P,
}

impl<P: Printer> SingleLinePrinter<P> {
    /// Wrap the engine's default printer.
    pub fn new(default: P) -> Self {
        SingleLinePrinter { default }
    }

    /// The wrapped printer.
    pub fn inner(&self) -> &P {
        &self.default
    }

    /// Single-line document for the current node, or `None` when the node is
    /// not a collapsible rule or the line would be too wide.
    fn print_single_line<'a>(
        path: &mut AstPath<'a>,
        options: &FormatOptions,
        print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
    ) -> Option<Doc> {
        let candidate = SingleDeclarationRule::from_node(path.node())?;
        let declaration = candidate.declaration;

        let selector = render_selector(&candidate.rule.selector);
        let value = render_value(declaration.value.as_ref());
        let width = estimate_line_width(&selector, &declaration.prop, &value, path, options);
        let fits = width <= options.print_width;

        trace!(
            selector = %selector,
            width,
            print_width = options.print_width,
            fits,
            "single-declaration rule"
        );

        if !fits {
            return None;
        }

        let value_doc = match &declaration.value {
            Some(value) => path.call(NodeRef::Node(candidate.declaration_node), |path| {
                path.call(NodeRef::Value(value), |path| print(path))
            }),
            None => Doc::empty(),
        };

        Some(Doc::concat([
            Doc::text(selector),
            Doc::text(" { "),
            Doc::text(declaration.prop.as_str()),
            Doc::text(": "),
            value_doc,
            Doc::text("; }"),
        ]))
    }
}

impl<P: Printer> Printer for SingleLinePrinter<P> {
    #[tracing::instrument(level = "trace", skip_all, fields(depth = path.depth()))]
    fn print<'a>(
        &self,
        path: &mut AstPath<'a>,
        options: &FormatOptions,
        print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
    ) -> Doc {
        if let Some(doc) = Self::print_single_line(path, options, print) {
            return doc;
        }
        self.default.print(path, options, print)
    }
}

//! Contract with the host pretty-printing engine.
//!
//! The engine parses source into [`Node`](crate::Node) trees, walks them, and
//! calls a [`Printer`] once per node. Plugins extend the engine by wrapping its
//! default printer and registering the wrapper under the same AST format name.

use crate::doc::Doc;
use crate::options::FormatOptions;
use crate::path::AstPath;

/// Per-node print entry point.
///
/// `print` renders whatever node is current on the path it is given, through
/// the engine's complete printer chain. Printers use it together with
/// [`AstPath::call`] to render children.
pub trait Printer {
    fn print<'a>(
        &self,
        path: &mut AstPath<'a>,
        options: &FormatOptions,
        print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
    ) -> Doc;
}

impl<P: Printer + ?Sized> Printer for &P {
    #[inline]
    fn print<'a>(
        &self,
        path: &mut AstPath<'a>,
        options: &FormatOptions,
        print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
    ) -> Doc {
        (**self).print(path, options, print)
    }
}

/// A language the engine can format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Parser names able to read this language.
    pub parsers: &'static [&'static str],
    /// File extensions, with the leading dot.
    pub extensions: &'static [&'static str],
}

impl Language {
    /// Whether `file_name` ends with one of this language's extensions.
    pub fn matches_file(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext))
    }
}

/// A parser the engine provides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserInfo {
    pub name: &'static str,
    /// Name of the tree format the parser produces; selects the printer.
    pub ast_format: &'static str,
}

/// What the engine exposes to plugins.
pub trait Engine {
    type Printer: Printer;

    fn languages(&self) -> &[Language];

    fn parsers(&self) -> &[ParserInfo];

    /// The engine's own printer for stylesheet trees.
    fn default_printer(&self) -> &Self::Printer;
}

//! Plugin surface handed to the engine.
//!
//! Languages and parsers are the engine's own; the only contribution is a
//! printer for the PostCSS tree format that wraps the engine's default one.

use std::path::Path;

use cssline_ir::{Engine, Language, ParserInfo, Printer};
use rustc_hash::FxHashMap;

use crate::printer::SingleLinePrinter;

/// Tree format name shared by the CSS, Less and SCSS parsers.
pub const POSTCSS_AST_FORMAT: &str = "postcss";

/// Printers keyed by the tree format they print.
#[derive(Debug)]
pub struct PrinterRegistry<P> {
    printers: FxHashMap<&'static str, P>,
}

impl<P: Printer> PrinterRegistry<P> {
    pub fn new() -> Self {
        PrinterRegistry {
            printers: FxHashMap::default(),
        }
    }

    /// Register `printer` for `ast_format`, returning any printer it replaces.
    pub fn register(&mut self, ast_format: &'static str, printer: P) -> Option<P> {
        self.printers.insert(ast_format, printer)
    }

    pub fn get(&self, ast_format: &str) -> Option<&P> {
        self.printers.get(ast_format)
    }

    /// Printer for the tree format produced by `parser`.
    pub fn for_parser(&self, parser: &ParserInfo) -> Option<&P> {
        self.get(parser.ast_format)
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}

impl<P: Printer> Default for PrinterRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// The single-line plugin, bound to a host engine.
pub struct SingleLinePlugin<E> {
    engine: E,
}

impl<E: Engine> SingleLinePlugin<E> {
    pub fn new(engine: E) -> Self {
        SingleLinePlugin { engine }
    }

    /// The engine's languages, unchanged.
    pub fn languages(&self) -> &[Language] {
        self.engine.languages()
    }

    /// The engine's parsers, unchanged.
    pub fn parsers(&self) -> &[ParserInfo] {
        self.engine.parsers()
    }

    /// Parser for the file at `path`: the first parser of the first language
    /// claiming the file's extension.
    pub fn parser_for_path(&self, path: &Path) -> Option<&ParserInfo> {
        let file_name = path.file_name()?.to_str()?;
        let language = self
            .languages()
            .iter()
            .find(|language| language.matches_file(file_name))?;
        let parser_name = *language.parsers.first()?;
        self.parsers()
            .iter()
            .find(|parser| parser.name == parser_name)
    }

    /// One printer for [`POSTCSS_AST_FORMAT`], wrapping the engine's default.
    pub fn printers(&self) -> PrinterRegistry<SingleLinePrinter<&E::Printer>> {
        let mut registry = PrinterRegistry::new();
        registry.register(
            POSTCSS_AST_FORMAT,
            SingleLinePrinter::new(self.engine.default_printer()),
        );
        registry
    }
}

//! Reference engine for integration tests.
//!
//! A small stand-in for the host pretty-printer: a default stylesheet printer
//! (multi-line blocks, value normalization), a tree-walk driver and a `Doc`
//! renderer. Only what the tests need to observe real output text.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::path::Path;

use cssline_fmt::{render_selector, SingleLinePlugin, SingleLinePrinter};
use cssline_ir::{
    AstPath, Doc, Engine, FormatOptions, Language, Node, NodeRef, ParserInfo, Printer, Value,
    ValueKind, ValueNode,
};

/// The engine's own printer: every block multi-line.
#[derive(Debug, Default)]
pub struct ReferencePrinter;

impl Printer for ReferencePrinter {
    fn print<'a>(
        &self,
        path: &mut AstPath<'a>,
        _options: &FormatOptions,
        print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
    ) -> Doc {
        match path.node() {
            NodeRef::Node(node) => print_node(node, path, print),
            NodeRef::Selector(selector) => Doc::text(render_selector(selector)),
            NodeRef::Value(Value::Raw(text)) => Doc::text(text.as_str()),
            NodeRef::Value(Value::Tree(node)) => path.call(NodeRef::ValueNode(node), |p| print(p)),
            NodeRef::ValueNode(node) => print_value_node(node, path, print),
        }
    }
}

fn print_children<'a>(
    nodes: &'a [Node],
    path: &mut AstPath<'a>,
    print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
) -> Vec<Doc> {
    nodes
        .iter()
        .map(|child| path.call(NodeRef::Node(child), |p| print(p)))
        .collect()
}

fn print_block<'a>(
    nodes: &'a [Node],
    path: &mut AstPath<'a>,
    print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
) -> Doc {
    if nodes.is_empty() {
        return Doc::concat([Doc::text(" {"), Doc::Hardline, Doc::text("}")]);
    }
    let children = print_children(nodes, path, print);
    Doc::concat([
        Doc::text(" {"),
        Doc::indent(Doc::concat([
            Doc::Hardline,
            Doc::join(&Doc::Hardline, children),
        ])),
        Doc::Hardline,
        Doc::text("}"),
    ])
}

fn print_node<'a>(
    node: &'a Node,
    path: &mut AstPath<'a>,
    print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
) -> Doc {
    match node {
        Node::Root(root) => {
            let children = print_children(&root.nodes, path, print);
            if children.is_empty() {
                return Doc::empty();
            }
            Doc::concat([Doc::join(&Doc::Hardline, children), Doc::Hardline])
        }
        Node::Rule(rule) => {
            let selector = path.call(NodeRef::Selector(&rule.selector), |p| print(p));
            let block = match &rule.nodes {
                Some(nodes) => print_block(nodes, path, print),
                None => Doc::text(" {}"),
            };
            Doc::concat([selector, block])
        }
        Node::AtRule(at_rule) => {
            let mut parts = vec![Doc::text(format!("@{}", at_rule.name))];
            if !at_rule.params.is_empty() {
                parts.push(Doc::text(format!(" {}", at_rule.params)));
            }
            parts.push(match &at_rule.nodes {
                Some(nodes) => print_block(nodes, path, print),
                None => Doc::text(";"),
            });
            Doc::concat(parts)
        }
        Node::Declaration(decl) => {
            let value = match &decl.value {
                Some(value) => path.call(NodeRef::Value(value), |p| print(p)),
                None => Doc::empty(),
            };
            Doc::concat([
                Doc::text(decl.prop.as_str()),
                Doc::text(": "),
                value,
                Doc::text(";"),
            ])
        }
        Node::Comment(comment) if comment.inline => Doc::text(format!("//{}", comment.text)),
        Node::Comment(comment) => Doc::text(format!("/*{}*/", comment.text)),
    }
}

fn print_value_node<'a>(
    node: &'a ValueNode,
    path: &mut AstPath<'a>,
    print: &mut dyn FnMut(&mut AstPath<'a>) -> Doc,
) -> Doc {
    let children: Vec<Doc> = node
        .nodes
        .iter()
        .map(|child| path.call(NodeRef::ValueNode(child), |p| print(p)))
        .collect();
    let text = node.value.as_deref().unwrap_or_default();
    match node.kind {
        ValueKind::CommaGroup => Doc::join(&Doc::text(" "), children),
        ValueKind::ParenGroup => {
            Doc::concat([Doc::text("("), Doc::concat(children), Doc::text(")")])
        }
        ValueKind::Function => Doc::concat([
            Doc::text(text),
            Doc::text("("),
            Doc::concat(children),
            Doc::text(")"),
        ]),
        ValueKind::Comma => Doc::text(", "),
        ValueKind::Word if text.starts_with('#') => Doc::text(text.to_ascii_lowercase()),
        ValueKind::Number => Doc::text(leading_zero(text)),
        ValueKind::Root | ValueKind::Unknown(_) if node.value.is_none() => Doc::concat(children),
        _ => Doc::text(text),
    }
}

/// `.5rem` -> `0.5rem`, `-.5` -> `-0.5`.
fn leading_zero(number: &str) -> String {
    if let Some(rest) = number.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = number.strip_prefix('.') {
        format!("0.{rest}")
    } else {
        number.to_owned()
    }
}

/// Lay out a document: hardlines break and re-indent, trailing blanks trimmed.
pub fn render(doc: &Doc, options: &FormatOptions) -> String {
    let unit = if options.use_tabs {
        "\t".to_owned()
    } else {
        " ".repeat(options.tab_width.unwrap_or(2))
    };
    let mut out = String::new();
    render_into(doc, 0, &unit, &mut out);
    out
}

fn render_into(doc: &Doc, level: usize, unit: &str, out: &mut String) {
    match doc {
        Doc::Text(text) => out.push_str(text),
        Doc::Concat(parts) => {
            for part in parts {
                render_into(part, level, unit, out);
            }
        }
        Doc::Hardline => {
            let trimmed = out.trim_end_matches([' ', '\t']).len();
            out.truncate(trimmed);
            out.push('\n');
            for _ in 0..level {
                out.push_str(unit);
            }
        }
        Doc::Indent(contents) => render_into(contents, level + 1, unit, out),
    }
}

/// Walk `root` with `printer` as the top of the printer chain.
pub fn format_tree<P: Printer>(root: &Node, printer: &P, options: &FormatOptions) -> String {
    let mut path = AstPath::new(root);
    let doc = print_path(printer, &mut path, options);
    render(&doc, options)
}

fn print_path<'a, P: Printer>(printer: &P, path: &mut AstPath<'a>, options: &FormatOptions) -> Doc {
    printer.print(path, options, &mut |p| print_path(printer, p, options))
}

/// Engine output without the overlay.
pub fn format_default(root: &Node, options: &FormatOptions) -> String {
    format_tree(root, &ReferencePrinter, options)
}

/// Engine output with the single-line printer wrapping the default.
pub fn format_single_line(root: &Node, options: &FormatOptions) -> String {
    format_tree(root, &SingleLinePrinter::new(ReferencePrinter), options)
}

const LANGUAGES: &[Language] = &[
    Language {
        name: "CSS",
        parsers: &["css"],
        extensions: &[".css", ".pcss", ".postcss"],
    },
    Language {
        name: "Less",
        parsers: &["less"],
        extensions: &[".less"],
    },
    Language {
        name: "SCSS",
        parsers: &["scss"],
        extensions: &[".scss"],
    },
];

const PARSERS: &[ParserInfo] = &[
    ParserInfo {
        name: "css",
        ast_format: "postcss",
    },
    ParserInfo {
        name: "less",
        ast_format: "postcss",
    },
    ParserInfo {
        name: "scss",
        ast_format: "postcss",
    },
];

#[derive(Debug, Default)]
pub struct ReferenceEngine {
    printer: ReferencePrinter,
}

impl Engine for ReferenceEngine {
    type Printer = ReferencePrinter;

    fn languages(&self) -> &[Language] {
        LANGUAGES
    }

    fn parsers(&self) -> &[ParserInfo] {
        PARSERS
    }

    fn default_printer(&self) -> &ReferencePrinter {
        &self.printer
    }
}

fn format_with_parser(
    plugin: &SingleLinePlugin<ReferenceEngine>,
    parser: Option<&ParserInfo>,
    root: &Node,
    options: &FormatOptions,
) -> String {
    let printers = plugin.printers();
    match parser.and_then(|parser| printers.for_parser(parser)) {
        Some(printer) => format_tree(root, printer, options),
        None => panic!("no printer for parser {:?}", options.parser),
    }
}

/// Format through the plugin's registered printer for `options.parser`.
pub fn format_with_plugin(root: &Node, options: &FormatOptions) -> String {
    let plugin = SingleLinePlugin::new(ReferenceEngine::default());
    let parser = plugin
        .parsers()
        .iter()
        .find(|parser| parser.name == options.parser.parser_name());
    format_with_parser(&plugin, parser, root, options)
}

/// Format `root` as the contents of the file at `path`: options and parser
/// both come from the file's extension.
pub fn format_file(path: &str, root: &Node) -> String {
    let path = Path::new(path);
    let options = match FormatOptions::for_path(path) {
        Ok(options) => options,
        Err(err) => panic!("{err}"),
    };
    let plugin = SingleLinePlugin::new(ReferenceEngine::default());
    let parser = plugin.parser_for_path(path);
    assert_eq!(
        parser.map(|parser| parser.name),
        Some(options.parser.parser_name()),
        "extension picks the same dialect for options and parser"
    );
    format_with_parser(&plugin, parser, root, &options)
}

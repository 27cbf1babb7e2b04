//! cssline IR - Stylesheet Tree and Engine Contract
//!
//! This crate holds the types shared between a host pretty-printing engine
//! and the cssline overlay:
//! - Stylesheet nodes (rules, at-rules, declarations, comments)
//! - Structural selector and value trees
//! - [`AstPath`], the ancestor stack handed to printers
//! - [`Doc`], the engine's intermediate rendering object
//! - [`FormatOptions`], the resolved configuration
//! - [`Printer`] and [`Engine`], the seams the overlay plugs into
//!
//! # Design Philosophy
//!
//! - **Engine owns the tree**: nodes are built by the engine's parsers and only
//!   borrowed while printing.
//! - **Absent is representable**: every textual field that a parser may omit is an
//!   `Option`, so consumers can degrade to empty text instead of failing.
//! - **Closed kinds with a fallback**: selector components and value kinds are
//!   enums with an explicit catch-all variant for kinds a parser does not name.

mod doc;
pub mod engine;
mod node;
mod options;
mod path;
mod selector;
mod value;

pub use doc::Doc;
pub use engine::{Engine, Language, ParserInfo, Printer};
pub use node::{AtRule, Comment, Declaration, Node, NodeKind, Root, Rule};
pub use options::{Dialect, FormatOptions, OptionsError, DEFAULT_PRINT_WIDTH, DEFAULT_TAB_WIDTH};
pub use path::{AstPath, NodeRef};
pub use selector::{AttributeSelector, Selector, SelectorComponent, SelectorGroup, SelectorRoot};
pub use value::{Value, ValueKind, ValueNode};

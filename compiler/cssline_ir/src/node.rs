//! Stylesheet nodes.
//!
//! The shape mirrors what PostCSS-family parsers produce for CSS, Less and
//! SCSS: a root holding rules, at-rules, declarations and comments, where rules
//! and at-rules may hold further nodes.

use std::fmt;

use crate::selector::Selector;
use crate::value::Value;

/// The kind tag of a [`Node`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Root,
    Rule,
    AtRule,
    Declaration,
    Comment,
}

impl NodeKind {
    /// The PostCSS-style type name (`css-rule`, `css-decl`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "css-root",
            NodeKind::Rule => "css-rule",
            NodeKind::AtRule => "css-atrule",
            NodeKind::Declaration => "css-decl",
            NodeKind::Comment => "css-comment",
        }
    }

    /// Whether nodes of this kind open a `{ }` block that indents its children.
    #[inline]
    pub fn opens_block(self) -> bool {
        matches!(self, NodeKind::Rule | NodeKind::AtRule)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stylesheet node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Root(Root),
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

/// Top-level container of a parsed document.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Root {
    pub nodes: Vec<Node>,
}

/// A style rule: `selector { ... }`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rule {
    pub selector: Selector,
    /// Child nodes. `None` when the parser produced no child sequence at all.
    pub nodes: Option<Vec<Node>>,
}

/// An at-rule: `@name params { ... }` or `@name params;`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    pub params: String,
    /// `None` for block-less at-rules such as `@import`.
    pub nodes: Option<Vec<Node>>,
}

/// A `property: value` pair.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    pub prop: String,
    pub value: Option<Value>,
}

/// A block comment, or a `//` line comment in Less/SCSS.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    /// Text between the delimiters.
    pub text: String,
    pub inline: bool,
}

impl Node {
    pub fn root(nodes: Vec<Node>) -> Self {
        Node::Root(Root { nodes })
    }

    pub fn rule(selector: impl Into<Selector>, nodes: Vec<Node>) -> Self {
        Node::Rule(Rule {
            selector: selector.into(),
            nodes: Some(nodes),
        })
    }

    pub fn at_rule(name: impl Into<String>, params: impl Into<String>, nodes: Vec<Node>) -> Self {
        Node::AtRule(AtRule {
            name: name.into(),
            params: params.into(),
            nodes: Some(nodes),
        })
    }

    pub fn declaration(prop: impl Into<String>, value: impl Into<Value>) -> Self {
        Node::Declaration(Declaration {
            prop: prop.into(),
            value: Some(value.into()),
        })
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(Comment {
            text: text.into(),
            inline: false,
        })
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Node::Comment(Comment {
            text: text.into(),
            inline: true,
        })
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Rule(_) => NodeKind::Rule,
            Node::AtRule(_) => NodeKind::AtRule,
            Node::Declaration(_) => NodeKind::Declaration,
            Node::Comment(_) => NodeKind::Comment,
        }
    }

    /// The child sequence, if this node has one.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.nodes),
            Node::Rule(rule) => rule.nodes.as_deref(),
            Node::AtRule(at_rule) => at_rule.nodes.as_deref(),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        }
    }
}

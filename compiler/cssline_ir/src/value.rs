//! Structural declaration values.
//!
//! Values are trees of words, functions and punctuation, as produced by
//! `postcss-value-parser`-style parsers. A node either carries its own text
//! (`value`) or is a container whose text is the concatenation of its children.
//! Separators are ordinary child tokens; containers never imply any.

/// A declaration's value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    /// Value text used as-is.
    Raw(String),
    /// Parsed value tree.
    Tree(ValueNode),
}

/// The parser's classification of a [`ValueNode`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Root,
    /// Space-separated run of tokens.
    CommaGroup,
    /// Parenthesised group.
    ParenGroup,
    Word,
    Number,
    String,
    /// A function call. `value` holds the function name, `nodes` the arguments.
    Function,
    Comma,
    Colon,
    Operator,
    /// A kind with no dedicated variant, by parser type name.
    Unknown(String),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueNode {
    pub kind: ValueKind,
    /// Direct text of this node, when it has one.
    pub value: Option<String>,
    pub nodes: Vec<ValueNode>,
}

impl ValueNode {
    /// A leaf with direct text.
    pub fn leaf(kind: ValueKind, text: impl Into<String>) -> Self {
        ValueNode {
            kind,
            value: Some(text.into()),
            nodes: Vec::new(),
        }
    }

    /// A container without direct text.
    pub fn group(kind: ValueKind, nodes: Vec<ValueNode>) -> Self {
        ValueNode {
            kind,
            value: None,
            nodes,
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Word, text)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::leaf(ValueKind::Number, text)
    }

    pub fn function(name: impl Into<String>, args: Vec<ValueNode>) -> Self {
        ValueNode {
            kind: ValueKind::Function,
            value: Some(name.into()),
            nodes: args,
        }
    }

    /// `value-root` holding a single space-separated group.
    pub fn root(nodes: Vec<ValueNode>) -> Self {
        Self::group(
            ValueKind::Root,
            vec![Self::group(ValueKind::CommaGroup, nodes)],
        )
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Raw(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Raw(text)
    }
}

impl From<ValueNode> for Value {
    fn from(node: ValueNode) -> Self {
        Value::Tree(node)
    }
}

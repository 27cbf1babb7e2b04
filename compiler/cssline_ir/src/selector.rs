//! Structural selector trees.
//!
//! A rule's selector is either text the engine already resolved, or a root
//! holding comma-separated groups of simple-selector components. Components
//! keep combinators as their own tokens, with whatever surrounding spaces the
//! parser recorded.

/// A rule's selector.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Selector {
    /// Selector text used as-is.
    Raw(String),
    /// Parsed selector list.
    Root(SelectorRoot),
}

/// A comma-separated selector list (`a, b.c`).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SelectorRoot {
    pub groups: Vec<SelectorGroup>,
}

/// One complex selector of a list: components in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SelectorGroup {
    pub nodes: Vec<SelectorComponent>,
}

/// A single token of a complex selector.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SelectorComponent {
    /// Type selector: `div`.
    Tag { value: Option<String> },
    /// `.name`, stored without the dot.
    Class { value: Option<String> },
    /// `#name`, stored without the hash.
    Id { value: Option<String> },
    /// `*`
    Universal,
    /// `&` in nesting-capable dialects.
    Nesting,
    Attribute(AttributeSelector),
    /// Pseudo-class text, with or without its leading `:`, including any
    /// argument list (`:not(.a)`).
    Pseudo { value: Option<String> },
    /// Pseudo-element text, with zero, one or two leading colons.
    PseudoElement { value: Option<String> },
    /// Combinator token (`" > "`, `" "`, `"+"`), spacing as authored.
    Combinator { value: Option<String> },
    /// Any component kind the parser emits that has no dedicated variant.
    Other { kind: String, value: Option<String> },
}

/// `[name<operator><value> i]`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AttributeSelector {
    pub attribute: Option<String>,
    pub operator: Option<String>,
    /// Value as authored, quotes included.
    pub value: Option<String>,
    /// Trailing ` i` case-insensitivity flag.
    pub insensitive: bool,
}

impl Selector {
    /// Build a parsed selector list from groups of components.
    pub fn list(groups: impl IntoIterator<Item = Vec<SelectorComponent>>) -> Self {
        Selector::Root(SelectorRoot {
            groups: groups
                .into_iter()
                .map(|nodes| SelectorGroup { nodes })
                .collect(),
        })
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Selector::Raw(text.to_owned())
    }
}

impl From<String> for Selector {
    fn from(text: String) -> Self {
        Selector::Raw(text)
    }
}

impl From<SelectorRoot> for Selector {
    fn from(root: SelectorRoot) -> Self {
        Selector::Root(root)
    }
}

impl SelectorComponent {
    pub fn tag(value: impl Into<String>) -> Self {
        SelectorComponent::Tag {
            value: Some(value.into()),
        }
    }

    pub fn class(value: impl Into<String>) -> Self {
        SelectorComponent::Class {
            value: Some(value.into()),
        }
    }

    pub fn id(value: impl Into<String>) -> Self {
        SelectorComponent::Id {
            value: Some(value.into()),
        }
    }

    pub fn pseudo(value: impl Into<String>) -> Self {
        SelectorComponent::Pseudo {
            value: Some(value.into()),
        }
    }

    pub fn pseudo_element(value: impl Into<String>) -> Self {
        SelectorComponent::PseudoElement {
            value: Some(value.into()),
        }
    }

    pub fn combinator(value: impl Into<String>) -> Self {
        SelectorComponent::Combinator {
            value: Some(value.into()),
        }
    }
}

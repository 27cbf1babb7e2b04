//! Intermediate rendering documents.
//!
//! Printers return a [`Doc`] rather than text; the engine lays the document out
//! afterwards. Only the constructs needed by stylesheet printers exist here:
//! text, concatenation, forced line breaks and indentation.

/// A layout document.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Doc {
    Text(String),
    Concat(Vec<Doc>),
    /// Unconditional line break, followed by the current indentation.
    Hardline,
    /// Contents printed one indentation level deeper.
    Indent(Box<Doc>),
}

impl Doc {
    /// The empty document.
    #[inline]
    pub fn empty() -> Self {
        Doc::Concat(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Doc::Text(text.into())
    }

    pub fn concat(parts: impl IntoIterator<Item = Doc>) -> Self {
        Doc::Concat(parts.into_iter().collect())
    }

    pub fn indent(contents: Doc) -> Self {
        Doc::Indent(Box::new(contents))
    }

    /// Interleave `separator` between `docs`.
    pub fn join(separator: &Doc, docs: impl IntoIterator<Item = Doc>) -> Self {
        let mut parts = Vec::new();
        for (i, doc) in docs.into_iter().enumerate() {
            if i > 0 {
                parts.push(separator.clone());
            }
            parts.push(doc);
        }
        Doc::Concat(parts)
    }
}

impl From<&str> for Doc {
    fn from(text: &str) -> Self {
        Doc::Text(text.to_owned())
    }
}

impl From<String> for Doc {
    fn from(text: String) -> Self {
        Doc::Text(text)
    }
}

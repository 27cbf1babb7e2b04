//! Print path: the node being printed plus its ancestor chain.
//!
//! The engine pushes a child with [`AstPath::call`] before printing it and pops
//! it afterwards, so a printer always sees the chain from the document root
//! down to its node. Entries are borrowed from the engine's tree and live only
//! as long as the walk.

use std::mem;

use crate::node::{Node, NodeKind};
use crate::selector::Selector;
use crate::value::{Value, ValueNode};

/// A borrowed reference to anything a printer can be asked to print.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    Node(&'a Node),
    Selector(&'a Selector),
    Value(&'a Value),
    ValueNode(&'a ValueNode),
}

impl<'a> NodeRef<'a> {
    /// The stylesheet node kind, or `None` for selector and value entries.
    #[inline]
    pub fn node_kind(self) -> Option<NodeKind> {
        match self {
            NodeRef::Node(node) => Some(node.kind()),
            NodeRef::Selector(_) | NodeRef::Value(_) | NodeRef::ValueNode(_) => None,
        }
    }

    pub fn as_node(self) -> Option<&'a Node> {
        match self {
            NodeRef::Node(node) => Some(node),
            _ => None,
        }
    }
}

/// The current node and its ancestors, root first.
#[derive(Clone, Debug)]
pub struct AstPath<'a> {
    current: NodeRef<'a>,
    ancestors: Vec<NodeRef<'a>>,
}

impl<'a> AstPath<'a> {
    /// Start a walk at `root`.
    pub fn new(root: &'a Node) -> Self {
        AstPath {
            current: NodeRef::Node(root),
            ancestors: Vec::new(),
        }
    }

    /// The node being printed.
    #[inline]
    pub fn node(&self) -> NodeRef<'a> {
        self.current
    }

    /// The ancestor `level` steps up; `parent(0)` is the direct parent.
    pub fn parent(&self, level: usize) -> Option<NodeRef<'a>> {
        self.ancestors.iter().rev().nth(level).copied()
    }

    /// Ancestors from the direct parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + '_ {
        self.ancestors.iter().rev().copied()
    }

    /// Number of ancestors above the current node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Run `f` with `child` as the current node, restoring the path afterwards.
    pub fn call<R>(&mut self, child: NodeRef<'a>, f: impl FnOnce(&mut Self) -> R) -> R {
        let parent = mem::replace(&mut self.current, child);
        self.ancestors.push(parent);
        let result = f(self);
        if let Some(parent) = self.ancestors.pop() {
            self.current = parent;
        }
        result
    }
}

//! Recognition of collapsible rules.
//!
//! A rule is collapsible when its child sequence exists and holds exactly one
//! node, a declaration. Comments anywhere in the block disqualify it.

use cssline_ir::{Declaration, Node, NodeKind, NodeRef, Rule};

/// A rule with a single declaration, borrowed from the tree.
#[derive(Copy, Clone, Debug)]
pub struct SingleDeclarationRule<'a> {
    pub rule: &'a Rule,
    /// The declaration's node, for pushing onto the print path.
    pub declaration_node: &'a Node,
    pub declaration: &'a Declaration,
}

impl<'a> SingleDeclarationRule<'a> {
    /// Match `node` against the collapsible shape.
    pub fn from_node(node: NodeRef<'a>) -> Option<Self> {
        let node = node.as_node()?;
        let rule = node.as_rule()?;
        let children = node.children()?;
        if children.iter().any(|child| child.kind() == NodeKind::Comment) {
            return None;
        }
        let [declaration_node] = children else {
            return None;
        };
        let declaration = declaration_node.as_declaration()?;
        Some(SingleDeclarationRule {
            rule,
            declaration_node,
            declaration,
        })
    }
}

/// Whether `node` is a rule eligible for single-line rendering.
#[inline]
pub fn is_single_declaration_rule(node: NodeRef<'_>) -> bool {
    SingleDeclarationRule::from_node(node).is_some()
}

use crate::ast::{Element, SanitizedGroup};
use crate::error::{DumpError, DumpResult};

/// A labeled node of a rebuilt syntax tree. Children are owned and ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }

    /// Edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk yielding each node with its depth below `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(0, self)],
        }
    }
}

/// Pre-order iterator over a [`Node`] subtree.
pub struct Iter<'n> {
    stack: Vec<(usize, &'n Node)>,
}

impl<'n> Iterator for Iter<'n> {
    type Item = (usize, &'n Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Materialize the tree described by a sanitized dump.
///
/// The first element names the root. After it, a label becomes a child of
/// the node owning the current group, and a nested group becomes the child
/// list of the most recently created node in that group (the owner itself
/// when no label precedes it).
pub fn build_tree(group: &SanitizedGroup<'_>) -> DumpResult<Node> {
    let (first, rest) = group.elements.split_first().ok_or(DumpError::EmptyRoot)?;
    let Element::Label(name) = first else {
        return Err(DumpError::NonLabelRoot);
    };

    let mut root = Node::new(*name);
    attach(&mut root, rest);
    Ok(root)
}

fn attach(parent: &mut Node, elements: &[Element<'_>]) {
    // Index of the last child created by this group, not by a nested one.
    let mut last = None;
    for element in elements {
        match element {
            Element::Label(name) => {
                last = Some(parent.children.len());
                parent.children.push(Node::new(*name));
            }
            Element::Group(group) => {
                let target = match last {
                    Some(index) => &mut parent.children[index],
                    None => &mut *parent,
                };
                attach(target, &group.elements);
            }
        }
    }
}

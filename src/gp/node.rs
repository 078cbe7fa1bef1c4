//! Program-tree nodes with cached structural attributes.
//!
//! Every node caches its `depth` (distance from the tree root), `size`
//! (itself plus all descendants) and `height` (longest downward path in its
//! subtree). The caches are refreshed by explicit full-tree walks after every
//! structural edit; all indexed access assumes the caches are current.

use std::fmt;

/// Largest arity any symbol may declare.
pub const MAX_ARITY: usize = 3;

/// A node vocabulary element: the payload of one tree node.
///
/// Implementations form a closed, statically-dispatched set per problem
/// instance. The arity must be constant for a given symbol value and at most
/// [`MAX_ARITY`].
pub trait Symbol: Clone + fmt::Display {
    /// Number of child subtrees a node with this symbol owns.
    fn arity(&self) -> usize;
}

/// One node of a program tree: a symbol plus exclusively owned children.
///
/// Children are never shared between trees; cloning a node deep-copies the
/// whole subtree.
#[derive(Debug, Clone)]
pub struct Node<S> {
    symbol: S,
    children: Vec<Node<S>>,
    depth: usize,
    size: usize,
    height: usize,
}

impl<S: Symbol> Node<S> {
    /// Create a node with no children yet.
    ///
    /// Non-terminal symbols must receive their children through
    /// [`Node::set_children`] before the tree is used.
    #[must_use]
    pub fn new(symbol: S) -> Self {
        Self {
            symbol,
            children: Vec::new(),
            depth: 0,
            size: 1,
            height: 0,
        }
    }

    /// The symbol carried by this node.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Arity of this node's symbol.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.symbol.arity()
    }

    /// Whether this node is a leaf (arity 0).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.symbol.arity() == 0
    }

    /// Cached distance from the tree root (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Cached node count of the subtree rooted here (at least 1).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cached longest downward path in the subtree rooted here (0 for leaves).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The owned child subtrees.
    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node<S>] {
        &mut self.children
    }

    /// Replace all children at once.
    ///
    /// The direct children's depth caches are set to `depth + 1`; deeper
    /// descendants keep stale depths until the next [`Node::update_depth`]
    /// walk. The number of children must equal the symbol's arity.
    pub fn set_children(&mut self, mut children: Vec<Node<S>>) {
        debug_assert_eq!(children.len(), self.symbol.arity());
        for child in &mut children {
            child.depth = self.depth + 1;
        }
        self.children = children;
    }

    /// Replace the child in the given slot, reparenting the new subtree.
    ///
    /// Only the spliced root's depth cache is refreshed here; callers run the
    /// full recompute walks afterwards.
    pub fn replace_child(&mut self, slot: usize, mut child: Node<S>) {
        debug_assert!(slot < self.children.len());
        child.depth = self.depth + 1;
        self.children[slot] = child;
    }

    /// Recompute the `size` cache for the whole subtree. O(size).
    pub fn update_size(&mut self) -> usize {
        let mut size = 1;
        for child in &mut self.children {
            size += child.update_size();
        }
        self.size = size;
        size
    }

    /// Recompute the `height` cache for the whole subtree. O(size).
    pub fn update_height(&mut self) -> usize {
        let mut height = 0;
        for child in &mut self.children {
            height = height.max(child.update_height() + 1);
        }
        self.height = height;
        height
    }

    /// Recompute the `depth` cache for the whole subtree, rooting it at
    /// `depth`. O(size).
    pub fn update_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.update_depth(depth + 1);
        }
    }

    /// All nodes of the subtree in pre-order, root first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Node<S>> {
        let mut nodes = Vec::with_capacity(self.size);
        self.fill(&mut nodes);
        nodes
    }

    fn fill<'a>(&'a self, nodes: &mut Vec<&'a Node<S>>) {
        nodes.push(self);
        for child in &self.children {
            child.fill(nodes);
        }
    }

    /// The node at the given pre-order index, navigated through the cached
    /// subtree sizes (index 0 is this node).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node<S>> {
        if index == 0 {
            return Some(self);
        }
        let mut index = index - 1;
        for child in &self.children {
            if index < child.size {
                return child.get(index);
            }
            index -= child.size;
        }
        None
    }

    /// Mutable access to the node at the given pre-order index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node<S>> {
        if index == 0 {
            return Some(self);
        }
        let mut index = index - 1;
        for child in &mut self.children {
            if index < child.size {
                return child.get_mut(index);
            }
            index -= child.size;
        }
        None
    }
}

impl<S: Symbol> fmt::Display for Node<S> {
    /// Prefix rendering: `symbol(child, child, ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if !self.children.is_empty() {
            write!(f, "(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{child}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

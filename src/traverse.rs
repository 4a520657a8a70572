//! Depth-first walks over the command tree.
//!
//! Walks keep their own stack of pending officers instead of recursing, so a tree that
//! degenerated into a long chain (officers assigned in strictly increasing or decreasing id
//! order) is walked just as safely as a bushy one.

use std::iter::FusedIterator;

use crate::tree::{CommandTree, NodeId, NodeRef};

/// In-order walk over a subtree, yielding officers by ascending id. Reversed, it yields them by
/// descending id (right subtree, then the officer, then the left subtree).
pub struct Iter<'a, K> {
    tree: Option<&'a CommandTree<K>>,
    stack: Vec<NodeId>,
    descending: bool,
}

impl<'a, K> Iter<'a, K> {
    fn new(start: Option<NodeRef<'a, K>>, descending: bool) -> Self {
        let mut iter = Self {
            tree: start.map(|node| node.tree()),
            stack: Vec::new(),
            descending,
        };
        iter.push_spine(start.map(|node| node.index()));
        iter
    }

    fn empty() -> Self {
        Self::new(None, false)
    }

    /// Pushes `next` and every officer down its leading edge (leftmost chain ascending,
    /// rightmost chain descending).
    fn push_spine(&mut self, mut next: Option<NodeId>) {
        let Some(tree) = self.tree else {
            return;
        };
        while let Some(at) = next {
            self.stack.push(at);
            let node = tree.node(at);
            next = if self.descending {
                node.right
            } else {
                node.left
            };
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        let at = self.stack.pop()?;
        let node = tree.node(at);
        self.push_spine(if self.descending {
            node.left
        } else {
            node.right
        });

        Some(NodeRef::new(tree, at))
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    /// Officers in this subtree by ascending id.
    pub fn iter(&self) -> Iter<'a, K> {
        Iter::new(Some(*self), false)
    }

    /// Names of the officers in this subtree with no direct reports, in the order an in-order
    /// walk meets them. Duplicate names are kept.
    pub fn leaves_with_no_reports(&self) -> Vec<&'a str> {
        self.iter()
            .filter(NodeRef::is_leaf)
            .map(|node| node.name())
            .collect()
    }

    /// Names of every officer in this subtree by descending id. Among equal ids the officer
    /// assigned last comes first.
    pub fn list_by_experience(&self) -> Vec<&'a str> {
        Iter::new(Some(*self), true)
            .map(|node| node.name())
            .collect()
    }
}

impl<K> CommandTree<K> {
    /// Every officer by ascending id.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let mut tree = CommandTree::new();
    /// for (id, name) in [(5, "Picard"), (3, "Riker"), (6, "Data")] {
    ///     tree.insert(id, name).unwrap();
    /// }
    ///
    /// let ids: Vec<_> = tree.iter().map(|officer| *officer.id()).collect();
    /// assert_eq!(ids, vec![3, 5, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        self.root().map_or_else(Iter::empty, |root| root.iter())
    }

    /// Names of the officers with no direct reports, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let mut tree = CommandTree::new();
    /// for (id, name) in [(5, "A"), (3, "B"), (8, "C"), (1, "D"), (8, "E")] {
    ///     tree.insert(id, name).unwrap();
    /// }
    ///
    /// assert_eq!(tree.leaves_with_no_reports(), vec!["D", "E"]);
    /// ```
    pub fn leaves_with_no_reports(&self) -> Vec<&str> {
        self.root()
            .map(|root| root.leaves_with_no_reports())
            .unwrap_or_default()
    }

    /// Names of every officer, most experienced (largest id) first.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let mut tree = CommandTree::new();
    /// for (id, name) in [(5, "A"), (3, "B"), (8, "C"), (1, "D"), (8, "E")] {
    ///     tree.insert(id, name).unwrap();
    /// }
    ///
    /// assert_eq!(tree.list_by_experience(), vec!["E", "C", "A", "B", "D"]);
    /// ```
    pub fn list_by_experience(&self) -> Vec<&str> {
        self.root()
            .map(|root| root.list_by_experience())
            .unwrap_or_default()
    }
}

impl<'a, K> IntoIterator for &'a CommandTree<K> {
    type Item = NodeRef<'a, K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

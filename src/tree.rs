//! The command tree itself: an unbalanced BST of officers keyed by experience.
//!
//! Every officer is stored in an arena owned by the [`CommandTree`]. Links between officers
//! (`left`, `right` and the upward `parent` link) are indices into that arena, so a reporting
//! officer never owns the officer they report to.
//!
//! # Examples
//!
//! ```
//! use command_tree::CommandTree;
//!
//! let mut tree = CommandTree::new();
//!
//! // Nobody aboard yet.
//! assert!(tree.root().is_none());
//!
//! // The first officer assigned becomes the captain.
//! tree.insert(5, "Captain Picard").unwrap();
//! tree.insert(3, "Commander Riker").unwrap();
//!
//! let captain = tree.root().unwrap();
//! assert_eq!(captain.name(), "Captain Picard");
//!
//! let riker = captain.left().unwrap();
//! assert_eq!(riker.name(), "Commander Riker");
//! assert_eq!(riker.parent(), Some(captain));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use log::debug;

use crate::error::CommandTreeError;

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// The captain always lives in the first slot.
    pub(crate) const ROOT: Self = Self(0);
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) id: K,
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    fn new(id: K, name: String, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree of officers. Officers with a smaller id report on the left, officers
/// with an equal or larger id report on the right. The tree is never rebalanced and nothing is
/// ever removed from it.
#[derive(Clone)]
pub struct CommandTree<K> {
    // Empty until the first assignment, which fills slot `NodeId::ROOT` in place.
    nodes: Vec<Node<K>>,
}

impl<K> Default for CommandTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for CommandTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("root", &self.root())
            .field("len", &self.len())
            .finish()
    }
}

impl<K> CommandTree<K> {
    /// Generates a new, empty `CommandTree`. This is the placeholder captain's seat: the first
    /// [`insert`][Self::insert] fills it in place.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Generates a tree whose captain is already assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let tree = CommandTree::with_captain(5, "Captain Picard").unwrap();
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root().map(|captain| *captain.id()), Some(5));
    /// ```
    pub fn with_captain(id: K, name: impl Into<String>) -> Result<Self, CommandTreeError>
    where
        K: Ord,
    {
        let mut tree = Self::new();
        tree.insert(id, name)?;
        Ok(tree)
    }

    /// Assigns a new officer. The officer descends from the captain, going left past every
    /// officer with a larger id and right past every officer with an equal or smaller id, and
    /// reports to the first officer with a free slot on that side.
    ///
    /// Equal ids are allowed. A later officer with an existing id always lands to the right of
    /// the earlier ones.
    ///
    /// Any id can be the captain's, zero included. Once the seat is filled it is never
    /// overwritten, so a first officer with id 0 stays captain.
    ///
    /// # Errors
    ///
    /// [`CommandTreeError::InvalidArgument`] if `name` is empty. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let mut tree = CommandTree::new();
    /// tree.insert(8, "Lt. Cmdr. Crusher").unwrap();
    /// tree.insert(8, "Lieutenant Selar").unwrap();
    ///
    /// // Ties go right.
    /// let selar = tree.root().and_then(|captain| captain.right()).unwrap();
    /// assert_eq!(selar.name(), "Lieutenant Selar");
    ///
    /// assert!(tree.insert(9, "").is_err());
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, id: K, name: impl Into<String>) -> Result<(), CommandTreeError>
    where
        K: Ord,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(CommandTreeError::InvalidArgument(
                "officer name must not be empty",
            ));
        }

        if self.nodes.is_empty() {
            debug!("assigned {name:?} as captain");
            self.nodes.push(Node::new(id, name, None));
            return Ok(());
        }

        let new_node = NodeId(self.nodes.len());
        let mut current = NodeId::ROOT;
        loop {
            let node = &mut self.nodes[current.0];
            let slot = if id < node.id {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_node);
                    break;
                }
            }
        }

        debug!(
            "assigned {name:?} to report to {:?}",
            self.nodes[current.0].name
        );
        self.nodes.push(Node::new(id, name, Some(current)));
        Ok(())
    }

    /// The captain, or `None` if nobody has been assigned yet.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        (!self.nodes.is_empty()).then(|| NodeRef::new(self, NodeId::ROOT))
    }

    /// Potentially finds the officer with the given id. When several officers share the id, the
    /// one assigned first is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::CommandTree;
    ///
    /// let mut tree = CommandTree::new();
    /// tree.insert(5, "Captain Picard").unwrap();
    /// tree.insert(6, "Commander Data").unwrap();
    ///
    /// assert_eq!(tree.find(&6).map(|officer| officer.name()), Some("Commander Data"));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, id: &K) -> Option<NodeRef<'_, K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match id.cmp(node.id()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// How many officers are aboard.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the captain's seat is still empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How many levels the tree has. An empty tree has height 0 and a lone captain height 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }

    pub(crate) fn node(&self, at: NodeId) -> &Node<K> {
        &self.nodes[at.0]
    }
}

/// A borrowed handle on one officer. Since every officer heads the subtree of officers that
/// report to them, a `NodeRef` is also a handle on that subtree and supports the same
/// traversals as the whole [`CommandTree`].
pub struct NodeRef<'a, K> {
    tree: &'a CommandTree<K>,
    at: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

/// Two handles are equal when they point at the same officer of the same tree.
impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.at == other.at
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", self.id())
            .field("name", &self.name())
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a CommandTree<K>, at: NodeId) -> Self {
        Self { tree, at }
    }

    pub(crate) fn tree(&self) -> &'a CommandTree<K> {
        self.tree
    }

    pub(crate) fn index(&self) -> NodeId {
        self.at
    }

    fn node(&self) -> &'a Node<K> {
        self.tree.node(self.at)
    }

    fn link(&self, at: Option<NodeId>) -> Option<Self> {
        at.map(|at| Self::new(self.tree, at))
    }

    /// This officer's id.
    pub fn id(&self) -> &'a K {
        &self.node().id
    }

    /// This officer's name.
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// The officer this one reports to. Only the captain has none.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// The direct report with a smaller id.
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// The direct report with an equal or larger id.
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().right)
    }

    /// Direct reports, left before right.
    pub fn reports(&self) -> impl Iterator<Item = NodeRef<'a, K>> {
        [self.left(), self.right()].into_iter().flatten()
    }

    /// Whether nobody reports to this officer.
    pub fn is_leaf(&self) -> bool {
        self.node().left.is_none() && self.node().right.is_none()
    }

    /// Whether this officer is the captain of the whole tree.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// How many levels this subtree has. A leaf has height 1.
    pub fn height(&self) -> usize {
        let mut stack = vec![(self.at, 1)];
        let mut height = 0;
        while let Some((at, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.tree.node(at);
            stack.extend(
                node.left
                    .into_iter()
                    .chain(node.right)
                    .map(|child| (child, depth + 1)),
            );
        }

        height
    }
}

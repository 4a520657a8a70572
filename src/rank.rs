//! Breadth-first rank assignment.
//!
//! Ranks are numbered from 1 (the captain) downwards. Officers are visited level by level via a
//! [`Queue`], left report before right report, and grouped into rank buckets.

use std::collections::BTreeMap;

use log::trace;

use crate::queue::Queue;
use crate::tree::{CommandTree, NodeRef};

/// Officers grouped by rank. Keys run from 1 up to the number of ranks with no gaps and every
/// bucket holds at least one name.
pub type Ranks<'a> = BTreeMap<usize, Vec<&'a str>>;

/// How an officer's rank is decided while walking the tree breadth first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankStrategy {
    /// An officer opens a new rank when the name of the officer they report to is already in the
    /// current rank's bucket, and joins the current rank otherwise.
    ///
    /// This matches tree depth as long as names are unique. When two officers share a name an
    /// officer can be promoted or demoted by one rank.
    #[default]
    ParentName,
    /// An officer's rank is their depth below the captain plus one. Names play no part.
    Depth,
}

impl<'a, K> NodeRef<'a, K> {
    /// Groups the officers of this subtree by rank using [`RankStrategy::ParentName`]. This
    /// officer is rank 1.
    pub fn list_by_rank(&self) -> Ranks<'a> {
        self.list_by_rank_with(RankStrategy::default())
    }

    /// Groups the officers of this subtree by rank using `strategy`. This officer is rank 1.
    pub fn list_by_rank_with(&self, strategy: RankStrategy) -> Ranks<'a> {
        match strategy {
            RankStrategy::ParentName => self.ranks_by_parent_name(),
            RankStrategy::Depth => self.ranks_by_depth(),
        }
    }

    fn ranks_by_parent_name(&self) -> Ranks<'a> {
        let mut ranks = Ranks::new();
        let mut rank = 1;
        let mut queue = Queue::new();
        queue.enqueue(*self);

        while let Some(node) = queue.dequeue() {
            let bucket = ranks.entry(rank).or_insert_with(Vec::new);
            let opens_rank = node != *self
                && node
                    .parent()
                    .is_some_and(|parent| bucket.contains(&parent.name()));

            if opens_rank {
                rank += 1;
                trace!("{:?} opens rank {rank}", node.name());
                ranks.insert(rank, vec![node.name()]);
            } else {
                bucket.push(node.name());
            }

            for report in node.reports() {
                queue.enqueue(report);
            }
        }

        ranks
    }

    fn ranks_by_depth(&self) -> Ranks<'a> {
        let mut ranks = Ranks::new();
        let mut queue = Queue::new();
        queue.enqueue((*self, 1));

        while let Some((node, rank)) = queue.dequeue() {
            ranks.entry(rank).or_insert_with(Vec::new).push(node.name());
            for report in node.reports() {
                queue.enqueue((report, rank + 1));
            }
        }

        ranks
    }
}

impl<K> CommandTree<K> {
    /// Groups every officer by rank using [`RankStrategy::ParentName`]. The captain is rank 1.
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
    /// let ranks = tree.list_by_rank();
    /// assert_eq!(ranks[&1], vec!["A"]);
    /// assert_eq!(ranks[&2], vec!["B", "C"]);
    /// assert_eq!(ranks[&3], vec!["D", "E"]);
    /// ```
    pub fn list_by_rank(&self) -> Ranks<'_> {
        self.list_by_rank_with(RankStrategy::default())
    }

    /// Groups every officer by rank using `strategy`. An empty tree has no ranks.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree::{CommandTree, RankStrategy};
    ///
    /// let mut tree = CommandTree::new();
    /// for (id, name) in [(2, "Ensign"), (1, "Ensign"), (3, "Lieutenant")] {
    ///     tree.insert(id, name).unwrap();
    /// }
    ///
    /// let ranks = tree.list_by_rank_with(RankStrategy::Depth);
    /// assert_eq!(ranks[&1], vec!["Ensign"]);
    /// assert_eq!(ranks[&2], vec!["Ensign", "Lieutenant"]);
    /// ```
    pub fn list_by_rank_with(&self, strategy: RankStrategy) -> Ranks<'_> {
        self.root()
            .map(|root| root.list_by_rank_with(strategy))
            .unwrap_or_default()
    }
}

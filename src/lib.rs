//! This crate models a starship's chain of command as a Binary Search Tree (BST).
//!
//! ## Command Tree
//!
//! Every officer has an id (their experience) and a name. The first officer assigned becomes the
//! captain at the root of the tree, and each later officer reports to an existing one:
//!
//! 1. An officer with a smaller id than their superior reports on the superior's left.
//! 2. An officer with an equal or larger id reports on the superior's right.
//!
//! > Officers with nobody reporting to them are the "leaf nodes" of the tree.
//!
//! The tree is deliberately left unbalanced, so the shape of the chain of command follows the
//! order officers were assigned in. From that shape the crate can list the officers with no
//! direct reports, list everyone by experience, and group officers into ranks by how far below
//! the captain they sit.
//!
//! # Examples
//!
//! ```
//! use command_tree::CommandTree;
//!
//! let mut enterprise = CommandTree::new();
//! for (id, name) in [
//!     (5, "Captain Picard"),
//!     (3, "Commander Riker"),
//!     (6, "Commander Data"),
//!     (2, "Lt. Cmdr. Worf"),
//!     (4, "Lt. Cmdr. LaForge"),
//!     (8, "Lt. Cmdr. Crusher"),
//!     (1, "Lieutenant Security-Officer"),
//!     (7, "Lieutenant Selar"),
//! ] {
//!     enterprise.insert(id, name).unwrap();
//! }
//!
//! assert_eq!(
//!     enterprise.leaves_with_no_reports(),
//!     vec!["Lieutenant Security-Officer", "Lt. Cmdr. LaForge", "Lieutenant Selar"]
//! );
//! assert_eq!(enterprise.list_by_experience()[0], "Lt. Cmdr. Crusher");
//! assert_eq!(enterprise.list_by_rank()[&2], vec!["Commander Riker", "Commander Data"]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod queue;
pub mod rank;
pub mod traverse;
pub mod tree;

pub use error::CommandTreeError;
pub use queue::Queue;
pub use rank::{RankStrategy, Ranks};
pub use traverse::Iter;
pub use tree::{CommandTree, NodeRef};

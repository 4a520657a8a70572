//! Errors surfaced while building a [`CommandTree`][crate::CommandTree].

use thiserror::Error as ThisError;

/// The ways an assignment into the tree can be refused.
///
/// Well-formed input never produces one of these.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CommandTreeError {
    /// An argument broke a precondition of the operation, e.g. an empty officer name.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

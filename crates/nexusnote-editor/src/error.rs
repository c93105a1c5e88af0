//! Error types for document and session operations.

use nexusnote_types::{BlockId, BlockKind};
use thiserror::Error;

/// Errors from [`BlockStore`](crate::BlockStore) operations.
///
/// None of these are fatal. The store never mutates when it returns one, and
/// [`EditorSession`](crate::EditorSession) absorbs all of them: not-found and
/// unsupported operations become silent no-ops, and
/// [`CannotDeleteLastBlock`](EditorError::CannotDeleteLastBlock) becomes an
/// error notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Block not found in document.
    #[error("block not found: {0:?}")]
    BlockNotFound(BlockId),

    /// Deleting would leave the document empty.
    #[error("cannot delete the last block")]
    CannotDeleteLastBlock,

    /// Operation not supported on this block kind.
    ///
    /// For example, toggling `checked` is only supported on to-do blocks.
    #[error("operation not supported on {kind} block {id:?}")]
    UnsupportedOperation { id: BlockId, kind: BlockKind },

    /// Heading level outside 1..=3.
    #[error("heading level {0} out of range")]
    InvalidHeadingLevel(u8),

    /// Duplicate block ID.
    #[error("block already exists: {0:?}")]
    DuplicateBlock(BlockId),

    /// A document must hold at least one block.
    #[error("document has no blocks")]
    EmptyDocument,
}

impl EditorError {
    /// Errors that arise only from stale ids or internal misuse.
    ///
    /// These are swallowed without telling the user.
    pub fn is_silent(&self) -> bool {
        !matches!(self, EditorError::CannotDeleteLastBlock)
    }
}

//! Block store: the ordered block sequence of one document.
//!
//! The store is the only owner of the document. Everything else (selection,
//! menu, drag) refers to blocks by [`BlockId`] and resolves through here, so
//! nothing dangles when a block is deleted or moved.
//!
//! Every mutation is a whole-value transition: look up, compute the next
//! block or sequence, replace. On error nothing changes and `version` is not
//! bumped.

use std::collections::HashSet;

use nexusnote_types::{Block, BlockBody, BlockId, BlockKind, HeadingLevel};

use crate::{EditorError, Result};

/// Ordered, non-empty sequence of blocks with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStore {
    /// Blocks in document order.
    blocks: Vec<Block>,

    /// Bumped on every successful mutation.
    version: u64,
}

impl BlockStore {
    /// Create a store from an initial document.
    ///
    /// Rejects an empty document and duplicate ids.
    pub fn new(blocks: Vec<Block>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(EditorError::EmptyDocument);
        }
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if !seen.insert(&block.id) {
                return Err(EditorError::DuplicateBlock(block.id.clone()));
            }
        }
        Ok(Self { blocks, version: 0 })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block ids in document order.
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn kind_of(&self, id: &BlockId) -> Option<BlockKind> {
        self.get(id).map(Block::kind)
    }

    /// Index of a block in document order.
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    pub fn first_id(&self) -> Option<&BlockId> {
        self.blocks.first().map(|b| &b.id)
    }

    pub fn last_id(&self) -> Option<&BlockId> {
        self.blocks.last().map(|b| &b.id)
    }

    /// Concatenated content, one block per paragraph.
    pub fn full_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn index_of(&self, id: &BlockId) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| EditorError::BlockNotFound(id.clone()))
    }

    fn fresh_id(&self) -> BlockId {
        let mut id = BlockId::generate();
        while self.contains(&id) {
            id = BlockId::generate();
        }
        id
    }

    // =========================================================================
    // Block Operations
    // =========================================================================

    /// Insert a new, empty block of `kind` immediately after `after`.
    ///
    /// Registry defaults are applied (headings start at level 2, to-dos
    /// unchecked). On an empty store the block goes at the start. Returns a
    /// copy of the new block so the caller can activate it.
    pub fn insert_after(&mut self, after: &BlockId, kind: BlockKind) -> Result<Block> {
        let index = if self.blocks.is_empty() {
            0
        } else {
            self.index_of(after)? + 1
        };
        let block = Block::empty(self.fresh_id(), kind);
        self.blocks.insert(index, block.clone());
        self.version += 1;
        tracing::debug!(id = %block.id, %kind, index, "inserted block");
        Ok(block)
    }

    /// Append a new, empty block of `kind` at the end.
    pub fn append(&mut self, kind: BlockKind) -> Block {
        let block = Block::empty(self.fresh_id(), kind);
        self.blocks.push(block.clone());
        self.version += 1;
        tracing::debug!(id = %block.id, %kind, "appended block");
        block
    }

    /// Replace a block's content, keeping every other attribute.
    pub fn update_content(&mut self, id: &BlockId, text: impl Into<String>) -> Result<()> {
        let index = self.index_of(id)?;
        self.blocks[index] = self.blocks[index].with_content(text);
        self.version += 1;
        Ok(())
    }

    /// Flip `checked` on a to-do block. Returns the new state.
    pub fn toggle_checked(&mut self, id: &BlockId) -> Result<bool> {
        let index = self.index_of(id)?;
        let block = &self.blocks[index];
        let BlockBody::Todo { checked } = block.body else {
            return Err(EditorError::UnsupportedOperation {
                id: id.clone(),
                kind: block.kind(),
            });
        };
        self.blocks[index] = block.with_body(BlockBody::Todo { checked: !checked });
        self.version += 1;
        tracing::debug!(%id, checked = !checked, "toggled todo");
        Ok(!checked)
    }

    /// Set the level of a heading block.
    pub fn set_heading_level(&mut self, id: &BlockId, level: u8) -> Result<()> {
        let index = self.index_of(id)?;
        let block = &self.blocks[index];
        if block.kind() != BlockKind::Heading {
            return Err(EditorError::UnsupportedOperation {
                id: id.clone(),
                kind: block.kind(),
            });
        }
        let level = HeadingLevel::new(level).map_err(|_| EditorError::InvalidHeadingLevel(level))?;
        self.blocks[index] = block.with_body(BlockBody::Heading { level });
        self.version += 1;
        Ok(())
    }

    /// Remove a block. Refused when it is the only block left.
    pub fn delete(&mut self, id: &BlockId) -> Result<Block> {
        let index = self.index_of(id)?;
        if self.blocks.len() <= 1 {
            return Err(EditorError::CannotDeleteLastBlock);
        }
        let removed = self.blocks.remove(index);
        self.version += 1;
        tracing::debug!(%id, kind = %removed.kind(), "deleted block");
        Ok(removed)
    }

    /// Move `from` to the slot `to` occupied before the move.
    ///
    /// Remove-then-insert at `to`'s original index: moving up lands `from`
    /// immediately before `to`, moving down lands it immediately after.
    /// Returns `false` (nothing moved) when `from == to`.
    pub fn move_block(&mut self, from: &BlockId, to: &BlockId) -> Result<bool> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        if from_index == to_index {
            return Ok(false);
        }
        let block = self.blocks.remove(from_index);
        self.blocks.insert(to_index, block);
        self.version += 1;
        tracing::debug!(%from, %to, from_index, to_index, "moved block");
        Ok(true)
    }
}

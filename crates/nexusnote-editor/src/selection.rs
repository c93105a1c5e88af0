//! Selection: which block is active, and how it was activated.
//!
//! At most one block is active. Selection holds only an id; the block's kind
//! is looked up in the store when deciding toolbar visibility, so the toolbar
//! rule is derived, never stored.

use nexusnote_types::BlockId;
use serde::Serialize;

use crate::BlockStore;

/// Selection state machine.
///
/// ```text
///            click(a)                  click(b)
///   None ───────────────▶ ActiveWithToolbar(a) ───────▶ ActiveWithToolbar(b)
///    │  focus(a)                        │
///    └──────────▶ Active(a) ◀───────────┘ focus(c) → Active(c)
///
///   deactivate / delete of the active block → None
/// ```
///
/// `Active` is programmatic activation (new block, menu anchor);
/// `ActiveWithToolbar` is activation by the user clicking the block. Both
/// show the toolbar on text and heading blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Active(BlockId),
    ActiveWithToolbar(BlockId),
}

impl Selection {
    pub fn active_id(&self) -> Option<&BlockId> {
        match self {
            Selection::None => None,
            Selection::Active(id) | Selection::ActiveWithToolbar(id) => Some(id),
        }
    }

    pub fn is_active(&self, id: &BlockId) -> bool {
        self.active_id() == Some(id)
    }
}

/// Owns the selection and applies its transitions.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_id(&self) -> Option<&BlockId> {
        self.selection.active_id()
    }

    /// User activation (block click).
    ///
    /// Re-activating the already active block is a no-op, whatever its
    /// current state. Returns whether the selection changed.
    pub fn activate(&mut self, id: &BlockId) -> bool {
        if self.selection.is_active(id) {
            return false;
        }
        tracing::trace!(%id, "activate");
        self.selection = Selection::ActiveWithToolbar(id.clone());
        true
    }

    /// Programmatic activation (freshly inserted block, menu anchor).
    ///
    /// Replaces any other selection outright; no-op on the active block.
    pub fn focus(&mut self, id: &BlockId) -> bool {
        if self.selection.is_active(id) {
            return false;
        }
        tracing::trace!(%id, "focus");
        self.selection = Selection::Active(id.clone());
        true
    }

    pub fn deactivate(&mut self) -> bool {
        let changed = self.selection != Selection::None;
        self.selection = Selection::None;
        changed
    }

    /// Drop the selection if it points at `id` (block deleted).
    pub fn forget(&mut self, id: &BlockId) -> bool {
        if self.selection.is_active(id) {
            self.selection = Selection::None;
            true
        } else {
            false
        }
    }

    /// Whether the formatting toolbar should render.
    ///
    /// Any active block whose kind has a toolbar (text, heading) shows it,
    /// however it was activated. A stale id renders nothing.
    pub fn toolbar_visible(&self, store: &BlockStore) -> bool {
        self.active_id()
            .and_then(|id| store.kind_of(id))
            .is_some_and(|kind| kind.has_toolbar())
    }
}

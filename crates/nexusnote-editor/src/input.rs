//! Inbound events from the UI layer.
//!
//! The view owns rendering, hit-testing, and text entry. It reports discrete
//! events here; the session never reads raw pointer or keyboard state.

use nexusnote_types::{BlockId, BlockKind};

use crate::menu::{Point, Rect};

/// Where a pointer-down landed, as hit-tested by the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside a rendered block.
    Block(BlockId),
    /// Inside the open type-picker menu.
    Menu,
    /// Anywhere else.
    Outside,
}

/// A discrete user interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Click on a block body: activate it with the toolbar.
    BlockClick(BlockId),
    /// "+" on a block: open the type picker below `anchor`, targeting `id`.
    ContextMenuRequest { id: BlockId, anchor: Rect },
    /// "Add a block" below the document. Opens under `anchor` targeting the
    /// last block, or at `pointer` when there is no block to anchor to.
    AddBlockRequest { anchor: Rect, pointer: Point },
    /// A type was chosen in the open menu.
    MenuSelect(BlockKind),
    /// The text input committed new content.
    ContentEdited { id: BlockId, text: String },
    TodoToggle(BlockId),
    SetHeadingLevel { id: BlockId, level: u8 },
    DeleteRequest(BlockId),
    DragStart(BlockId),
    DragOver(BlockId),
    DragEnd,
    /// Drag abandoned (escape, pointer left the document).
    DragCancel,
    /// Pointer pressed somewhere; used for click-outside handling.
    PointerDown(PointerTarget),
    /// Enter in a block. With the soft-newline modifier held the key is
    /// left to the text input as an ordinary line break.
    KeyEnter { id: BlockId, soft_newline: bool },
}

/// What the session did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    /// State changed (or a drag gesture advanced).
    Consumed,
    /// Not intercepted; the view should apply its default behaviour.
    PassThrough,
    /// Refused with a user-visible notification; state unchanged.
    Refused,
    /// Nothing to do (stale id, unsupported operation, no-op transition).
    Ignored,
}

impl Handled {
    pub fn from_changed(changed: bool) -> Self {
        if changed { Handled::Consumed } else { Handled::Ignored }
    }
}

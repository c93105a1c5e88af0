//! Outbound state for the render layer.

use nexusnote_types::{Block, BlockId};
use serde::Serialize;

use crate::drag::DragState;
use crate::menu::MenuState;
use crate::selection::Selection;

/// Post-commit continuations, drained by the view after each event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// A block was committed to the document and can now take text focus.
    BlockInserted { id: BlockId },
}

/// One block plus its per-block render flags.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockView {
    #[serde(flatten)]
    pub block: Block,
    pub placeholder: &'static str,
    pub active: bool,
    /// Current drop target (draws the drop indicator).
    pub drag_over: bool,
    /// Block being dragged (rendered faded).
    pub dragging: bool,
}

/// Everything the view needs to render one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditorSnapshot {
    /// Document version, for change detection.
    pub version: u64,
    pub blocks: Vec<BlockView>,
    pub selection: Selection,
    pub toolbar_visible: bool,
    pub menu: MenuState,
    pub drag: DragState,
}

impl EditorSnapshot {
    pub fn ids(&self) -> Vec<&BlockId> {
        self.blocks.iter().map(|v| &v.block.id).collect()
    }

    pub fn block(&self, id: &BlockId) -> Option<&BlockView> {
        self.blocks.iter().find(|v| &v.block.id == id)
    }
}

//! Drag-and-drop reorder protocol.
//!
//! Driven by four signals from the pointer-drag surface: start, over, end,
//! and cancel. The controller only records ids; on a completed drop it hands
//! back a [`DropIntent`] for the session to apply to the store. There is no
//! timer-based expiry, so the host must send cancel when a drag is abandoned.

use nexusnote_types::BlockId;
use serde::Serialize;

/// Drag state, exposed to the view for the drop indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DragState {
    pub dragged: Option<BlockId>,
    pub drag_over: Option<BlockId>,
}

/// A completed drop: move `dragged` into `target`'s slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropIntent {
    pub dragged: BlockId,
    pub target: BlockId,
}

#[derive(Clone, Debug, Default)]
pub struct DragReorderController {
    state: DragState,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragged.is_some()
    }

    /// Begin a drag. Any stale hover target from an abandoned drag is dropped.
    pub fn drag_start(&mut self, id: &BlockId) {
        tracing::trace!(%id, "drag start");
        self.state = DragState {
            dragged: Some(id.clone()),
            drag_over: None,
        };
    }

    /// Pointer is over `id`. Hovering the dragged block itself is ignored,
    /// so a block can never be dropped onto itself.
    ///
    /// Returns whether the drop target changed.
    pub fn drag_over(&mut self, id: &BlockId) -> bool {
        let Some(dragged) = &self.state.dragged else {
            return false;
        };
        if dragged == id || self.state.drag_over.as_ref() == Some(id) {
            return false;
        }
        self.state.drag_over = Some(id.clone());
        true
    }

    /// Finish the drag. State is always reset; a drop intent is returned only
    /// when both ends are set and distinct.
    pub fn drag_end(&mut self) -> Option<DropIntent> {
        let DragState { dragged, drag_over } = std::mem::take(&mut self.state);
        match (dragged, drag_over) {
            (Some(dragged), Some(target)) if dragged != target => {
                Some(DropIntent { dragged, target })
            }
            _ => None,
        }
    }

    /// Abort path (escape key, pointer left the document).
    pub fn reset(&mut self) {
        self.state = DragState::default();
    }

    /// Drop references to a deleted block. A drag involving it is abandoned.
    pub fn forget(&mut self, id: &BlockId) {
        let involved = self.state.dragged.as_ref() == Some(id)
            || self.state.drag_over.as_ref() == Some(id);
        if involved {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> BlockId {
        BlockId::from(s)
    }

    #[test]
    fn test_full_drag_yields_intent() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("3"));
        assert!(drag.drag_over(&id("4")));
        assert!(drag.drag_over(&id("5")));

        assert_eq!(
            drag.drag_end(),
            Some(DropIntent { dragged: id("3"), target: id("5") })
        );
        assert_eq!(drag.state(), &DragState::default());
    }

    #[test]
    fn test_drag_over_self_never_sets_target() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("2"));
        assert!(!drag.drag_over(&id("2")));
        assert_eq!(drag.state().drag_over, None);
        assert_eq!(drag.drag_end(), None);
    }

    #[test]
    fn test_hover_back_onto_self_keeps_previous_target() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("2"));
        drag.drag_over(&id("4"));
        drag.drag_over(&id("2"));
        assert_eq!(drag.state().drag_over, Some(id("4")));
    }

    #[test]
    fn test_drag_end_without_target_resets() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("1"));
        assert_eq!(drag.drag_end(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_over_without_start_is_ignored() {
        let mut drag = DragReorderController::new();
        assert!(!drag.drag_over(&id("1")));
        assert_eq!(drag.drag_end(), None);
    }

    #[test]
    fn test_new_drag_start_clears_stale_target() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("1"));
        drag.drag_over(&id("3"));
        // abandoned without drag_end
        drag.drag_start(&id("2"));
        assert_eq!(drag.state().drag_over, None);
        assert_eq!(drag.state().dragged, Some(id("2")));
    }

    #[test]
    fn test_reset_and_forget() {
        let mut drag = DragReorderController::new();
        drag.drag_start(&id("1"));
        drag.drag_over(&id("3"));
        drag.forget(&id("2"));
        assert!(drag.is_dragging());
        drag.forget(&id("3"));
        assert_eq!(drag.state(), &DragState::default());

        drag.drag_start(&id("1"));
        drag.reset();
        assert!(!drag.is_dragging());
    }
}

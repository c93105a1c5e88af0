//! Block type-picker menu.
//!
//! A single popup with a screen position and an insertion target. A `None`
//! target means "append at the end of the document". Choosing a type closes
//! the menu and hands the target back to the session, which performs the
//! insert and activates the new block.

use nexusnote_types::{BlockId, BlockKind};
use serde::{Deserialize, Serialize};

/// Screen position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen-space bounding rectangle of the element that opened the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Menu state, exposed to the view.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MenuState {
    pub visible: bool,
    pub position: Point,
    pub target: Option<BlockId>,
}

/// Where a chosen block type should be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertRequest {
    /// Block to insert after; `None` appends.
    pub after: Option<BlockId>,
    pub kind: BlockKind,
}

#[derive(Clone, Debug)]
pub struct MenuController {
    state: MenuState,
    /// Gap between the anchor's bottom edge and the menu's top edge.
    offset: f32,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl MenuController {
    pub fn new(offset: f32) -> Self {
        Self {
            state: MenuState::default(),
            offset,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.visible
    }

    pub fn open(&mut self, position: Point, target: Option<BlockId>) {
        tracing::trace!(?target, x = position.x, y = position.y, "menu open");
        self.state = MenuState {
            visible: true,
            position,
            target,
        };
    }

    /// Open just below an anchor element, left-aligned with it.
    pub fn open_at_anchor(&mut self, anchor: Rect, target: Option<BlockId>) {
        self.open(Point::new(anchor.left, anchor.bottom + self.offset), target);
    }

    /// Close the menu. Position and target are kept for the closing
    /// animation but are meaningless until the next open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.visible;
        self.state.visible = false;
        was_open
    }

    /// Pick a type. Closes the menu and returns the insertion request, or
    /// `None` when the menu was not open.
    pub fn select(&mut self, kind: BlockKind) -> Option<InsertRequest> {
        if !self.close() {
            return None;
        }
        Some(InsertRequest {
            after: self.state.target.clone(),
            kind,
        })
    }

    /// A deleted target falls back to "append at end".
    pub fn forget(&mut self, id: &BlockId) {
        if self.state.target.as_ref() == Some(id) {
            self.state.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut menu = MenuController::default();
        assert!(!menu.is_open());

        menu.open(Point::new(10.0, 20.0), Some(BlockId::from("2")));
        assert!(menu.is_open());
        assert_eq!(menu.state().position, Point::new(10.0, 20.0));
        assert_eq!(menu.state().target, Some(BlockId::from("2")));

        assert!(menu.close());
        assert!(!menu.close());
    }

    #[test]
    fn test_open_at_anchor_applies_offset() {
        let mut menu = MenuController::new(5.0);
        menu.open_at_anchor(Rect::new(100.0, 40.0, 120.0, 60.0), None);
        assert_eq!(menu.state().position, Point::new(100.0, 65.0));

        let mut menu = MenuController::new(12.0);
        menu.open_at_anchor(Rect::new(0.0, 0.0, 10.0, 10.0), None);
        assert_eq!(menu.state().position, Point::new(0.0, 22.0));
    }

    #[test]
    fn test_select_closes_and_returns_target() {
        let mut menu = MenuController::default();
        menu.open(Point::default(), Some(BlockId::from("4")));

        let req = menu.select(BlockKind::Code).unwrap();
        assert_eq!(req.after, Some(BlockId::from("4")));
        assert_eq!(req.kind, BlockKind::Code);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_on_closed_menu() {
        let mut menu = MenuController::default();
        assert_eq!(menu.select(BlockKind::Text), None);
    }

    #[test]
    fn test_forget_retargets_to_end() {
        let mut menu = MenuController::default();
        menu.open(Point::default(), Some(BlockId::from("4")));
        menu.forget(&BlockId::from("1"));
        assert_eq!(menu.state().target, Some(BlockId::from("4")));
        menu.forget(&BlockId::from("4"));
        assert_eq!(menu.state().target, None);
        assert!(menu.is_open());
    }
}

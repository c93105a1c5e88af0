//! Editor session, the aggregate that owns one document and its UI state.
//!
//! `EditorSession` routes [`InputEvent`]s to the controllers, applies the
//! resulting store mutations, emits notifications, and queues post-commit
//! [`EditorEvent`]s. Everything is synchronous: each call is one complete,
//! atomic transition.
//!
//! Errors never escape. Stale ids and unsupported operations are logged and
//! ignored; deleting the last block is refused with an error notification.

use nexusnote_types::{Block, BlockId, BlockKind};

use crate::config::{ConfigError, EditorConfig};
use crate::drag::DragReorderController;
use crate::input::{Handled, InputEvent, PointerTarget};
use crate::menu::{MenuController, Point, Rect};
use crate::notify::{Notification, NotificationSink, TracingSink};
use crate::selection::{Selection, SelectionController};
use crate::view::{BlockView, EditorEvent, EditorSnapshot};
use crate::{BlockStore, EditorError};

pub struct EditorSession<S: NotificationSink = TracingSink> {
    store: BlockStore,
    selection: SelectionController,
    menu: MenuController,
    drag: DragReorderController,
    sink: S,
    notifications: bool,
    events: Vec<EditorEvent>,
}

impl<S: NotificationSink> EditorSession<S> {
    /// Start a session on the config's seed document.
    pub fn new(config: &EditorConfig, sink: S) -> Result<Self, ConfigError> {
        let blocks = config.seed_blocks()?;
        let store =
            BlockStore::new(blocks).map_err(|e| ConfigError::InvalidSeed(e.to_string()))?;
        tracing::debug!(blocks = store.len(), "editor session started");
        Ok(Self {
            store,
            selection: SelectionController::new(),
            menu: MenuController::new(config.menu_offset),
            drag: DragReorderController::new(),
            sink,
            notifications: config.notifications,
            events: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    pub fn blocks(&self) -> &[Block] {
        self.store.blocks()
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn active_id(&self) -> Option<&BlockId> {
        self.selection.active_id()
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn drag(&self) -> &DragReorderController {
        &self.drag
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn toolbar_visible(&self) -> bool {
        self.selection.toolbar_visible(&self.store)
    }

    /// Take the queued post-commit events.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render state after the last event.
    pub fn snapshot(&self) -> EditorSnapshot {
        let drag = self.drag.state();
        let blocks = self
            .store
            .blocks()
            .iter()
            .map(|block| BlockView {
                placeholder: block.placeholder(),
                active: self.selection.selection().is_active(&block.id),
                drag_over: drag.drag_over.as_ref() == Some(&block.id),
                dragging: drag.dragged.as_ref() == Some(&block.id),
                block: block.clone(),
            })
            .collect();

        EditorSnapshot {
            version: self.store.version(),
            blocks,
            selection: self.selection.selection().clone(),
            toolbar_visible: self.toolbar_visible(),
            menu: self.menu.state().clone(),
            drag: drag.clone(),
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one inbound event.
    pub fn handle(&mut self, event: InputEvent) -> Handled {
        tracing::trace!(?event, "handle");
        match event {
            InputEvent::BlockClick(id) => self.click_block(&id),
            InputEvent::ContextMenuRequest { id, anchor } => self.open_block_menu(&id, anchor),
            InputEvent::AddBlockRequest { anchor, pointer } => self.open_add_menu(anchor, pointer),
            InputEvent::MenuSelect(kind) => self.select_menu_kind(kind),
            InputEvent::ContentEdited { id, text } => self.edit_content(&id, text),
            InputEvent::TodoToggle(id) => self.toggle_todo(&id),
            InputEvent::SetHeadingLevel { id, level } => self.set_heading_level(&id, level),
            InputEvent::DeleteRequest(id) => self.delete_block(&id),
            InputEvent::DragStart(id) => self.drag_start(&id),
            InputEvent::DragOver(id) => Handled::from_changed(self.drag.drag_over(&id)),
            InputEvent::DragEnd => self.drag_end(),
            InputEvent::DragCancel => {
                let was_dragging = self.drag.is_dragging();
                self.drag.reset();
                Handled::from_changed(was_dragging)
            }
            InputEvent::PointerDown(target) => self.pointer_down(&target),
            InputEvent::KeyEnter { id, soft_newline } => self.key_enter(&id, soft_newline),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn click_block(&mut self, id: &BlockId) -> Handled {
        if !self.store.contains(id) {
            return self.absorb("click", EditorError::BlockNotFound(id.clone()));
        }
        Handled::from_changed(self.selection.activate(id))
    }

    /// Open the type picker under a block's "+" button, targeting that block.
    pub fn open_block_menu(&mut self, id: &BlockId, anchor: Rect) -> Handled {
        if !self.store.contains(id) {
            return self.absorb("open menu", EditorError::BlockNotFound(id.clone()));
        }
        self.selection.focus(id);
        self.menu.open_at_anchor(anchor, Some(id.clone()));
        Handled::Consumed
    }

    /// Open the type picker from the "Add a block" affordance.
    pub fn open_add_menu(&mut self, anchor: Rect, pointer: Point) -> Handled {
        match self.store.last_id().cloned() {
            Some(last) => {
                self.selection.focus(&last);
                self.menu.open_at_anchor(anchor, Some(last));
            }
            None => self.menu.open(pointer, None),
        }
        Handled::Consumed
    }

    /// Insert the chosen type after the menu target (or the last block).
    pub fn select_menu_kind(&mut self, kind: BlockKind) -> Handled {
        let Some(request) = self.menu.select(kind) else {
            tracing::debug!(%kind, "menu select while closed, ignoring");
            return Handled::Ignored;
        };
        let after = request.after.or_else(|| self.store.last_id().cloned());
        match after {
            Some(after) => self.insert_after(&after, request.kind),
            None => {
                let block = self.store.append(request.kind);
                self.after_insert(&block);
                Handled::Consumed
            }
        }
    }

    /// Insert an empty block of `kind` after `after`, activate it, and queue
    /// the focus continuation.
    pub fn insert_after(&mut self, after: &BlockId, kind: BlockKind) -> Handled {
        match self.store.insert_after(after, kind) {
            Ok(block) => {
                self.after_insert(&block);
                Handled::Consumed
            }
            Err(e) => self.absorb("insert", e),
        }
    }

    fn after_insert(&mut self, block: &Block) {
        self.selection.focus(&block.id);
        self.menu.close();
        self.events.push(EditorEvent::BlockInserted {
            id: block.id.clone(),
        });
        self.notify(Notification::block_added(block.kind()));
    }

    pub fn edit_content(&mut self, id: &BlockId, text: impl Into<String>) -> Handled {
        match self.store.update_content(id, text) {
            Ok(()) => Handled::Consumed,
            Err(e) => self.absorb("edit content", e),
        }
    }

    pub fn toggle_todo(&mut self, id: &BlockId) -> Handled {
        match self.store.toggle_checked(id) {
            Ok(_) => Handled::Consumed,
            Err(e) => self.absorb("toggle todo", e),
        }
    }

    pub fn set_heading_level(&mut self, id: &BlockId, level: u8) -> Handled {
        match self.store.set_heading_level(id, level) {
            Ok(()) => Handled::Consumed,
            Err(e) => self.absorb("set heading level", e),
        }
    }

    pub fn delete_block(&mut self, id: &BlockId) -> Handled {
        match self.store.delete(id) {
            Ok(_) => {
                self.selection.forget(id);
                self.drag.forget(id);
                self.menu.forget(id);
                self.notify(Notification::block_deleted());
                Handled::Consumed
            }
            Err(EditorError::CannotDeleteLastBlock) => {
                tracing::debug!(%id, "refusing to delete the last block");
                self.notify(Notification::last_block_refused());
                Handled::Refused
            }
            Err(e) => self.absorb("delete", e),
        }
    }

    pub fn drag_start(&mut self, id: &BlockId) -> Handled {
        if !self.store.contains(id) {
            return self.absorb("drag start", EditorError::BlockNotFound(id.clone()));
        }
        self.drag.drag_start(id);
        Handled::Consumed
    }

    /// Complete a drag: move the dragged block into the drop target's slot.
    pub fn drag_end(&mut self) -> Handled {
        let Some(intent) = self.drag.drag_end() else {
            return Handled::Ignored;
        };
        match self.store.move_block(&intent.dragged, &intent.target) {
            Ok(true) => {
                self.notify(Notification::blocks_reordered());
                Handled::Consumed
            }
            Ok(false) => Handled::Ignored,
            Err(e) => self.absorb("reorder", e),
        }
    }

    /// Click-outside handling. The menu is settled first, so closing it never
    /// counts as a click inside a block; then the selection is dropped if the
    /// pointer landed outside every block and outside the menu.
    pub fn pointer_down(&mut self, target: &PointerTarget) -> Handled {
        let mut changed = false;
        if *target != PointerTarget::Menu {
            changed |= self.menu.close();
        }
        if *target == PointerTarget::Outside {
            changed |= self.selection.deactivate();
        }
        Handled::from_changed(changed)
    }

    /// Enter inserts a text block after `id`, whatever kind `id` is. With the
    /// soft-newline modifier the key passes through to the text input.
    pub fn key_enter(&mut self, id: &BlockId, soft_newline: bool) -> Handled {
        if soft_newline {
            return Handled::PassThrough;
        }
        self.insert_after(id, BlockKind::Text)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn notify(&mut self, notification: Notification) {
        if self.notifications {
            self.sink.notify(notification);
        }
    }

    fn absorb(&self, op: &'static str, err: EditorError) -> Handled {
        tracing::debug!(op, error = %err, "ignored");
        Handled::Ignored
    }
}

//! Block document model and editing-interaction state machines for NexusNote.
//!
//! A document is an ordered, never-empty sequence of typed blocks. This crate
//! owns that sequence and the transient UI state around it: which block is
//! active, the type-picker menu, and drag-and-drop reordering. Rendering,
//! hit-testing, and text entry belong to the host; it feeds
//! [`InputEvent`]s in and renders [`EditorSnapshot`]s out.
//!
//! # Components
//!
//! - [`BlockStore`]: the document; insert, update, delete, move
//! - [`SelectionController`]: single active block and toolbar rule
//! - [`DragReorderController`]: start / over / end / cancel protocol
//! - [`MenuController`]: type-picker visibility, position, insertion target
//! - [`NotificationSink`]: where user-facing messages go
//! - [`EditorSession`]: owns all of the above and dispatches events
//!
//! # Event Ordering
//!
//! Every event is handled synchronously to completion. On a pointer-down the
//! menu is settled before the selection. Focusing a freshly inserted block is
//! a post-commit continuation: [`EditorEvent::BlockInserted`] is queued once
//! the block is in the document and the host drains it after re-rendering.

mod block_store;
pub mod config;
pub mod drag;
mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod notify;
pub mod selection;
mod session;
pub mod view;

pub use block_store::BlockStore;
pub use config::{ConfigError, EditorConfig, SeedBlock};
pub use drag::{DragReorderController, DragState, DropIntent};
pub use error::EditorError;
pub use input::{Handled, InputEvent, PointerTarget};
pub use menu::{InsertRequest, MenuController, MenuState, Point, Rect};
pub use notify::{NoticeKind, Notification, NotificationSink, RecordingSink, TracingSink};
pub use selection::{Selection, SelectionController};
pub use session::EditorSession;
pub use view::{BlockView, EditorEvent, EditorSnapshot};

pub use nexusnote_types::{
    Block, BlockBody, BlockId, BlockKind, BlockTypeInfo, BlockTypeRegistry, HeadingLevel,
};

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, EditorError>;

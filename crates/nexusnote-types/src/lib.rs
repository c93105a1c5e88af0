//! Block identity, block kinds, and the block type registry for NexusNote.
//!
//! A pure leaf crate: no internal NexusNote dependencies. The editor crate
//! builds its document store and interaction state machines on top of it.
//!
//! # Key Types
//!
//! |------------------------|--------------------------------------------|
//! | Type                   | Purpose                                    |
//! |------------------------|--------------------------------------------|
//! | [`BlockId`]            | Opaque, never-reused block address         |
//! | [`BlockKind`]          | What a block is (text, heading, todo, ...) |
//! | [`BlockBody`]          | Kind plus kind-specific attributes         |
//! | [`Block`]              | One unit of document content               |
//! | [`HeadingLevel`]       | Heading level constrained to 1..=3         |
//! | [`BlockTypeRegistry`]  | Defaults, placeholders, menu metadata      |
//! |------------------------|--------------------------------------------|

pub mod block;
pub mod ids;
pub mod registry;

pub use block::{Block, BlockBody, BlockError, BlockKind, HeadingLevel};
pub use ids::BlockId;
pub use registry::{BlockTypeInfo, BlockTypeRegistry, GENERIC_PLACEHOLDER};

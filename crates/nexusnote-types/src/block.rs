//! Block kinds and the block value type.
//!
//! ## Design: one tagged union per block
//!
//! `BlockBody` carries the type-specific attributes as enum payload, so an
//! attribute that does not apply to a kind simply cannot be represented: a
//! table has no `checked`, a to-do has no `level`. `BlockKind` is the flat,
//! payload-free discriminant used for lookups, menus, and logging.
//!
//! Serialized, a block is a flat object whose `type` field selects the kind:
//!
//! ```text
//! {"id":"1","type":"heading","level":1,"content":"Welcome to NexusNote"}
//! {"id":"3","type":"todo","checked":false,"content":"Try creating a new block below"}
//! {"id":"2","type":"text","content":"..."}
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ids::BlockId;
use crate::registry::BlockTypeRegistry;

/// Errors from constructing block values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("heading level {0} out of range (expected 1..=3)")]
    InvalidHeadingLevel(u8),
    #[error("unknown block type '{0}'")]
    UnknownKind(String),
}

/// What a block *is*. Immutable for the block's lifetime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BlockKind {
    /// Plain paragraph.
    #[default]
    Text,
    /// Section heading with a level.
    Heading,
    /// List item.
    List,
    /// Checkable to-do item.
    #[strum(serialize = "todo", serialize = "to-do")]
    Todo,
    /// Code block.
    Code,
    /// Image (content is the description).
    Image,
    /// Table (content is the raw table text).
    Table,
}

impl BlockKind {
    /// Every kind, in type-picker menu order.
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::List,
        BlockKind::Todo,
        BlockKind::Code,
        BlockKind::Image,
        BlockKind::Table,
    ];

    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Parse from string, reporting unknown names.
    pub fn parse(s: &str) -> Result<Self, BlockError> {
        Self::from_str(s).ok_or_else(|| BlockError::UnknownKind(s.to_string()))
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::List => "list",
            BlockKind::Todo => "todo",
            BlockKind::Code => "code",
            BlockKind::Image => "image",
            BlockKind::Table => "table",
        }
    }

    /// Kinds that get the inline formatting toolbar when active.
    pub fn has_toolbar(&self) -> bool {
        matches!(self, BlockKind::Text | BlockKind::Heading)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heading level, always in `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Document title level.
    pub const TITLE: HeadingLevel = HeadingLevel(1);
    /// Level given to newly inserted headings.
    pub const DEFAULT: HeadingLevel = HeadingLevel(2);
    /// Smallest heading.
    pub const MINOR: HeadingLevel = HeadingLevel(3);

    pub fn new(level: u8) -> Result<Self, BlockError> {
        if (1..=3).contains(&level) {
            Ok(Self(level))
        } else {
            Err(BlockError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = BlockError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.0
    }
}

/// Kind plus the attributes that only exist for that kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockBody {
    Text,
    Heading { level: HeadingLevel },
    List,
    Todo { checked: bool },
    Code,
    Image,
    Table,
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Text => BlockKind::Text,
            BlockBody::Heading { .. } => BlockKind::Heading,
            BlockBody::List => BlockKind::List,
            BlockBody::Todo { .. } => BlockKind::Todo,
            BlockBody::Code => BlockKind::Code,
            BlockBody::Image => BlockKind::Image,
            BlockBody::Table => BlockKind::Table,
        }
    }
}

/// One unit of document content.
///
/// Blocks are values: mutation produces a new `Block` rather than editing
/// one in place, so a document's block sequence can be compared by value
/// for change detection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub body: BlockBody,
    pub content: String,
}

impl Block {
    /// Create a block from an explicit body.
    pub fn new(id: BlockId, body: BlockBody, content: impl Into<String>) -> Self {
        Self {
            id,
            body,
            content: content.into(),
        }
    }

    /// Create an empty block of `kind` with registry defaults.
    pub fn empty(id: BlockId, kind: BlockKind) -> Self {
        Self::new(id, BlockTypeRegistry::attributes_for(kind), String::new())
    }

    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    /// Heading level, or `None` for non-headings.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self.body {
            BlockBody::Heading { level } => Some(level),
            _ => None,
        }
    }

    /// Checked state, or `None` for non-todos.
    pub fn checked(&self) -> Option<bool> {
        match self.body {
            BlockBody::Todo { checked } => Some(checked),
            _ => None,
        }
    }

    /// Copy of this block with new content; every other attribute kept.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Copy of this block with a new body. Callers keep the kind unchanged.
    pub fn with_body(&self, body: BlockBody) -> Self {
        Self {
            body,
            ..self.clone()
        }
    }

    /// Placeholder shown while `content` is empty.
    pub fn placeholder(&self) -> &'static str {
        BlockTypeRegistry::placeholder_for(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── BlockKind ───────────────────────────────────────────────────────

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!(BlockKind::from_str("Heading"), Some(BlockKind::Heading));
        assert_eq!(BlockKind::from_str("TODO"), Some(BlockKind::Todo));
        assert_eq!(BlockKind::from_str("to-do"), Some(BlockKind::Todo));
        assert_eq!(BlockKind::from_str("paragraph"), None);
    }

    #[test]
    fn test_kind_parse_reports_unknown() {
        assert_eq!(
            BlockKind::parse("callout"),
            Err(BlockError::UnknownKind("callout".into()))
        );
    }

    #[test]
    fn test_kind_str_roundtrip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_toolbar_kinds() {
        let with_toolbar: Vec<_> = BlockKind::ALL.into_iter().filter(|k| k.has_toolbar()).collect();
        assert_eq!(with_toolbar, vec![BlockKind::Text, BlockKind::Heading]);
    }

    // ── HeadingLevel ────────────────────────────────────────────────────

    #[test]
    fn test_heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_err());
        assert_eq!(HeadingLevel::new(1).unwrap(), HeadingLevel::TITLE);
        assert_eq!(HeadingLevel::new(3).unwrap(), HeadingLevel::MINOR);
        assert_eq!(HeadingLevel::new(4), Err(BlockError::InvalidHeadingLevel(4)));
        assert_eq!(HeadingLevel::default().get(), 2);
    }

    #[test]
    fn test_heading_level_rejected_on_deserialize() {
        let bad: Result<HeadingLevel, _> = serde_json::from_str("7");
        assert!(bad.is_err());
    }

    // ── Block ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_block_defaults() {
        let heading = Block::empty(BlockId::from("h"), BlockKind::Heading);
        assert_eq!(heading.level(), Some(HeadingLevel::DEFAULT));
        assert_eq!(heading.checked(), None);
        assert!(heading.content.is_empty());

        let todo = Block::empty(BlockId::from("t"), BlockKind::Todo);
        assert_eq!(todo.checked(), Some(false));
        assert_eq!(todo.level(), None);

        for kind in [BlockKind::Text, BlockKind::List, BlockKind::Code, BlockKind::Image, BlockKind::Table] {
            let block = Block::empty(BlockId::from("x"), kind);
            assert_eq!(block.kind(), kind);
            assert_eq!(block.level(), None);
            assert_eq!(block.checked(), None);
        }
    }

    #[test]
    fn test_with_content_preserves_attributes() {
        let block = Block::new(
            BlockId::from("1"),
            BlockBody::Heading { level: HeadingLevel::TITLE },
            "old",
        );
        let updated = block.with_content("new");
        assert_eq!(updated.id, block.id);
        assert_eq!(updated.level(), Some(HeadingLevel::TITLE));
        assert_eq!(updated.content, "new");
        assert_eq!(block.content, "old");
    }

    #[test]
    fn test_serialized_shape_omits_foreign_attributes() {
        let table = Block::empty(BlockId::from("9"), BlockKind::Table);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["type"], "table");
        assert!(json.get("checked").is_none());
        assert!(json.get("level").is_none());

        let todo = Block::new(BlockId::from("3"), BlockBody::Todo { checked: true }, "x");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["type"], "todo");
        assert_eq!(json["checked"], true);
        assert!(json.get("level").is_none());
    }

    #[test]
    fn test_block_deserializes_from_flat_object() {
        let block: Block = serde_json::from_str(
            r#"{"id":"1","type":"heading","level":1,"content":"Welcome"}"#,
        )
        .unwrap();
        assert_eq!(block.kind(), BlockKind::Heading);
        assert_eq!(block.level(), Some(HeadingLevel::TITLE));
        assert_eq!(block.content, "Welcome");
    }
}

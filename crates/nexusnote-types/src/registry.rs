//! Compiled-in block type registry.
//!
//! Static table: default attributes, placeholder text, menu label, and icon
//! hint per [`BlockKind`]. There is no runtime registration.

use crate::block::{BlockBody, BlockKind, HeadingLevel};

/// Placeholder for unknown type names.
pub const GENERIC_PLACEHOLDER: &str = "Type something...";

/// Static metadata for one block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockTypeInfo {
    pub kind: BlockKind,
    /// Label in the type-picker menu.
    pub name: &'static str,
    /// Shown while the block has no content.
    pub placeholder: &'static str,
    /// Icon name for the view layer.
    pub icon: &'static str,
}

const ENTRIES: [BlockTypeInfo; 7] = [
    BlockTypeInfo {
        kind: BlockKind::Text,
        name: "Text",
        placeholder: GENERIC_PLACEHOLDER,
        icon: "Type",
    },
    BlockTypeInfo {
        kind: BlockKind::Heading,
        name: "Heading",
        placeholder: "Heading",
        icon: "Type",
    },
    BlockTypeInfo {
        kind: BlockKind::List,
        name: "List",
        placeholder: "List item",
        icon: "List",
    },
    BlockTypeInfo {
        kind: BlockKind::Todo,
        name: "To-do",
        placeholder: "To-do item",
        icon: "CheckSquare",
    },
    BlockTypeInfo {
        kind: BlockKind::Code,
        name: "Code",
        placeholder: "Code block",
        icon: "Code",
    },
    BlockTypeInfo {
        kind: BlockKind::Image,
        name: "Image",
        placeholder: "Image description",
        icon: "Image",
    },
    BlockTypeInfo {
        kind: BlockKind::Table,
        name: "Table",
        placeholder: "Table content",
        icon: "Table",
    },
];

/// Lookup facade over the static table.
pub struct BlockTypeRegistry;

impl BlockTypeRegistry {
    /// All entries, in menu order.
    pub fn all() -> &'static [BlockTypeInfo] {
        &ENTRIES
    }

    pub fn info(kind: BlockKind) -> &'static BlockTypeInfo {
        let idx = match kind {
            BlockKind::Text => 0,
            BlockKind::Heading => 1,
            BlockKind::List => 2,
            BlockKind::Todo => 3,
            BlockKind::Code => 4,
            BlockKind::Image => 5,
            BlockKind::Table => 6,
        };
        &ENTRIES[idx]
    }

    /// Default type-specific attributes for a new block of `kind`.
    pub fn attributes_for(kind: BlockKind) -> BlockBody {
        match kind {
            BlockKind::Text => BlockBody::Text,
            BlockKind::Heading => BlockBody::Heading {
                level: HeadingLevel::DEFAULT,
            },
            BlockKind::List => BlockBody::List,
            BlockKind::Todo => BlockBody::Todo { checked: false },
            BlockKind::Code => BlockBody::Code,
            BlockKind::Image => BlockBody::Image,
            BlockKind::Table => BlockBody::Table,
        }
    }

    pub fn placeholder_for(kind: BlockKind) -> &'static str {
        Self::info(kind).placeholder
    }

    /// Placeholder by type name; unknown names get [`GENERIC_PLACEHOLDER`].
    pub fn placeholder_for_name(name: &str) -> &'static str {
        BlockKind::from_str(name)
            .map(Self::placeholder_for)
            .unwrap_or(GENERIC_PLACEHOLDER)
    }

    pub fn display_name(kind: BlockKind) -> &'static str {
        Self::info(kind).name
    }

    pub fn icon_for(kind: BlockKind) -> &'static str {
        Self::info(kind).icon
    }
}

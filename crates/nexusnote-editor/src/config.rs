//! Editor configuration, loaded from RON.
//!
//! Every field has a default, so an empty file (`()`) is a valid config.
//!
//! ```ron
//! (
//!     menu_offset: 8.0,
//!     notifications: true,
//!     seed: [
//!         (id: Some("title"), kind: heading, content: "Notes", level: Some(1)),
//!         (kind: todo, content: "Buy milk"),
//!     ],
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;

use nexusnote_types::{Block, BlockBody, BlockId, BlockKind, HeadingLevel};
use serde::Deserialize;

/// Errors that can occur when loading editor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid seed document: {0}")]
    InvalidSeed(String),
}

/// One block of the initial document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedBlock {
    /// Fixed id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
    /// Headings only.
    #[serde(default)]
    pub level: Option<u8>,
    /// To-dos only.
    #[serde(default)]
    pub checked: Option<bool>,
}

impl SeedBlock {
    fn new(id: &str, kind: BlockKind, content: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            kind,
            content: content.to_string(),
            level: None,
            checked: None,
        }
    }

    /// Validate into a block. Attributes that do not belong to the kind are
    /// rejected rather than dropped.
    pub fn to_block(&self) -> Result<Block, ConfigError> {
        let id = self
            .id
            .as_deref()
            .map(BlockId::from)
            .unwrap_or_else(BlockId::generate);

        if self.level.is_some() && self.kind != BlockKind::Heading {
            return Err(ConfigError::InvalidSeed(format!(
                "block {id}: `level` is only valid on headings, not {}",
                self.kind
            )));
        }
        if self.checked.is_some() && self.kind != BlockKind::Todo {
            return Err(ConfigError::InvalidSeed(format!(
                "block {id}: `checked` is only valid on todos, not {}",
                self.kind
            )));
        }

        let body = match self.kind {
            BlockKind::Heading => {
                let level = match self.level {
                    Some(l) => HeadingLevel::new(l)
                        .map_err(|e| ConfigError::InvalidSeed(format!("block {id}: {e}")))?,
                    None => HeadingLevel::DEFAULT,
                };
                BlockBody::Heading { level }
            }
            BlockKind::Todo => BlockBody::Todo {
                checked: self.checked.unwrap_or(false),
            },
            BlockKind::Text => BlockBody::Text,
            BlockKind::List => BlockBody::List,
            BlockKind::Code => BlockBody::Code,
            BlockKind::Image => BlockBody::Image,
            BlockKind::Table => BlockBody::Table,
        };

        Ok(Block::new(id, body, self.content.clone()))
    }
}

/// The five-block welcome document of a fresh session, ids `"1"`..`"5"`.
pub fn welcome_seed() -> Vec<SeedBlock> {
    vec![
        SeedBlock {
            level: Some(1),
            ..SeedBlock::new("1", BlockKind::Heading, "Welcome to NexusNote")
        },
        SeedBlock::new(
            "2",
            BlockKind::Text,
            "This is a versatile document editor that allows you to create rich, interactive content.",
        ),
        SeedBlock {
            checked: Some(false),
            ..SeedBlock::new("3", BlockKind::Todo, "Try creating a new block below")
        },
        SeedBlock {
            checked: Some(false),
            ..SeedBlock::new("4", BlockKind::Todo, "Edit existing blocks by clicking on them")
        },
        SeedBlock {
            checked: Some(false),
            ..SeedBlock::new("5", BlockKind::Todo, "Rearrange blocks by dragging them")
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels between an anchor's bottom edge and the type-picker menu.
    pub menu_offset: f32,
    /// Forward notifications to the sink.
    pub notifications: bool,
    /// Initial document.
    pub seed: Vec<SeedBlock>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            menu_offset: 5.0,
            notifications: true,
            seed: welcome_seed(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a RON config.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = ron::from_str(text)?;
        config.seed_blocks()?;
        Ok(config)
    }

    /// Load and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&text)?;
        tracing::debug!(path = %path.display(), blocks = config.seed.len(), "loaded editor config");
        Ok(config)
    }

    /// Build the seed blocks, rejecting an empty seed or duplicate ids.
    pub fn seed_blocks(&self) -> Result<Vec<Block>, ConfigError> {
        if self.seed.is_empty() {
            return Err(ConfigError::InvalidSeed(
                "a document needs at least one block".to_string(),
            ));
        }
        let blocks = self
            .seed
            .iter()
            .map(SeedBlock::to_block)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for block in &blocks {
            if !seen.insert(&block.id) {
                return Err(ConfigError::InvalidSeed(format!("duplicate block id {}", block.id)));
            }
        }
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_seed_is_welcome_document() {
        let blocks = EditorConfig::default().seed_blocks().unwrap();
        let ids: Vec<_> = blocks.iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        assert_eq!(blocks[0].kind(), BlockKind::Heading);
        assert_eq!(blocks[0].level(), Some(HeadingLevel::TITLE));
        assert_eq!(blocks[0].content, "Welcome to NexusNote");
        assert_eq!(blocks[1].kind(), BlockKind::Text);
        for todo in &blocks[2..] {
            assert_eq!(todo.checked(), Some(false));
        }
    }

    #[test]
    fn test_empty_ron_uses_defaults() {
        let config = EditorConfig::from_ron_str("()").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_ron_overrides() {
        let config = EditorConfig::from_ron_str(
            r#"(
                menu_offset: 8.0,
                notifications: false,
                seed: [
                    (id: Some("title"), kind: heading, content: "Notes", level: Some(3)),
                    (kind: todo, content: "Buy milk", checked: Some(true)),
                    (kind: code),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(config.menu_offset, 8.0);
        assert!(!config.notifications);

        let blocks = config.seed_blocks().unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].id, BlockId::from("title"));
        assert_eq!(blocks[0].level(), Some(HeadingLevel::MINOR));
        assert_eq!(blocks[1].checked(), Some(true));
        assert!(blocks[1].id.is_generated());
        assert_eq!(blocks[2].kind(), BlockKind::Code);
        assert!(blocks[2].content.is_empty());
    }

    #[test]
    fn test_heading_without_level_gets_default() {
        let seed = SeedBlock::new("h", BlockKind::Heading, "x");
        assert_eq!(seed.to_block().unwrap().level(), Some(HeadingLevel::DEFAULT));
    }

    #[test]
    fn test_rejects_invalid_level() {
        let err = EditorConfig::from_ron_str(r#"(seed: [(kind: heading, level: Some(5))])"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));
    }

    #[test]
    fn test_rejects_foreign_attributes() {
        let err = EditorConfig::from_ron_str(r#"(seed: [(kind: table, checked: Some(true))])"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));

        let err = EditorConfig::from_ron_str(r#"(seed: [(kind: todo, level: Some(1))])"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));
    }

    #[test]
    fn test_rejects_empty_seed_and_duplicates() {
        assert!(matches!(
            EditorConfig::from_ron_str("(seed: [])"),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            EditorConfig::from_ron_str(
                r#"(seed: [(id: Some("a"), kind: text), (id: Some("a"), kind: list)])"#
            ),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_ron() {
        assert!(matches!(
            EditorConfig::from_ron_str("(menu_offset: )"),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"(menu_offset: 2.5, seed: [(kind: list, content: "item")])"#).unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.menu_offset, 2.5);
        assert_eq!(config.seed.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load(dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

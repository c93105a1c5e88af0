//! Block identifiers.
//!
//! A `BlockId` is an opaque string key. Ids generated at runtime wrap a
//! UUIDv7 (time-ordered, globally unique) so they are never reused within or
//! across sessions. Seed documents may use short literal keys like `"1"`.
//! Nothing outside this module should parse an id; compare and clone only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix applied to runtime-generated ids.
const GENERATED_PREFIX: &str = "block-";

/// Opaque, stable identifier for one block.
#[derive(Clone, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Wrap an existing key (seed documents, host-supplied ids).
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh id: `block-{uuidv7 hex}`.
    pub fn generate() -> Self {
        Self(format!(
            "{GENERATED_PREFIX}{}",
            uuid::Uuid::now_v7().as_simple()
        ))
    }

    /// The full key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id came from [`BlockId::generate`].
    pub fn is_generated(&self) -> bool {
        self.0.starts_with(GENERATED_PREFIX)
    }

    /// Short form for logs and UI. Not a lookup key.
    ///
    /// Generated ids keep the last 8 hex chars (the random tail of the v7
    /// uuid, which differs even between ids minted in the same millisecond).
    pub fn short(&self) -> &str {
        match self.0.strip_prefix(GENERATED_PREFIX) {
            Some(hex) if hex.len() > 8 => &hex[hex.len() - 8..],
            Some(hex) => hex,
            None => &self.0,
        }
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| BlockId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_format() {
        let id = BlockId::generate();
        assert!(id.is_generated());
        assert!(id.as_str().starts_with("block-"));
        // "block-" + 32 hex chars
        assert_eq!(id.as_str().len(), 6 + 32);
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn test_literal_ids() {
        let id = BlockId::from("1");
        assert!(!id.is_generated());
        assert_eq!(id.short(), "1");
        assert_eq!(id.to_string(), "1");
        assert_eq!(id, BlockId::new(String::from("1")));
    }

    #[test]
    fn test_serde_transparent() {
        let id = BlockId::from("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
        let back: BlockId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, id);
    }
}

//! # EntityId
//!
//! Canonical 128-bit identity for every Quillboard entity. Identifiers
//! compare over the raw value, so the textual case or hyphenation used to
//! construct one never affects equality or ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Opaque entity identifier backed by a random (version 4) UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generates a fresh random identifier for a new entity.
    pub fn random() -> Self {
        EntityId(Uuid::new_v4())
    }

    /// Parses an identifier from untrusted text.
    ///
    /// Hyphenated, simple (32 hex digits), and mixed-case forms all parse to
    /// the same value. Wrong length or non-hex input fails validation.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let uuid = Uuid::parse_str(text)
            .map_err(|_| AppError::Validation(format!("malformed identifier \"{text}\"")))?;
        Ok(EntityId(uuid))
    }

    /// Raw 128-bit value, for adapters that store identifiers in binary form.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EntityId {
    /// Canonical form: lowercase, hyphenated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntityId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        EntityId::parse(s)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Uuid {
        id.0
    }
}

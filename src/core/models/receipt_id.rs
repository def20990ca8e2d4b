//! Opaque receipt identifiers
//!
//! Identifiers are random UUID v4 strings. Callers must not read any meaning
//! into them beyond equality.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to an accepted receipt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identifier supplied by a client
    ///
    /// Returns `None` unless the text is a hyphenated UUID, so lookups with
    /// garbage ids resolve to "not found" without touching the store.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw)
            .ok()
            .filter(|uuid| uuid.hyphenated().to_string().eq_ignore_ascii_case(raw))
            .map(|_| Self(raw.to_ascii_lowercase()))
    }

    /// The identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReceiptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Commit identifier
//!
//! Ids are opaque strings produced by a [`ContentAddresser`]. The default
//! addresser yields 40-character SHA-1 hex digests, but custom addressers may
//! use any format, so the only structure assumed here is "non-empty text".
//!
//! [`ContentAddresser`]: crate::artifacts::core::addresser::ContentAddresser

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct CommitId(String);

impl CommitId {
    /// Whether the id has the shape of a SHA-1 hex digest
    pub fn is_hex_digest(&self) -> bool {
        self.0.len() == OBJECT_ID_LENGTH && self.0.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Document identifiers.
//!
//! The downstream editor stores every identifier as an uppercase hyphenated
//! UUID-v4 string, so identifiers are kept in that textual form rather than
//! as raw `Uuid` values (which would serialize lowercase).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An identifier within a draft document (materials, segments, tracks, the
/// document itself). Generated once, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().to_uppercase())
    }

    /// View as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

//! Typed identifiers for server-owned records.
//!
//! The console never mints identities: both identifiers are assigned by the
//! remote workshop API and only wrapped here so they cannot be mixed up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Workshop`](crate::workshop::Workshop), assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkshopId(i64);

impl WorkshopId {
    /// Wrap a raw server identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for WorkshopId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WorkshopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for WorkshopId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Opaque server-side reference to an uploaded material file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(String);

impl MaterialRef {
    /// Wrap a raw reference as returned by the server.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = WorkshopId::new(42);
        let parsed: WorkshopId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(WorkshopId::from_str("abc").is_err());
    }

    #[test]
    fn should_serialize_id_as_bare_number() {
        let json = serde_json::to_string(&WorkshopId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_serialize_material_ref_as_bare_string() {
        let material = MaterialRef::new("slides.pdf");
        let json = serde_json::to_string(&material).unwrap();
        assert_eq!(json, "\"slides.pdf\"");
        assert_eq!(material.to_string(), "slides.pdf");
    }
}

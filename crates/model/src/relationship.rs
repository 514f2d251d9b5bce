//! Relationship kinds between products
//!
//! The enumeration is closed: schema strings outside it are a load-time
//! error, not a silently-accepted edge label.
//!
//! ## Schema strings
//!
//! These spellings are part of the external schema and MUST NOT change:
//! - `derives-from`
//! - `clones`
//! - `upgrades`

use osidb_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directed relationship kinds between products.
///
/// Edges are stored on the source product only; `a --derives-from--> b`
/// records nothing on `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    /// The source product is based on the target (fedora derives from
    /// fedora-core).
    DerivesFrom,
    /// The source product is a rebuild of the target (centos clones rhel).
    Clones,
    /// The source product upgrades the target (a release upgrades its
    /// predecessor).
    Upgrades,
}

impl RelationshipKind {
    /// Every kind, for code that iterates the closed set.
    pub const ALL: [RelationshipKind; 3] = [
        RelationshipKind::DerivesFrom,
        RelationshipKind::Clones,
        RelationshipKind::Upgrades,
    ];

    /// The schema spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::DerivesFrom => "derives-from",
            RelationshipKind::Clones => "clones",
            RelationshipKind::Upgrades => "upgrades",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "derives-from" => Ok(RelationshipKind::DerivesFrom),
            "clones" => Ok(RelationshipKind::Clones),
            "upgrades" => Ok(RelationshipKind::Upgrades),
            other => Err(Error::UnknownRelationship(other.to_string())),
        }
    }
}

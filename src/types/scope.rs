//! Entity scopes — named subsets with their own independent orderings.

use std::fmt;

use serde::Serialize;

/// A named subset of entities over which one ordering is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    /// Every entity in the record set.
    Global,
    /// Only entities classified as languages.
    Language,
}

impl Scope {
    /// Return a human-readable name for this scope.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Language => "language",
        }
    }

    /// Parse a scope from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "global" => Some(Self::Global),
            "language" => Some(Self::Language),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

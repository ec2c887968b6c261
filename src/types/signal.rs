//! Ranking signals — the four per-entity measures and their dimensions.

use serde::Serialize;

/// The four derived measures an entity is ranked along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// Estimated job openings.
    pub jobs: u64,
    /// Estimated user count.
    pub users: u64,
    /// Number of recorded facts.
    pub facts: u64,
    /// Number of other entities referencing this one.
    pub inbound_links: u64,
}

impl Signals {
    /// The signal value along one dimension.
    pub fn get(&self, dimension: Dimension) -> u64 {
        match dimension {
            Dimension::Jobs => self.jobs,
            Dimension::Users => self.users,
            Dimension::Facts => self.facts,
            Dimension::InboundLinks => self.inbound_links,
        }
    }
}

/// One ranking dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    /// Estimated job openings.
    Jobs,
    /// Estimated user count.
    Users,
    /// Recorded fact count.
    Facts,
    /// Inbound cross-reference count.
    InboundLinks,
}

impl Dimension {
    /// All dimensions, in canonical order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Jobs,
        Dimension::Users,
        Dimension::Facts,
        Dimension::InboundLinks,
    ];

    /// Return a human-readable name for this dimension.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Users => "users",
            Self::Facts => "facts",
            Self::InboundLinks => "inboundLinks",
        }
    }
}

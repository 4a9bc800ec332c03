//! Hackathon track enumeration.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed category used to narrow the idea board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    SocialAgents,
    DeFiAgents,
    AgentInfra,
    AgentAggregators,
}

impl Track {
    /// All tracks in display order.
    pub const ALL: [Track; 4] = [
        Track::SocialAgents,
        Track::DeFiAgents,
        Track::AgentInfra,
        Track::AgentAggregators,
    ];

    /// Display label, also the string matched against idea themes.
    pub fn label(self) -> &'static str {
        match self {
            Self::SocialAgents => "Social Agents",
            Self::DeFiAgents => "DeFi Agents",
            Self::AgentInfra => "Agent Infra",
            Self::AgentAggregators => "Agent Aggregators",
        }
    }

    /// Kebab-case slug for command-line input.
    pub fn slug(self) -> &'static str {
        match self {
            Self::SocialAgents => "social-agents",
            Self::DeFiAgents => "defi-agents",
            Self::AgentInfra => "agent-infra",
            Self::AgentAggregators => "agent-aggregators",
        }
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a string names no known track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrack(pub String);

impl Display for UnknownTrack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let expected = Track::ALL
            .iter()
            .map(|track| track.slug())
            .collect::<Vec<_>>()
            .join("|");
        write!(f, "unknown track `{}`; expected {expected}", self.0)
    }
}

impl Error for UnknownTrack {}

impl FromStr for Track {
    type Err = UnknownTrack;

    /// Accepts the label or the slug, case-insensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Track::ALL
            .into_iter()
            .find(|track| track.label().to_lowercase() == normalized || track.slug() == normalized)
            .ok_or_else(|| UnknownTrack(value.trim().to_string()))
    }
}

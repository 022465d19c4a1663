//! Entity kinds: the fixed set of named collections.
//!
//! The set is closed at compile time; there is no dynamic creation of
//! entity kinds at runtime. Each kind owns exactly one collection in the
//! database.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named category of domain record, each with its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Posted freelance projects.
    Projects,
    /// Proposals submitted against projects.
    Proposals,
    /// Direct messages between users.
    Messages,
    /// Open bounties.
    Bounties,
    /// Submissions against bounties.
    BountySubmissions,
    /// Hackathon events.
    Hackathons,
    /// Team registrations for hackathons.
    HackathonRegistrations,
    /// User profiles (also the auth surface of the mock backend).
    Users,
}

impl EntityKind {
    /// Every kind, in declaration order. The database seeds one
    /// collection per entry.
    pub const ALL: [Self; 8] = [
        Self::Projects,
        Self::Proposals,
        Self::Messages,
        Self::Bounties,
        Self::BountySubmissions,
        Self::Hackathons,
        Self::HackathonRegistrations,
        Self::Users,
    ];

    /// The collection's wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Proposals => "proposals",
            Self::Messages => "messages",
            Self::Bounties => "bounties",
            Self::BountySubmissions => "bounty_submissions",
            Self::Hackathons => "hackathons",
            Self::HackathonRegistrations => "hackathon_registrations",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Application-facing facade.
//!
//! The UI layer consumes one [`Client`]: typed entity handles for every
//! collection plus the integration stubs. The client owns nothing
//! special itself; it is a thin bundle over a [`Database`] so consumers
//! receive it by handle instead of reaching for an ambient global.

use crate::entity::EntityKind;
use crate::integrations::Integrations;
use crate::latency::Latency;
use crate::store::{Database, EntityStore};

/// Bundle of the mock database and integration stubs.
///
/// # Examples
///
/// ```
/// use gigbase::{Client, Fields, Latency};
///
/// # #[tokio::main(flavor = "current_thread")] async fn main() -> gigbase::DbResult<()> {
/// let client = Client::new(Latency::none());
/// let project = client
///     .projects()
///     .create(Fields::new().with("title", "Landing Page").with("status", "open"))
///     .await?;
/// assert!(client.projects().get(&project.id).await?.is_some());
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    db: Database,
    integrations: Integrations,
}

impl Client {
    /// Creates a client over a freshly seeded database.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::with_database(Database::new(latency))
    }

    /// Wraps an existing database (e.g. an empty one built by a test).
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        let integrations = Integrations::new(db.latency());
        Self { db, integrations }
    }

    /// The underlying database handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// The integration stubs.
    #[must_use]
    pub const fn integrations(&self) -> &Integrations {
        &self.integrations
    }

    /// Generic accessor for any entity kind.
    #[must_use]
    pub fn entities(&self, kind: EntityKind) -> EntityStore {
        self.db.entity(kind)
    }

    /// Posted freelance projects.
    #[must_use]
    pub fn projects(&self) -> EntityStore {
        self.entities(EntityKind::Projects)
    }

    /// Proposals submitted against projects.
    #[must_use]
    pub fn proposals(&self) -> EntityStore {
        self.entities(EntityKind::Proposals)
    }

    /// Direct messages between users.
    #[must_use]
    pub fn messages(&self) -> EntityStore {
        self.entities(EntityKind::Messages)
    }

    /// Open bounties.
    #[must_use]
    pub fn bounties(&self) -> EntityStore {
        self.entities(EntityKind::Bounties)
    }

    /// Submissions against bounties.
    #[must_use]
    pub fn bounty_submissions(&self) -> EntityStore {
        self.entities(EntityKind::BountySubmissions)
    }

    /// Hackathon events.
    #[must_use]
    pub fn hackathons(&self) -> EntityStore {
        self.entities(EntityKind::Hackathons)
    }

    /// Team registrations for hackathons.
    #[must_use]
    pub fn hackathon_registrations(&self) -> EntityStore {
        self.entities(EntityKind::HackathonRegistrations)
    }

    /// User profiles.
    #[must_use]
    pub fn users(&self) -> EntityStore {
        self.entities(EntityKind::Users)
    }

    /// The auth surface of the mock backend, which is the users
    /// collection.
    #[must_use]
    pub fn auth(&self) -> EntityStore {
        self.users()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Latency::simulated())
    }
}

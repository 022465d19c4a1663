//! # gigbase - mock entity backend for a freelance marketplace
//!
//! gigbase simulates the remote data store of a freelance-marketplace
//! application: named collections of schemaless records (projects,
//! proposals, messages, bounties, hackathons, submissions,
//! registrations, users) behind an asynchronous CRUD contract with
//! simulated network latency. State lives only in process memory and is
//! re-seeded identically on every construction.
//!
//! ## Core Concepts
//!
//! - **Record**: one item in a collection, with an immutable `id`, a
//!   `created_date` stamped at creation, and free-form domain fields
//! - **EntityKind**: the fixed set of named collections
//! - **Database**: sole owner of all collections; callers only ever hold
//!   deep copies of its records
//! - **Latency**: the simulated round-trip delay, a policy knob that
//!   tests set to zero
//!
//! ## Usage
//!
//! ```
//! use gigbase::{Client, Criteria, Fields, Latency, Query};
//!
//! # #[tokio::main(flavor = "current_thread")] async fn main() -> gigbase::DbResult<()> {
//! let client = Client::new(Latency::none());
//!
//! // Post a project
//! let project = client
//!     .projects()
//!     .create(
//!         Fields::new()
//!             .with("title", "Canister Integration")
//!             .with("status", "open")
//!             .with("budget_min", 2000i64),
//!     )
//!     .await?;
//!
//! // Query open projects, newest first
//! let open = client
//!     .projects()
//!     .filter(
//!         &Query::new()
//!             .criteria(Criteria::new().eq("status", "open"))
//!             .sort("-created_date")
//!             .limit(10),
//!     )
//!     .await?;
//! assert!(open.iter().any(|p| p.id == project.id));
//! # Ok(()) }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod entity;
pub mod error;
pub mod integrations;
pub mod latency;
pub mod query;
pub mod record;
pub mod store;
pub mod value;

mod seed;

// Re-export primary types at crate root for convenience
pub use client::Client;
pub use entity::EntityKind;
pub use error::{DbError, DbResult};
pub use integrations::{
    EmailReceipt, ExtractedContent, ExtractedData, ExtractionMetadata, FileUpload, GeneratedImage,
    Integrations, LlmResponse,
};
pub use latency::Latency;
pub use query::{Criteria, Query, SortKey, DEFAULT_LIMIT, DEFAULT_SORT};
pub use record::{Fields, Record, RecordId, RESERVED_FIELDS};
pub use store::{Database, EntityStore};
pub use value::Value;

//! Filter criteria, sort keys, and query composition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::Value;

/// Default result cap for [`Query`].
pub const DEFAULT_LIMIT: usize = 50;

/// Default sort key: newest first.
pub const DEFAULT_SORT: &str = "-created_date";

/// Conjunction of exact-match conditions on record fields.
///
/// A record matches when, for every `(field, value)` pair, it has that
/// field and the values are equal. Empty criteria match every record.
///
/// # Examples
///
/// ```
/// use gigbase::Criteria;
///
/// let open_blockchain = Criteria::new()
///     .eq("status", "open")
///     .eq("category", "blockchain");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(BTreeMap<String, Value>);

impl Criteria {
    /// Creates empty criteria (matches all records).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match condition.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns true if there are no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tests a record against every condition (logical AND).
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| record.field(field).as_ref() == Some(expected))
    }
}

impl FromIterator<(String, Value)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A sort field with direction, parsed from the `-` prefix convention:
/// `"-created_date"` sorts descending, `"budget_min"` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Field the sort reads from each record.
    pub field: String,
    /// True for descending order.
    pub descending: bool,
}

impl SortKey {
    /// Parses a sort spec. A leading `-` marks descending order.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        spec.strip_prefix('-').map_or_else(
            || Self {
                field: spec.to_string(),
                descending: false,
            },
            |field| Self {
                field: field.to_string(),
                descending: true,
            },
        )
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::parse(DEFAULT_SORT)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

impl From<&str> for SortKey {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

/// A composed filter call: criteria, sort key, and result cap.
///
/// Defaults mirror the remote API this crate mocks: no criteria, newest
/// first, at most [`DEFAULT_LIMIT`] records.
///
/// # Examples
///
/// ```
/// use gigbase::{Criteria, Query};
///
/// let recent_open = Query::new()
///     .criteria(Criteria::new().eq("status", "open"))
///     .sort("-created_date")
///     .limit(10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Equality conditions, ANDed together.
    pub criteria: Criteria,
    /// Sort field and direction.
    pub sort: SortKey,
    /// Maximum number of records returned.
    pub limit: Option<usize>,
}

impl Query {
    /// A query with default criteria, sort, and limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the criteria.
    #[must_use]
    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Shorthand for adding one exact-match condition.
    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.criteria = self.criteria.eq(field, value);
        self
    }

    /// Replaces the sort key (e.g. `"-created_date"`, `"reward"`).
    #[must_use]
    pub fn sort(mut self, spec: impl Into<SortKey>) -> Self {
        self.sort = spec.into();
        self
    }

    /// Caps the number of returned records.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The effective result cap.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

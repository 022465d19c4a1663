//! Records and record identifiers.
//!
//! A record is one item in a collection: a string `id`, a `created_date`
//! stamped once at creation, and a free-form set of domain fields. The
//! store never enforces a schema on the domain fields.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::Value;

/// Field names the store manages itself. They can be read through
/// [`Record::field`] but can never be written through a payload.
pub const RESERVED_FIELDS: [&str; 2] = ["id", "created_date"];

/// String identifier of a record, unique within its collection.
///
/// Seed data uses short literal ids ("1", "2", ...). Generated ids are
/// 9-character lowercase base-36 tokens drawn from a random UUID; the
/// store additionally checks a fresh token against the collection before
/// use, so token collisions cannot produce duplicate ids.
///
/// # Examples
///
/// ```
/// use gigbase::RecordId;
///
/// let id = RecordId::generate();
/// assert_eq!(id.as_str().len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    const TOKEN_LEN: usize = 9;

    /// Generates a fresh random id token.
    #[must_use]
    pub fn generate() -> Self {
        let mut n = Uuid::new_v4().as_u128();
        let mut token = String::with_capacity(Self::TOKEN_LEN);
        for _ in 0..Self::TOKEN_LEN {
            let digit = u8::try_from(n % 36).unwrap_or(0);
            let ch = if digit < 10 {
                b'0' + digit
            } else {
                b'a' + (digit - 10)
            };
            token.push(char::from(ch));
            n /= 36;
        }
        Self(token)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Ordered mapping from field name to [`Value`].
///
/// `Fields` is the payload type of `create` and `update` as well as the
/// body of a stored record.
///
/// # Examples
///
/// ```
/// use gigbase::Fields;
///
/// let payload = Fields::new()
///     .with("title", "Smart Contract Audit")
///     .with("status", "open")
///     .with("budget_min", 5000i64);
/// assert_eq!(payload.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes a field, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops the store-managed field names from a caller payload.
    pub(crate) fn strip_reserved(&mut self) {
        for name in RESERVED_FIELDS {
            self.0.remove(name);
        }
    }
}

impl From<BTreeMap<String, Value>> for Fields {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One item in a collection.
///
/// The serialized form is flat: `id` and `created_date` sit alongside the
/// domain fields, matching the JSON documents of the remote store this
/// crate simulates.
///
/// # Examples
///
/// ```
/// use gigbase::{Fields, Record, RecordId};
/// use chrono::Utc;
///
/// let record = Record::new(
///     RecordId::from("1"),
///     Utc::now(),
///     Fields::new().with("title", "Fix Authentication Bug"),
/// );
/// assert_eq!(record.field("title").unwrap().as_str(), Some("Fix Authentication Bug"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, immutable after creation.
    pub id: RecordId,

    /// Creation timestamp, set once and never modified.
    pub created_date: DateTime<Utc>,

    #[serde(flatten)]
    fields: Fields,
}

impl Record {
    /// Assembles a record. Reserved field names in `fields` are dropped;
    /// identity always comes from the dedicated parameters.
    #[must_use]
    pub fn new(id: RecordId, created_date: DateTime<Utc>, mut fields: Fields) -> Self {
        fields.strip_reserved();
        Self {
            id,
            created_date,
            fields,
        }
    }

    /// Uniform field access used by filtering and sorting. The reserved
    /// names resolve to the identity columns; everything else resolves to
    /// the domain fields.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.to_string())),
            "created_date" => Some(Value::Timestamp(self.created_date)),
            _ => self.fields.get(name).cloned(),
        }
    }

    /// Sets a single domain field. Reserved names are ignored.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if RESERVED_FIELDS.contains(&name.as_str()) {
            return;
        }
        self.fields.insert(name, value);
    }

    /// Merges a payload over this record field-by-field. Fields absent
    /// from `payload` are preserved; `id` and `created_date` can never be
    /// overwritten, even if the payload names them.
    pub fn merge(&mut self, payload: Fields) {
        for (name, value) in payload.0 {
            if RESERVED_FIELDS.contains(&name.as_str()) {
                continue;
            }
            self.fields.insert(name, value);
        }
    }

    /// The domain fields (identity columns excluded).
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }
}

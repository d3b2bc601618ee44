//! Opaque item keys for addressing items within a collection.

use std::fmt;
use std::sync::Arc;

/// An opaque identifier for an item within a collection.
///
/// Keys are either text or numeric and must be unique within a collection's
/// flat key space. They are cheap to clone (text keys share their backing
/// allocation) and are treated as pure identity by every controller: the
/// engine never inspects or validates key contents.
///
/// # Example
///
/// ```
/// use horizon_interact::ItemKey;
///
/// let by_name = ItemKey::from("save");
/// let by_index = ItemKey::from(3_u64);
/// assert_ne!(by_name, by_index);
/// assert_eq!(by_name, ItemKey::from("save"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// A textual key.
    Text(Arc<str>),
    /// A numeric key.
    Index(u64),
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        Self::Text(Arc::from(value.as_str()))
    }
}

impl From<u64> for ItemKey {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for ItemKey {
    fn from(value: usize) -> Self {
        Self::Index(value as u64)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl fmt::Debug for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "ItemKey({text:?})"),
            Self::Index(index) => write!(f, "ItemKey({index})"),
        }
    }
}

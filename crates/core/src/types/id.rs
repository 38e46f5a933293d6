//! Newtype ID for type-safe product references.
//!
//! Product ids are caller-supplied opaque strings. The cart never assigns,
//! parses, or deduplicates them; the newtype only prevents mixing them up
//! with other string values.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A caller-supplied product identifier.
///
/// Ids are opaque: any non-structured string is accepted, and two line
/// items may share an id. Equality is plain string equality.
///
/// # Example
///
/// ```
/// use cartlab_core::ProductId;
///
/// let id = ProductId::from("sku-1042");
/// assert_eq!(id.as_str(), "sku-1042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Non-empty error lists
//!
//! Every failure path in a pipeline carries at least one error. [`NonEmpty`]
//! makes that a property of the type instead of a convention: error factories
//! return it, the failing [`Outcome`](crate::Outcome) variants store it, and a
//! failed [`Verdict`](crate::Verdict) hands it back to the caller.
//!
//! # Examples
//!
//! ```rust,ignore
//! use parz_pipeline::{NonEmpty, nonempty};
//!
//! let errors = nonempty!["too short", "not numeric"];
//! assert_eq!(errors.len(), 2);
//! assert_eq!(*errors.first(), "too short");
//!
//! assert!(NonEmpty::<&str>::from_vec(Vec::new()).is_none());
//! ```

use std::ops::Deref;

// ============================================================================
// ERROR
// ============================================================================

/// Returned when an empty collection is converted into a [`NonEmpty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("collection must contain at least one element")]
pub struct EmptyError;

// ============================================================================
// NON-EMPTY LIST
// ============================================================================

/// An ordered list holding at least one element.
///
/// Dereferences to a slice, so `len`, `iter`, indexing and the rest of the
/// slice API are available directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<E>(Vec<E>);

impl<E> NonEmpty<E> {
    /// Creates a list with a single element.
    pub fn new(head: E) -> Self {
        Self(vec![head])
    }

    /// Converts a vector, returning `None` when it is empty.
    pub fn from_vec(items: Vec<E>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    /// Returns the first element.
    pub fn first(&self) -> &E {
        &self.0[0]
    }

    /// Returns the last element.
    pub fn last(&self) -> &E {
        &self.0[self.0.len() - 1]
    }

    /// Appends an element.
    pub fn push(&mut self, item: E) {
        self.0.push(item);
    }

    /// Appends an element, builder style. Used by [`nonempty!`](crate::nonempty!).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tail(mut self, item: E) -> Self {
        self.0.push(item);
        self
    }

    /// Appends every element of `other`, keeping order.
    pub fn extend(&mut self, other: NonEmpty<E>) {
        self.0.extend(other.0);
    }

    /// Puts `prefix` in front of this list.
    ///
    /// The result is `prefix ++ self`.
    pub fn with_prefix(self, prefix: Vec<E>) -> Self {
        let mut items = prefix;
        items.extend(self.0);
        Self(items)
    }

    /// Maps every element, preserving order.
    pub fn map<F, U>(self, f: F) -> NonEmpty<U>
    where
        F: FnMut(E) -> U,
    {
        NonEmpty(self.0.into_iter().map(f).collect())
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Consumes the list and returns the underlying vector.
    pub fn into_vec(self) -> Vec<E> {
        self.0
    }
}

impl<E> Deref for NonEmpty<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.0
    }
}

impl<E> AsRef<[E]> for NonEmpty<E> {
    fn as_ref(&self) -> &[E] {
        &self.0
    }
}

impl<E> TryFrom<Vec<E>> for NonEmpty<E> {
    type Error = EmptyError;

    fn try_from(items: Vec<E>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyError)
    }
}

impl<E> From<NonEmpty<E>> for Vec<E> {
    fn from(list: NonEmpty<E>) -> Self {
        list.0
    }
}

impl<E> IntoIterator for NonEmpty<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a NonEmpty<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// SERDE
// ============================================================================

// Serialized as a plain sequence; an empty sequence is rejected on the way in.
#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for NonEmpty<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<E>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================

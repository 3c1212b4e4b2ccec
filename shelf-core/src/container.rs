use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

use itertools::Itertools;
use tracing::trace;

mod iter;

pub use iter::IntoIter;

/// An immutable, ordered collection of elements.
///
/// Once a container is created its elements can not change. Operations that
/// look like they modify a container return a new one instead, and when an
/// operation does not have to change anything the container it was called on
/// is returned as-is (sharing the same storage, see [`Container::ptr_eq`]).
///
/// Cloning a container is cheap: clones share the underlying storage.
pub struct Container<T> {
    elements: Arc<[T]>,
}

impl<T> Container<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            elements: Arc::from(Vec::new()),
        }
    }

    /// Creates a container holding exactly one element.
    pub fn single(element: T) -> Self {
        Self {
            elements: Arc::from(vec![element]),
        }
    }

    /// Creates a container holding a copy of the given elements.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            elements: Arc::from(elements),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether this container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first element, or `None` if this container is empty.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The first element, or `default` if this container is empty.
    pub fn first_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.first().unwrap_or(default)
    }

    /// The elements, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Borrowing iterator in insertion order. Each call starts from the
    /// first element.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Whether both containers share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// The predicate is called exactly once per element, in order, and the
    /// kept elements stay in their original relative order. When every
    /// element is kept the returned container shares storage with `self`;
    /// when none is kept a new empty container is returned.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let kept: Vec<&T> = self.elements.iter().filter(|e| predicate(*e)).collect();
        trace!(total = self.len(), kept = kept.len(), "Filtered Container");

        if kept.len() == self.len() {
            return self.clone();
        }

        if kept.is_empty() {
            return Self::new();
        }

        kept.into_iter().cloned().collect()
    }

    /// Applies `f` to every element, in order, collecting the results.
    pub fn map<U, F>(&self, f: F) -> Container<U>
    where
        F: FnMut(&T) -> U,
    {
        self.elements.iter().map(f).collect()
    }
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Display> Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: Hash> Hash for Container<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements[..].hash(state)
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            elements: Arc::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Container<T> {
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Container<T> {
    fn from(value: [T; N]) -> Self {
        Self::from(Vec::from(value))
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Container<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Container<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

use std::{iter::FusedIterator, sync::Arc};

/// An owning iterator over a [`Container`](super::Container).
///
/// Keeps the shared storage alive and yields clones of the elements, so the
/// container it came from (and any other handle to the same storage) is left
/// untouched.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    elements: Arc<[T]>,
    index: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(elements: Arc<[T]>) -> Self {
        Self { elements, index: 0 }
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.index)?.clone();
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

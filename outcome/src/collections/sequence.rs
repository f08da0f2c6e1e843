//! Sequence-shaped payloads.

use crate::Outcome;

/// Element-level helpers for `Outcome<Vec<E>>`.
pub trait OutcomeSeqExt<E> {
    /// The first element, or `Success(None)` for an empty sequence.
    fn first(self) -> Outcome<Option<E>>;

    /// The last element, or `Success(None)` for an empty sequence.
    fn last(self) -> Outcome<Option<E>>;

    /// The element count.
    fn length(self) -> Outcome<usize>;

    /// Whether the sequence has no elements.
    fn is_empty(self) -> Outcome<bool>;

    /// Whether the sequence has at least one element.
    fn is_not_empty(self) -> Outcome<bool>;

    /// Keeps the elements matching `predicate`, preserving order.
    fn filter<P>(self, predicate: P) -> Outcome<Vec<E>>
    where
        P: FnMut(&E) -> bool;

    /// Maps every element, preserving order and length.
    fn map_each<U, F>(self, op: F) -> Outcome<Vec<U>>
    where
        F: FnMut(E) -> U;
}

impl<E> OutcomeSeqExt<E> for Outcome<Vec<E>> {
    fn first(self) -> Outcome<Option<E>> {
        self.map(|items| items.into_iter().next())
    }

    fn last(self) -> Outcome<Option<E>> {
        self.map(|mut items| items.pop())
    }

    fn length(self) -> Outcome<usize> {
        self.map(|items| items.len())
    }

    fn is_empty(self) -> Outcome<bool> {
        self.map(|items| items.is_empty())
    }

    fn is_not_empty(self) -> Outcome<bool> {
        self.map(|items| !items.is_empty())
    }

    fn filter<P>(self, mut predicate: P) -> Outcome<Vec<E>>
    where
        P: FnMut(&E) -> bool,
    {
        self.map(|mut items| {
            items.retain(|item| predicate(item));
            items
        })
    }

    fn map_each<U, F>(self, op: F) -> Outcome<Vec<U>>
    where
        F: FnMut(E) -> U,
    {
        self.map(|items| items.into_iter().map(op).collect())
    }
}

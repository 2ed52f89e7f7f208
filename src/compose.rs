use crate::adapters::{IntoLimit, Map, Select, Take};
use crate::cursor::{Cursor, Iter};
use tracing::trace;

/// The chainable face shared by every pipeline node.
///
/// Chain-building methods borrow `self` as the upstream of the new node, so a
/// chain can be extended to any depth and each link must outlive the links
/// built on top of it. Terminal methods start a fresh cursor chain on every
/// call and never cache anything between calls.
pub trait Compose {
    type Item;
    type Cursor<'c>: Cursor<Item = Self::Item>
    where
        Self: 'c;

    /// Starts a new traversal, positioned on the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        trace!("starting pipeline traversal");
        Iter::new(self.cursor())
    }

    /// Applies `f` lazily, once per dereference of the resulting cursor.
    fn map<O, F>(&self, f: F) -> Map<'_, Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> O,
    {
        Map::new(self, f)
    }

    fn select<P>(&self, predicate: P) -> Select<'_, Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Select::new(self, predicate)
    }

    /// Yields at most `n` elements. Negative bounds yield nothing.
    fn take<N>(&self, n: N) -> Take<'_, Self>
    where
        Self: Sized,
        N: IntoLimit,
    {
        Take::new(self, n.into_limit())
    }

    fn size(&self) -> usize {
        let mut cursor = self.cursor();
        let mut total = 0;
        while !cursor.at_end() {
            total += 1;
            cursor.advance();
        }
        trace!(total, "pipeline size computed");
        total
    }

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        for item in self.iter() {
            f(item);
        }
    }

    /// Like [`each`](Compose::each), with a zero-based index of the yielded
    /// element. Elements dropped upstream do not consume indices.
    fn each_with_index<F>(&self, mut f: F)
    where
        F: FnMut(usize, Self::Item),
    {
        for (index, item) in self.iter().enumerate() {
            f(index, item);
        }
    }

    fn fold<V, F>(&self, init: V, f: F) -> V
    where
        F: FnMut(V, Self::Item) -> V,
    {
        self.iter().fold(init, f)
    }

    /// Calls `f` on each element until it returns an error, which is handed
    /// back unchanged.
    fn try_each<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.iter().try_for_each(f)
    }

    fn try_fold<V, E, F>(&self, init: V, f: F) -> Result<V, E>
    where
        F: FnMut(V, Self::Item) -> Result<V, E>,
    {
        self.iter().try_fold(init, f)
    }

    /// Exposes the pipeline as an async stream. Elements are still pulled one
    /// at a time, in order, on each poll.
    #[cfg(feature = "stream")]
    fn stream(&self) -> futures_util::stream::Iter<Iter<Self::Cursor<'_>>> {
        futures_util::stream::iter(self.iter())
    }
}

use crate::compose::Compose;
use crate::cursor::{Cursor, Iter};

/// Head of a pipeline: a borrowed sequence exposed unchanged.
///
/// Any `S` whose shared reference is [`IntoIterator`] works, so vectors,
/// arrays, slices, maps and sets can all be composed over.
pub struct Source<'a, S: ?Sized> {
    seq: &'a S,
}

impl<'a, S: ?Sized> Source<'a, S> {
    pub fn new(seq: &'a S) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &'a S {
        self.seq
    }
}

impl<'a, S> Source<'a, S>
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::IntoIter: ExactSizeIterator,
{
    /// Length of the underlying sequence, without traversing it.
    pub fn len(&self) -> usize {
        IntoIterator::into_iter(self.seq).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ?Sized> Clone for Source<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Source<'_, S> {}

impl<'a, S> Compose for Source<'a, S>
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: Clone,
{
    type Item = <&'a S as IntoIterator>::Item;
    type Cursor<'c>
        = SourceCursor<<&'a S as IntoIterator>::IntoIter>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        SourceCursor::new(IntoIterator::into_iter(self.seq))
    }
}

impl<'n, 'a, S> IntoIterator for &'n Source<'a, S>
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: Clone,
{
    type Item = <&'a S as IntoIterator>::Item;
    type IntoIter = Iter<SourceCursor<<&'a S as IntoIterator>::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        Compose::iter(self)
    }
}

/// Cursor over the sequence's native iterator.
///
/// Holds one pre-fetched element so `current` never has to move the
/// underlying iterator. Once the iterator is drained it is not polled again.
pub struct SourceCursor<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

impl<I: Iterator> SourceCursor<I> {
    fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

impl<I> Cursor for SourceCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn at_end(&self) -> bool {
        self.head.is_none()
    }

    fn current(&self) -> Option<Self::Item> {
        self.head.clone()
    }

    fn advance(&mut self) {
        if self.head.is_some() {
            self.head = self.iter.next();
        }
    }
}

/// Starts a pipeline over `seq`.
pub fn compose<S: ?Sized>(seq: &S) -> Source<'_, S> {
    Source::new(seq)
}

/// Same as [`compose`].
pub fn lazy<S: ?Sized>(seq: &S) -> Source<'_, S> {
    Source::new(seq)
}

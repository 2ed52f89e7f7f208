use std::iter::FusedIterator;

/// Position within one traversal of a pipeline stage.
///
/// A cursor handed out by [`Compose::cursor`](crate::Compose::cursor) is already
/// positioned on the first element its stage yields, or at end when there is
/// none. Cursors only move forward; starting over means asking the node for a
/// new one.
pub trait Cursor {
    type Item;

    fn at_end(&self) -> bool;

    /// Element under the cursor, `None` once the cursor is at end.
    fn current(&self) -> Option<Self::Item>;

    /// Moves to the next element. Advancing an ended cursor does nothing.
    fn advance(&mut self);
}

/// Drives a cursor as a standard [`Iterator`].
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Iter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.current()?;
        self.cursor.advance();
        Some(item)
    }
}

impl<C> FusedIterator for Iter<C> where C: Cursor {}

use crate::compose::Compose;
use crate::cursor::{Cursor, Iter};

/// Filter stage built by [`Compose::select`].
pub struct Select<'u, U, P> {
    upstream: &'u U,
    predicate: P,
}

impl<'u, U, P> Select<'u, U, P> {
    pub(crate) fn new(upstream: &'u U, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<'u, U, P> Compose for Select<'u, U, P>
where
    U: Compose,
    P: Fn(&U::Item) -> bool,
{
    type Item = U::Item;
    type Cursor<'c>
        = SelectCursor<'c, U::Cursor<'u>, P>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectCursor::new(self.upstream.cursor(), &self.predicate)
    }
}

impl<'n, 'u, U, P> IntoIterator for &'n Select<'u, U, P>
where
    U: Compose,
    P: Fn(&U::Item) -> bool,
{
    type Item = U::Item;
    type IntoIter = Iter<SelectCursor<'n, U::Cursor<'u>, P>>;

    fn into_iter(self) -> Self::IntoIter {
        Compose::iter(self)
    }
}

/// Always rests on an element that passes the predicate, or at end.
pub struct SelectCursor<'c, C, P> {
    upstream: C,
    predicate: &'c P,
}

impl<'c, C, P> SelectCursor<'c, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn new(upstream: C, predicate: &'c P) -> Self {
        let mut cursor = Self { upstream, predicate };
        cursor.skip_rejected();
        cursor
    }

    fn skip_rejected(&mut self) {
        while let Some(item) = self.upstream.current() {
            if (self.predicate)(&item) {
                break;
            }
            self.upstream.advance();
        }
    }
}

impl<C, P> Cursor for SelectCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn at_end(&self) -> bool {
        self.upstream.at_end()
    }

    fn current(&self) -> Option<Self::Item> {
        self.upstream.current()
    }

    fn advance(&mut self) {
        if self.upstream.at_end() {
            return;
        }
        self.upstream.advance();
        self.skip_rejected();
    }
}

use crate::compose::Compose;
use crate::cursor::{Cursor, Iter};

/// Transform stage built by [`Compose::map`].
pub struct Map<'u, U, F> {
    upstream: &'u U,
    f: F,
}

impl<'u, U, F> Map<'u, U, F> {
    pub(crate) fn new(upstream: &'u U, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<'u, U, F, O> Compose for Map<'u, U, F>
where
    U: Compose,
    F: Fn(U::Item) -> O,
{
    type Item = O;
    type Cursor<'c>
        = MapCursor<'c, U::Cursor<'u>, F>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.upstream.cursor(),
            f: &self.f,
        }
    }
}

impl<'n, 'u, U, F, O> IntoIterator for &'n Map<'u, U, F>
where
    U: Compose,
    F: Fn(U::Item) -> O,
{
    type Item = O;
    type IntoIter = Iter<MapCursor<'n, U::Cursor<'u>, F>>;

    fn into_iter(self) -> Self::IntoIter {
        Compose::iter(self)
    }
}

/// Applies the stage function on every `current` call; results are never
/// cached, so reading the same position twice runs the function twice.
pub struct MapCursor<'c, C, F> {
    upstream: C,
    f: &'c F,
}

impl<C, F, O> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> O,
{
    type Item = O;

    fn at_end(&self) -> bool {
        self.upstream.at_end()
    }

    fn current(&self) -> Option<O> {
        self.upstream.current().map(self.f)
    }

    fn advance(&mut self) {
        self.upstream.advance();
    }
}

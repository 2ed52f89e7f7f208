use crate::compose::Compose;
use crate::cursor::{Cursor, Iter};

/// Integer types accepted as a [`Compose::take`] bound.
///
/// Negative bounds become zero. Bounds that do not fit in `usize` saturate.
pub trait IntoLimit {
    fn into_limit(self) -> usize;
}

macro_rules! impl_into_limit_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoLimit for $t {
                fn into_limit(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

macro_rules! impl_into_limit_signed {
    ($($t:ty),*) => {
        $(
            impl IntoLimit for $t {
                fn into_limit(self) -> usize {
                    if self <= 0 {
                        0
                    } else {
                        usize::try_from(self).unwrap_or(usize::MAX)
                    }
                }
            }
        )*
    };
}

impl_into_limit_unsigned!(u8, u16, u32, u64, u128, usize);
impl_into_limit_signed!(i8, i16, i32, i64, i128, isize);

/// Limit stage built by [`Compose::take`].
pub struct Take<'u, U> {
    upstream: &'u U,
    limit: usize,
}

impl<'u, U> Take<'u, U> {
    pub(crate) fn new(upstream: &'u U, limit: usize) -> Self {
        Self { upstream, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<'u, U> Compose for Take<'u, U>
where
    U: Compose,
{
    type Item = U::Item;
    type Cursor<'c>
        = TakeCursor<U::Cursor<'u>>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            upstream: self.upstream.cursor(),
            remaining: self.limit,
        }
    }
}

impl<'n, 'u, U> IntoIterator for &'n Take<'u, U>
where
    U: Compose,
{
    type Item = U::Item;
    type IntoIter = Iter<TakeCursor<U::Cursor<'u>>>;

    fn into_iter(self) -> Self::IntoIter {
        Compose::iter(self)
    }
}

/// Ends as soon as `remaining` hits zero, without asking upstream for the
/// element after the last one it yields.
///
/// End is decided by `remaining` alone when the bound is exhausted; cursors of
/// different `Take` nodes are not meant to be compared with each other.
pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<C> Cursor for TakeCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn at_end(&self) -> bool {
        self.remaining == 0 || self.upstream.at_end()
    }

    fn current(&self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        if self.at_end() {
            return;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            self.upstream.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IntoLimit;
    use crate::{compose, Compose, Cursor};
    use std::cell::RefCell;

    #[test]
    fn test_take_zero_yields_nothing() {
        let values = vec![1, 2, 3];
        let source = compose(&values);
        let none = source.take(0);
        let mut calls = 0;
        none.each(|_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(none.size(), 0);
        assert!(none.cursor().at_end());
    }

    #[test]
    fn test_take_more_than_available() {
        let values = vec![1, 2, 3];
        let source = compose(&values);
        assert_eq!(source.take(10).size(), 3);
        assert_eq!(source.take(3).size(), 3);
        assert_eq!(source.take(2).size(), 2);
    }

    #[test]
    fn test_negative_take_is_empty() {
        let values = vec![1, 2, 3];
        let source = compose(&values);
        assert_eq!(source.take(-1).size(), 0);
        assert_eq!(source.take(i64::MIN).size(), 0);
    }

    #[test]
    fn test_into_limit_saturates() {
        assert_eq!(u128::MAX.into_limit(), usize::MAX);
        assert_eq!(i128::MAX.into_limit(), usize::MAX);
        assert_eq!((-5i8).into_limit(), 0);
        assert_eq!(7u8.into_limit(), 7);
    }

    #[test]
    fn test_take_stops_pulling_upstream() {
        let values = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let inspected = RefCell::new(Vec::new());
        let source = compose(&values);
        let evens = source.select(|x| {
            inspected.borrow_mut().push(**x);
            **x % 2 == 0
        });
        let first_two = evens.take(2);
        let mut seen = Vec::new();
        first_two.each(|x| seen.push(*x));
        assert_eq!(seen, vec![2, 4]);
        assert_eq!(*inspected.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_take_cursor_counts_down() {
        let values = vec![1, 2, 3, 4];
        let source = compose(&values);
        let limited = source.take(2);
        assert_eq!(limited.limit(), 2);
        let mut cursor = limited.cursor();
        assert_eq!(cursor.remaining(), 2);
        cursor.advance();
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.current(), Some(&2));
        cursor.advance();
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_take_ends_with_short_upstream() {
        let values = vec![1];
        let source = compose(&values);
        let limited = source.take(5);
        let mut cursor = limited.cursor();
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), 4);
    }
}

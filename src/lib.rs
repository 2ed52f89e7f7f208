//! Lazy, chainable sequence pipelines.
//!
//! A pipeline starts from a borrowed sequence with [`compose`] and grows one
//! stage at a time with [`Compose::map`], [`Compose::select`] and
//! [`Compose::take`]. Nothing runs until a terminal operation (`size`, `each`,
//! `fold`, iteration) pulls elements through the whole chain in a single pass.
//!
//! Every stage borrows the one before it, so each link needs a name when the
//! pipeline is kept around:
//!
//! ```
//! use rust_compose::{compose, Compose};
//!
//! let values = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let source = compose(&values);
//! let squares = source.map(|x| x * x);
//! let evens = squares.select(|x| x % 2 == 0);
//! let first = evens.take(3);
//!
//! assert_eq!(first.size(), 3);
//! assert_eq!(first.fold(0, |acc, x| acc + x), 56);
//! ```

mod adapters;
mod compose;
mod cursor;
mod source;

pub use adapters::{IntoLimit, Map, MapCursor, Select, SelectCursor, Take, TakeCursor};
pub use compose::Compose;
pub use cursor::{Cursor, Iter};
pub use source::{compose, lazy, Source, SourceCursor};

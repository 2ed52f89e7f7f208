mod map;
mod select;
mod take;

pub use map::{Map, MapCursor};
pub use select::{Select, SelectCursor};
pub use take::{IntoLimit, Take, TakeCursor};

/// Bidirectional position tracking over a slice.
///
/// This module provides the [`cursor::Cursor`] type used by the grammar
/// matcher to walk the token stream. Unlike an iterator, a cursor can look at
/// and move to both neighbours of its current element, and it can be
/// repositioned explicitly.
///
/// All fallible operations return a `Result`: constructing a cursor over an
/// empty slice fails, and so does seeking outside the slice.
pub mod cursor;

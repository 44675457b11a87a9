/// Errors raised when a [`Cursor`] is built or positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor was constructed over an empty slice.
    Empty,
    /// A seek targeted an index outside the slice.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of elements in the slice.
        len:   usize,
    },
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Cannot create a cursor over an empty sequence."),
            Self::OutOfBounds { index, len } => {
                write!(f, "Cursor position {index} is out of bounds for a sequence of length {len}.")
            },
        }
    }
}

impl std::error::Error for CursorError {}

/// A bidirectional view over a non-empty slice.
///
/// The cursor always points at a valid element. Moving past either end is
/// refused rather than clamped: [`Cursor::move_next`] and
/// [`Cursor::move_previous`] report whether they moved.
///
/// # Example
/// ```
/// use funk::util::cursor::Cursor;
///
/// let items = [1, 2, 3];
/// let mut cursor = Cursor::new(&items).unwrap();
///
/// assert_eq!(*cursor.current(), 1);
/// assert!(!cursor.has_previous());
/// assert!(cursor.move_next());
/// assert_eq!(cursor.peek_previous(), Some(&1));
/// assert_eq!(cursor.peek_next(), Some(&3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor positioned at the first element.
    ///
    /// # Errors
    /// Returns [`CursorError::Empty`] if `items` is empty.
    pub const fn new(items: &'a [T]) -> Result<Self, CursorError> {
        if items.is_empty() {
            return Err(CursorError::Empty);
        }
        Ok(Self { items, index: 0 })
    }

    /// The element under the cursor.
    #[must_use]
    pub const fn current(&self) -> &'a T {
        &self.items[self.index]
    }

    /// The index of the element under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Number of elements from the current one to the end, inclusive.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.items.len() - self.index
    }

    /// The elements from `start` up to and including the current one.
    ///
    /// Returns an empty slice if `start` lies after the current position.
    #[must_use]
    pub fn span_from(&self, start: usize) -> &'a [T] {
        self.items.get(start..=self.index).unwrap_or(&[])
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn peek_next(&self) -> Option<&'a T> {
        self.items.get(self.index + 1)
    }

    #[must_use]
    pub fn peek_previous(&self) -> Option<&'a T> {
        self.index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Advances by one element. Returns `false` and stays put at the end.
    pub const fn move_next(&mut self) -> bool {
        let available = self.has_next();
        if available {
            self.index += 1;
        }
        available
    }

    /// Steps back by one element. Returns `false` and stays put at the start.
    pub const fn move_previous(&mut self) -> bool {
        let available = self.has_previous();
        if available {
            self.index -= 1;
        }
        available
    }

    /// Moves the cursor to an absolute index.
    ///
    /// # Errors
    /// Returns [`CursorError::OutOfBounds`] if `index` is not a valid index.
    pub const fn seek(&mut self, index: usize) -> Result<(), CursorError> {
        if index >= self.items.len() {
            return Err(CursorError::OutOfBounds { index,
                                                  len: self.items.len() });
        }
        self.index = index;
        Ok(())
    }
}

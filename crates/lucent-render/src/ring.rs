//! Write cursor over a fixed-capacity GPU buffer.

/// The outcome of a [`RingCursor::reserve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    /// Element offset to write at.
    pub offset: u32,
    /// The buffer must be invalidated before writing: the cursor wrapped,
    /// so earlier contents can no longer be preserved.
    pub needs_discard: bool,
}

/// A persistent write cursor over a GPU buffer of fixed element capacity.
///
/// Writes append after the cursor while they fit (leaving earlier
/// regions untouched for draws still in flight), and wrap back to zero
/// with a discard once the tail cannot hold a reservation. The
/// append-or-discard decision lives here so it stays a pure, testable
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingCursor {
    offset: u32,
    capacity: u32,
}

impl RingCursor {
    pub fn new(capacity: u32) -> Self {
        Self {
            offset: 0,
            capacity,
        }
    }

    /// Reserve `count` elements, advancing the cursor.
    ///
    /// `count` must not exceed the buffer capacity; callers bound their
    /// batches to it.
    pub fn reserve(&mut self, count: u32) -> Reservation {
        debug_assert!(count <= self.capacity);

        if self.capacity < self.offset + count {
            self.offset = count;
            Reservation {
                offset: 0,
                needs_discard: true,
            }
        } else {
            let offset = self.offset;
            self.offset += count;
            Reservation {
                offset,
                needs_discard: false,
            }
        }
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

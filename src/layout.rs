#![cfg(feature = "layout")]
//! Physical-layout dump of a [`CircularDeque`] for interactive debugging.
//!
//! The dump shows every slot of the buffer, live or not, so wrap-around and
//! resize behaviour can be eyeballed:
//!
//! ```text
//! size = 3 capacity = 4
//!   0  1  2  3 indices
//!   5  .  3  4 data
//!      e  b
//! ```
//!
//! Nothing here is part of the deque's functional contract.

use core::fmt;

use crate::CircularDeque;

/// Column width of every slot in the dump.
const WIDTH: usize = 3;

/// Borrowed view that renders a deque's physical buffer via `Display`.
pub struct Layout<'a, T> {
    deque: &'a CircularDeque<T>,
}

impl<T> CircularDeque<T> {
    /// Returns a `Display`able dump of the physical buffer.
    pub fn layout(&self) -> Layout<'_, T> {
        Layout { deque: self }
    }

    /// Emits [`layout`](Self::layout) through `log::debug!`.
    pub fn log_layout(&self)
    where
        T: fmt::Display,
    {
        log::debug!("deque layout:\n{}", self.layout());
    }

    /// Whether physical slot `idx` currently holds a live element.
    fn is_live_slot(&self, idx: usize) -> bool {
        let (b, e) = (self.begin, self.end);
        (b <= idx && idx < e) || (e < b && (b <= idx || idx < e)) || (b == e && self.len > 0)
    }
}

impl<T: fmt::Display> fmt::Display for Layout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.deque;
        writeln!(f, "size = {} capacity = {}", d.len, d.capacity)?;

        if !d.slots.is_allocated() {
            return writeln!(f, "buffer = <unallocated>");
        }

        for i in 0..d.capacity {
            write!(f, "{:>width$}", i, width = WIDTH)?;
        }
        writeln!(f, " indices")?;

        for i in 0..d.capacity {
            if d.is_live_slot(i) {
                write!(f, "{:>width$}", d.slots[i], width = WIDTH)?;
            } else {
                write!(f, "{:>width$}", ".", width = WIDTH)?;
            }
        }
        writeln!(f, " data")?;

        let (first, first_at, second, gap) = if d.end < d.begin {
            ('e', d.end + 1, 'b', d.begin - d.end)
        } else {
            ('b', d.begin + 1, 'e', d.end - d.begin)
        };
        writeln!(
            f,
            "{:>w1$}{:>w2$}",
            first,
            second,
            w1 = WIDTH * first_at,
            w2 = WIDTH * gap
        )
    }
}

impl<T> fmt::Debug for Layout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("begin", &self.deque.begin)
            .field("end", &self.deque.end)
            .field("len", &self.deque.len)
            .field("capacity", &self.deque.capacity)
            .finish()
    }
}

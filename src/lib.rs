//! # Circular Deque
//!
//! A double-ended queue that keeps its elements in one heap-allocated circular
//! buffer, growing and shrinking that buffer as elements come and go.
//!
//! ## Key Features
//!
//! * **Amortized O(1) at both ends:** `push_back`, `push_front`, `pop_back` and
//!   `pop_front` never shift elements; the ring wraps instead.
//! * **O(1) random access:** logical position `i` is physical slot
//!   `(begin + i) % capacity`.
//! * **Grow and shrink:** capacity doubles when a push finds the buffer full and
//!   halves when a pop finds it a quarter full (checked before removal).
//! * **Value semantics:** clones are deep and trimmed to the live length;
//!   assignment is copy-and-swap.
//! * **Concatenation and reversal:** `+=`, `+`, in-place `reverse()` and the
//!   reversed-copy operator `!`.
//!
//! ## Capacity policy
//!
//! | Event | Condition (checked before the operation) | New capacity |
//! |-------|------------------------------------------|--------------|
//! | push  | `len == capacity`                        | `max(1, 2 * capacity)` |
//! | pop   | `len == capacity / 4`                    | `capacity / 2` |
//! | `+=`  | `len + other.len > capacity`             | `len + other.len` |
//!
//! ## Examples
//!
//! ```rust
//! use circular_deque::CircularDeque;
//!
//! let mut d = CircularDeque::new();
//! d.push_back(2);
//! d.push_back(3);
//! d.push_front(1);
//!
//! assert_eq!(d.len(), 3);
//! assert_eq!(d.capacity(), 4);
//! assert_eq!(d[0], 1);
//! assert_eq!(d.to_string(), "1 2 3 ");
//!
//! assert_eq!(d.pop_back(), 3);
//! assert_eq!(d.pop_front(), 1);
//! ```
//!
//! ### Concatenation and reversal
//!
//! ```rust
//! use circular_deque::CircularDeque;
//!
//! let mut a = CircularDeque::from_slice(&[1, 2]);
//! let b = CircularDeque::from_slice(&[3, 4]);
//!
//! let joined = &a + &b;
//! assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
//!
//! a += &b;
//! assert_eq!(a, joined);
//!
//! let backwards = !&a;
//! assert_eq!(backwards.to_vec(), vec![4, 3, 2, 1]);
//! a.reverse().reverse();
//! assert_eq!(a, joined);
//! ```
//!
//! ### Checked access
//!
//! ```rust
//! use circular_deque::{CircularDeque, DequeError};
//!
//! let mut d: CircularDeque = CircularDeque::new();
//! assert_eq!(d.try_pop_front(), Err(DequeError::Empty));
//! assert_eq!(d.get(0), None);
//! ```

// --- Module Declarations ---

mod buffer;
pub mod deque;
pub mod error;
#[cfg(feature = "layout")]
pub mod layout;

// --- Re-exports ---

pub use deque::{AnyDeque, CircularDeque};
pub use error::DequeError;
#[cfg(feature = "layout")]
pub use layout::Layout;

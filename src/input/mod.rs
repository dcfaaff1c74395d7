//! Key input: modifier state, key events and the keyboard itself.

pub mod clock;
pub mod keyboard;

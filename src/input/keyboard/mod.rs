mod builder;
mod event;
mod keyboard;
mod state;

pub use builder::*;
pub use event::*;
pub use keyboard::*;
pub use state::{ModifierFlags, ModifierMode};

//! Locale key layouts: which code points each key-slot produces.

mod definition;
mod key;
mod locale;
mod registry;
mod slot;
mod tables;

pub use definition::*;
pub use key::*;
pub use locale::*;
pub use registry::*;
pub use slot::*;

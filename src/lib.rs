//! Core of a locale-aware on-screen keyboard.
//!
//! - [`layout`] maps each key position to the characters it produces in each
//!   supported language.
//! - [`input::keyboard`] tracks Shift-Lock, Caps Lock and AltGr and turns key
//!   presses into text.
//! - [`inject`] defines where that text goes.
//! - [`settings`] persists user preferences.

pub mod errors;
pub mod inject;
pub mod input;
pub mod layout;
pub mod settings;

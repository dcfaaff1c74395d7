//! Key events fed to a [`VirtualKeyboard`].
//!
//! [`VirtualKeyboard`]: crate::input::keyboard::VirtualKeyboard

use ::std::str::FromStr;
use ::strum::{Display, EnumIter};

use crate::{
    errors::{Error, ErrorKind},
    layout::{KeySlot, ModifierKey},
};

/// Forces the shifted or unshifted output of a key regardless of the
/// Shift-Lock state. Used when mirroring a physical keyboard, where the
/// shift state is known for each key-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOverride {
    Shifted,
    Unshifted,
}

/// Keys which type fixed text in every layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpecialKey {
    Space,
    Tab,
    Enter,
}

impl SpecialKey {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Tab => "\t",
            Self::Enter => "\n",
        }
    }
}

/// One activation of an on-screen (or mirrored physical) key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A character key.
    Key {
        slot: KeySlot,
        shift: Option<ShiftOverride>,
    },
    /// Shift, Caps Lock or AltGr.
    Modifier(ModifierKey),
    /// Space, Tab or Enter.
    Special(SpecialKey),
    Backspace,
}

impl KeyEvent {
    /// A plain click on a character key.
    pub const fn key(slot: KeySlot) -> Self {
        Self::Key { slot, shift: None }
    }
}

impl From<KeySlot> for KeyEvent {
    fn from(slot: KeySlot) -> Self {
        Self::key(slot)
    }
}

impl From<ModifierKey> for KeyEvent {
    fn from(key: ModifierKey) -> Self {
        Self::Modifier(key)
    }
}

impl From<SpecialKey> for KeyEvent {
    fn from(key: SpecialKey) -> Self {
        Self::Special(key)
    }
}

/// Parses a textual key name, as used by scripts and key bindings.
///
/// Modifier and special key names are case-insensitive (`shift`, `caps`,
/// `altgr`, `space`, `tab`, `enter`, `bksp`). Anything else must be a
/// [`KeySlot`] name, in any case. A
/// `shift+` or `plain+` prefix attaches a [`ShiftOverride`].
impl FromStr for KeyEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_ascii_lowercase();

        let named = match lower.as_str() {
            "shift" => Some(ModifierKey::Shift.into()),
            "caps" | "capslock" => Some(ModifierKey::CapsLock.into()),
            "altgr" => Some(ModifierKey::AltGr.into()),
            "space" => Some(SpecialKey::Space.into()),
            "tab" => Some(SpecialKey::Tab.into()),
            "enter" | "return" => Some(SpecialKey::Enter.into()),
            "bksp" | "backspace" => Some(Self::Backspace),
            _ => None,
        };
        if let Some(event) = named {
            return Ok(event);
        }

        let (shift, name) = if let Some(rest) = lower.strip_prefix("shift+") {
            (Some(ShiftOverride::Shifted), &token[token.len() - rest.len()..])
        } else if let Some(rest) = lower.strip_prefix("plain+") {
            (Some(ShiftOverride::Unshifted), &token[token.len() - rest.len()..])
        } else {
            (None, token)
        };

        KeySlot::from_str(name)
            .map(|slot| Self::Key { slot, shift })
            .map_err(|_| ErrorKind::UnknownKey(token.to_owned()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_parse_modifiers_and_specials() {
        assert_eq!("Shift".parse(), Ok(KeyEvent::Modifier(ModifierKey::Shift)));
        assert_eq!("CAPS".parse(), Ok(KeyEvent::Modifier(ModifierKey::CapsLock)));
        assert_eq!("altgr".parse(), Ok(KeyEvent::Modifier(ModifierKey::AltGr)));
        assert_eq!(" space ".parse(), Ok(KeyEvent::Special(SpecialKey::Space)));
        assert_eq!("bksp".parse(), Ok(KeyEvent::Backspace));
    }

    #[test]
    fn test_parse_slots() {
        assert_eq!("Q".parse(), Ok(KeyEvent::key(KeySlot::Q)));
        assert_eq!("q".parse(), Ok(KeyEvent::key(KeySlot::Q)));
        assert_eq!("1".parse(), Ok(KeyEvent::key(KeySlot::D1)));
        assert_eq!("OemPeriod".parse(), Ok(KeyEvent::key(KeySlot::OemPeriod)));
    }

    #[test]
    fn test_parse_shift_override() {
        assert_eq!(
            "shift+a".parse(),
            Ok(KeyEvent::Key {
                slot: KeySlot::A,
                shift: Some(ShiftOverride::Shifted)
            })
        );
        assert_eq!(
            "Plain+Oem1".parse(),
            Ok(KeyEvent::Key {
                slot: KeySlot::Oem1,
                shift: Some(ShiftOverride::Unshifted)
            })
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Oem5".parse::<KeyEvent>().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownKey("Oem5".into()));
    }

    #[test]
    fn test_special_text() {
        assert_eq!(SpecialKey::Enter.text(), "\n");
        assert_eq!(SpecialKey::Tab.text(), "\t");
    }
}

//! The outputs of a single key-slot.

use ::strum::{Display, EnumIter};

use crate::input::keyboard::ModifierFlags;

/// Which of a key's outputs is selected by the current modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Unshifted,
    Shifted,
    AltGr,
}

/// How many distinct glyphs a key carries. Drives keycap font sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum KeyForm {
    /// Only an unshifted glyph.
    Single,
    /// Unshifted and shifted glyphs.
    TwoGlyph,
    /// An AltGr glyph, with or without a shifted one.
    ThreeGlyph,
}

/// The up-to-three code points one key-slot can produce in a particular
/// layout, plus descriptive tooltips.
///
/// A [`KeyModel`] holds no modifier state of its own. What it produces is a
/// pure function of its fields and the [`ModifierFlags`] passed in, following
/// this precedence:
///
/// 1. the shifted glyph, if Shift-Lock is on (or Caps Lock is on and the key
///    is a letter) and the key has one;
/// 2. otherwise the AltGr glyph, if AltGr is active and the key has one;
/// 3. otherwise the unshifted glyph.
///
/// Tooltips follow the same precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyModel {
    unshifted: char,
    shifted: Option<char>,
    alt_gr: Option<char>,
    is_letter: bool,
    unshifted_tooltip: Option<String>,
    shifted_tooltip: Option<String>,
    alt_gr_tooltip: Option<String>,
    display_name: String,
}

impl KeyModel {
    /// A key with a single output, unaffected by any modifier.
    pub fn new(unshifted: char) -> Self {
        Self {
            unshifted,
            shifted: None,
            alt_gr: None,
            is_letter: false,
            unshifted_tooltip: None,
            shifted_tooltip: None,
            alt_gr_tooltip: None,
            display_name: String::new(),
        }
    }

    /// A non-letter key with a distinct shifted output. Caps Lock does not
    /// affect it.
    pub fn pair(unshifted: char, shifted: char) -> Self {
        Self {
            shifted: Some(shifted),
            ..Self::new(unshifted)
        }
    }

    /// A letter key. Caps Lock selects the shifted (capital) form.
    pub fn letter(lower: char, upper: char) -> Self {
        Self {
            is_letter: true,
            ..Self::pair(lower, upper)
        }
    }

    /// Adds an AltGr output to the key.
    pub fn with_alt_gr(self, alt_gr: char) -> Self {
        Self {
            alt_gr: Some(alt_gr),
            ..self
        }
    }

    /// Sets the unshifted and shifted tooltips together.
    pub fn with_tooltips(self, unshifted: impl Into<String>, shifted: impl Into<String>) -> Self {
        Self {
            unshifted_tooltip: Some(unshifted.into()),
            shifted_tooltip: Some(shifted.into()),
            ..self
        }
    }

    /// Sets the unshifted tooltip.
    pub fn with_tooltip(self, unshifted: impl Into<String>) -> Self {
        Self {
            unshifted_tooltip: Some(unshifted.into()),
            ..self
        }
    }

    /// Sets the shifted tooltip.
    pub fn with_shifted_tooltip(self, shifted: impl Into<String>) -> Self {
        Self {
            shifted_tooltip: Some(shifted.into()),
            ..self
        }
    }

    /// Sets the AltGr tooltip.
    pub fn with_alt_gr_tooltip(self, alt_gr: impl Into<String>) -> Self {
        Self {
            alt_gr_tooltip: Some(alt_gr.into()),
            ..self
        }
    }

    /// Sets the design-time label of the key.
    pub fn with_display_name(self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..self
        }
    }

    pub fn unshifted(&self) -> char {
        self.unshifted
    }

    pub fn shifted(&self) -> Option<char> {
        self.shifted
    }

    pub fn alt_gr(&self) -> Option<char> {
        self.alt_gr
    }

    /// Whether Caps Lock, and not only Shift, selects the shifted output.
    pub fn is_letter(&self) -> bool {
        self.is_letter
    }

    pub fn unshifted_tooltip(&self) -> Option<&str> {
        self.unshifted_tooltip.as_deref()
    }

    pub fn shifted_tooltip(&self) -> Option<&str> {
        self.shifted_tooltip.as_deref()
    }

    pub fn alt_gr_tooltip(&self) -> Option<&str> {
        self.alt_gr_tooltip.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn form(&self) -> KeyForm {
        match (self.shifted, self.alt_gr) {
            (_, Some(_)) => KeyForm::ThreeGlyph,
            (Some(_), None) => KeyForm::TwoGlyph,
            (None, None) => KeyForm::Single,
        }
    }

    /// Selects which output is in effect for the given modifier flags.
    pub fn level(&self, flags: ModifierFlags) -> Level {
        let shifting = flags.shift_lock || (self.is_letter && flags.caps_lock);

        if shifting && self.shifted.is_some() {
            Level::Shifted
        } else if flags.alt_gr && self.alt_gr.is_some() {
            Level::AltGr
        } else {
            Level::Unshifted
        }
    }

    /// The code point produced under the given modifier flags.
    pub fn code_point(&self, flags: ModifierFlags) -> char {
        match self.level(flags) {
            Level::Shifted => self.shifted.unwrap_or(self.unshifted),
            Level::AltGr => self.alt_gr.unwrap_or(self.unshifted),
            Level::Unshifted => self.unshifted,
        }
    }

    /// The text injected when the key is pressed under the given flags.
    pub fn text(&self, flags: ModifierFlags) -> String {
        self.code_point(flags).to_string()
    }

    /// The tooltip describing the output under the given flags.
    pub fn tooltip(&self, flags: ModifierFlags) -> Option<&str> {
        match self.level(flags) {
            Level::Shifted => self.shifted_tooltip(),
            Level::AltGr => self.alt_gr_tooltip(),
            Level::Unshifted => self.unshifted_tooltip(),
        }
    }
}

/// The modifier keys of the on-screen keyboard. These produce no text; they
/// only change the modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ModifierKey {
    Shift,
    CapsLock,
    AltGr,
}

impl ModifierKey {
    /// The keycap legend.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shift => "Shift",
            Self::CapsLock => "Caps Lock",
            Self::AltGr => "AltGr",
        }
    }

    /// Tooltip describing what pressing the key does in the current state.
    pub fn tooltip(self, flags: ModifierFlags, uses_alt_gr: bool) -> &'static str {
        match self {
            Self::Shift if flags.shift_lock => "Shift is locked. Click to release it.",
            Self::Shift => "Click to shift the next key.",
            Self::CapsLock if flags.caps_lock => "Caps Lock is on. Click to turn it off.",
            Self::CapsLock => "Click to type capital letters until clicked again.",
            Self::AltGr if !uses_alt_gr => "This layout has no AltGr characters.",
            Self::AltGr if flags.alt_gr => "AltGr is active. Click to release it.",
            Self::AltGr => "Click to type the alternate character of the next key.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    const NORMAL: ModifierFlags = ModifierFlags {
        shift_lock: false,
        caps_lock: false,
        alt_gr: false,
    };
    const SHIFT: ModifierFlags = ModifierFlags {
        shift_lock: true,
        ..NORMAL
    };
    const CAPS: ModifierFlags = ModifierFlags {
        caps_lock: true,
        ..NORMAL
    };
    const ALT_GR: ModifierFlags = ModifierFlags {
        alt_gr: true,
        ..NORMAL
    };

    fn all_flags() -> impl Iterator<Item = ModifierFlags> {
        (0..8).map(|bits| ModifierFlags {
            shift_lock: bits & 1 != 0,
            caps_lock: bits & 2 != 0,
            alt_gr: bits & 4 != 0,
        })
    }

    #[test]
    fn test_single_glyph_ignores_modifiers() {
        let key = KeyModel::new('²');
        for flags in all_flags() {
            assert_eq!(key.code_point(flags), '²');
        }
        assert_eq!(key.form(), KeyForm::Single);
    }

    #[test]
    fn test_letter_precedence() {
        let key = KeyModel::letter('q', 'Q').with_alt_gr('@');

        assert_eq!(key.code_point(NORMAL), 'q');
        assert_eq!(key.code_point(SHIFT), 'Q');
        assert_eq!(key.code_point(CAPS), 'Q');
        assert_eq!(key.code_point(ALT_GR), '@');
        // Caps Lock wins over AltGr on letters.
        assert_eq!(
            key.code_point(ModifierFlags {
                caps_lock: true,
                alt_gr: true,
                ..NORMAL
            }),
            'Q'
        );
        assert_eq!(key.form(), KeyForm::ThreeGlyph);
    }

    #[test]
    fn test_non_letter_ignores_caps_lock() {
        let key = KeyModel::pair('7', '/').with_alt_gr('{');

        assert_eq!(key.code_point(CAPS), '7');
        assert_eq!(
            key.code_point(ModifierFlags {
                caps_lock: true,
                alt_gr: true,
                ..NORMAL
            }),
            '{'
        );
        assert_eq!(key.code_point(SHIFT), '/');
    }

    #[test]
    fn test_shift_without_shifted_form_falls_through_to_alt_gr() {
        let key = KeyModel::new('1').with_alt_gr('١');

        assert_eq!(key.code_point(SHIFT), '1');
        assert_eq!(
            key.code_point(ModifierFlags {
                shift_lock: true,
                alt_gr: true,
                ..NORMAL
            }),
            '١'
        );
    }

    #[test]
    fn test_tooltips_follow_code_point_precedence() {
        let key = KeyModel::letter('e', 'E')
            .with_alt_gr('€')
            .with_tooltips("e", "E")
            .with_alt_gr_tooltip("Euro sign");

        assert_eq!(key.tooltip(NORMAL), Some("e"));
        assert_eq!(key.tooltip(CAPS), Some("E"));
        assert_eq!(key.tooltip(ALT_GR), Some("Euro sign"));

        let bare = KeyModel::pair(',', ';');
        assert_eq!(bare.tooltip(SHIFT), None);
    }

    #[test]
    fn test_text() {
        let key = KeyModel::letter('ж', 'Ж');
        assert_eq!(key.text(NORMAL), "ж");
        assert_eq!(key.text(CAPS), "Ж");
    }

    #[test]
    fn test_modifier_tooltips() {
        assert_eq!(ModifierKey::AltGr.label(), "AltGr");
        assert_eq!(
            ModifierKey::AltGr.tooltip(ALT_GR, false),
            "This layout has no AltGr characters."
        );
        assert_eq!(
            ModifierKey::Shift.tooltip(SHIFT, true),
            "Shift is locked. Click to release it."
        );
        assert_eq!(
            ModifierKey::CapsLock.tooltip(NORMAL, true),
            "Click to type capital letters until clicked again."
        );
    }
}

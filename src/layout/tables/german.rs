//! German (QWERTZ).

use ::maplit::hashmap;
use ::std::collections::HashMap;

use crate::layout::{KeyModel, KeySlot, LayoutAttributes};

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        uses_alt_gr: true,
        help_available: true,
        ..Default::default()
    }
}

fn umlaut(lower: char, upper: char, vowel: char) -> KeyModel {
    KeyModel::letter(lower, upper).with_tooltips(
        format!("Latin small letter {vowel} with diaeresis"),
        format!("Latin capital letter {} with diaeresis", vowel.to_ascii_uppercase()),
    )
}

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    hashmap! {
        Oem3 => KeyModel::pair('^', '°').with_tooltips("Circumflex accent", "Degree sign"),
        D2 => KeyModel::pair('2', '"')
            .with_alt_gr('²')
            .with_alt_gr_tooltip("Superscript two"),
        D3 => KeyModel::pair('3', '§')
            .with_alt_gr('³')
            .with_shifted_tooltip("Section sign")
            .with_alt_gr_tooltip("Superscript three"),
        D6 => KeyModel::pair('6', '&'),
        D7 => KeyModel::pair('7', '/').with_alt_gr('{'),
        D8 => KeyModel::pair('8', '(').with_alt_gr('['),
        D9 => KeyModel::pair('9', ')').with_alt_gr(']'),
        D0 => KeyModel::pair('0', '=').with_alt_gr('}'),
        OemMinus => KeyModel::pair('ß', '?')
            .with_alt_gr('\\')
            .with_tooltip("Latin small letter sharp s"),
        OemPlus => KeyModel::pair('´', '`').with_tooltips("Acute accent", "Grave accent"),

        Q => KeyModel::letter('q', 'Q')
            .with_alt_gr('@')
            .with_alt_gr_tooltip("Commercial at"),
        E => KeyModel::letter('e', 'E')
            .with_alt_gr('€')
            .with_alt_gr_tooltip("Euro sign"),
        Y => KeyModel::letter('z', 'Z'),
        OemOpenBrackets => umlaut('ü', 'Ü', 'u'),
        Oem6 => KeyModel::pair('+', '*')
            .with_alt_gr('~')
            .with_alt_gr_tooltip("Tilde"),

        Oem1 => umlaut('ö', 'Ö', 'o'),
        Oem7 => umlaut('ä', 'Ä', 'a'),

        Z => KeyModel::letter('y', 'Y'),
        M => KeyModel::letter('m', 'M')
            .with_alt_gr('µ')
            .with_alt_gr_tooltip("Micro sign"),
        OemComma => KeyModel::pair(',', ';'),
        OemPeriod => KeyModel::pair('.', ':'),
        Oem2 => KeyModel::pair('-', '_'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_umlaut_tooltips() {
        let keys = overrides();

        assert_eq!(
            keys[&KeySlot::Oem7].unshifted_tooltip(),
            Some("Latin small letter a with diaeresis")
        );
        assert_eq!(
            keys[&KeySlot::Oem7].shifted_tooltip(),
            Some("Latin capital letter A with diaeresis")
        );
    }

    #[test]
    fn test_alt_gr_brackets() {
        let keys = overrides();
        let brackets: String = [KeySlot::D7, KeySlot::D8, KeySlot::D9, KeySlot::D0]
            .iter()
            .filter_map(|slot| keys[slot].alt_gr())
            .collect();

        assert_eq!(brackets, "{[]}");
    }
}

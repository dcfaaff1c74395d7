//! French (AZERTY).

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

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    hashmap! {
        Oem3 => KeyModel::new('²').with_tooltip("Superscript two"),
        D1 => KeyModel::pair('&', '1'),
        D2 => KeyModel::pair('é', '2')
            .with_alt_gr('~')
            .with_tooltip("Latin small letter e with acute")
            .with_alt_gr_tooltip("Tilde"),
        D3 => KeyModel::pair('"', '3').with_alt_gr('#'),
        D4 => KeyModel::pair('\'', '4').with_alt_gr('{'),
        D5 => KeyModel::pair('(', '5').with_alt_gr('['),
        D6 => KeyModel::pair('-', '6').with_alt_gr('|'),
        D7 => KeyModel::pair('è', '7')
            .with_alt_gr('`')
            .with_tooltip("Latin small letter e with grave"),
        D8 => KeyModel::pair('_', '8').with_alt_gr('\\'),
        D9 => KeyModel::pair('ç', '9')
            .with_alt_gr('^')
            .with_tooltip("Latin small letter c with cedilla"),
        D0 => KeyModel::pair('à', '0')
            .with_alt_gr('@')
            .with_tooltip("Latin small letter a with grave"),
        OemMinus => KeyModel::pair(')', '°')
            .with_alt_gr(']')
            .with_shifted_tooltip("Degree sign"),
        OemPlus => KeyModel::pair('=', '+').with_alt_gr('}'),

        Q => KeyModel::letter('a', 'A'),
        W => KeyModel::letter('z', 'Z'),
        E => KeyModel::letter('e', 'E')
            .with_alt_gr('€')
            .with_alt_gr_tooltip("Euro sign"),
        OemOpenBrackets => KeyModel::pair('^', '¨').with_tooltips("Circumflex accent", "Diaeresis"),
        Oem6 => KeyModel::pair('$', '£')
            .with_alt_gr('¤')
            .with_shifted_tooltip("Pound sign")
            .with_alt_gr_tooltip("Currency sign"),

        A => KeyModel::letter('q', 'Q'),
        Oem1 => KeyModel::letter('m', 'M'),
        Oem7 => KeyModel::pair('ù', '%').with_tooltip("Latin small letter u with grave"),

        Z => KeyModel::letter('w', 'W'),
        M => KeyModel::pair(',', '?'),
        OemComma => KeyModel::pair(';', '.'),
        OemPeriod => KeyModel::pair(':', '/'),
        Oem2 => KeyModel::pair('!', '§').with_shifted_tooltip("Section sign"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_azerty_letter_positions() {
        let keys = overrides();

        assert_eq!(keys[&KeySlot::Q].unshifted(), 'a');
        assert_eq!(keys[&KeySlot::A].unshifted(), 'q');
        assert_eq!(keys[&KeySlot::W].unshifted(), 'z');
        assert_eq!(keys[&KeySlot::Z].unshifted(), 'w');
        assert_eq!(keys[&KeySlot::Oem1].shifted(), Some('M'));
        assert!(!keys[&KeySlot::M].is_letter());
    }

    #[test]
    fn test_number_row_shifts_to_digits() {
        let keys = overrides();

        assert_eq!(keys[&KeySlot::D1].shifted(), Some('1'));
        assert_eq!(keys[&KeySlot::D0].shifted(), Some('0'));
        assert_eq!(keys[&KeySlot::D0].alt_gr(), Some('@'));
    }
}

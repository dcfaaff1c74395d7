//! Spanish (Spain).

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
        Oem3 => KeyModel::pair('º', 'ª')
            .with_alt_gr('\\')
            .with_tooltips("Masculine ordinal indicator", "Feminine ordinal indicator"),
        D1 => KeyModel::pair('1', '!').with_alt_gr('|'),
        D2 => KeyModel::pair('2', '"').with_alt_gr('@'),
        D3 => KeyModel::pair('3', '·')
            .with_alt_gr('#')
            .with_shifted_tooltip("Middle dot"),
        D4 => KeyModel::pair('4', '$').with_alt_gr('~'),
        D5 => KeyModel::pair('5', '%')
            .with_alt_gr('€')
            .with_alt_gr_tooltip("Euro sign"),
        D6 => KeyModel::pair('6', '&')
            .with_alt_gr('¬')
            .with_alt_gr_tooltip("Not sign"),
        D7 => KeyModel::pair('7', '/'),
        D8 => KeyModel::pair('8', '('),
        D9 => KeyModel::pair('9', ')'),
        D0 => KeyModel::pair('0', '='),
        OemMinus => KeyModel::pair('\'', '?'),
        OemPlus => KeyModel::pair('¡', '¿')
            .with_tooltips("Inverted exclamation mark", "Inverted question mark"),

        E => KeyModel::letter('e', 'E')
            .with_alt_gr('€')
            .with_alt_gr_tooltip("Euro sign"),
        OemOpenBrackets => KeyModel::pair('`', '^').with_alt_gr('['),
        Oem6 => KeyModel::pair('+', '*').with_alt_gr(']'),

        Oem1 => KeyModel::letter('ñ', 'Ñ').with_tooltips(
            "Latin small letter n with tilde",
            "Latin capital letter N with tilde",
        ),
        Oem7 => KeyModel::pair('´', '¨')
            .with_alt_gr('{')
            .with_tooltips("Acute accent", "Diaeresis"),

        OemComma => KeyModel::pair(',', ';'),
        OemPeriod => KeyModel::pair('.', ':'),
        Oem2 => KeyModel::pair('-', '_'),
    }
}

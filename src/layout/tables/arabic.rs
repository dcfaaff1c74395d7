//! Arabic (101). Letters have no shifted form; AltGr on the digit row types
//! Arabic-Indic digits.

use ::maplit::hashmap;
use ::std::collections::HashMap;

use super::native_digits;
use crate::layout::{KeyModel, KeySlot, LayoutAttributes, TextDirection};

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        uses_alt_gr: true,
        text_direction: TextDirection::RightToLeft,
        keycap_font_family: "Arial Unicode MS",
        ..Default::default()
    }
}

fn letter(code_point: char, name: &str) -> KeyModel {
    KeyModel::new(code_point).with_tooltip(format!("Arabic letter {name}"))
}

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    let mut keys = hashmap! {
        Oem3 => letter('\u{0630}', "thal"),

        Q => letter('\u{0636}', "dad"),
        W => letter('\u{0635}', "sad"),
        E => letter('\u{062B}', "theh"),
        R => letter('\u{0642}', "qaf"),
        T => letter('\u{0641}', "feh"),
        Y => letter('\u{063A}', "ghain"),
        U => letter('\u{0639}', "ain"),
        I => letter('\u{0647}', "heh"),
        O => letter('\u{062E}', "khah"),
        P => letter('\u{062D}', "hah"),
        OemOpenBrackets => letter('\u{062C}', "jeem"),
        Oem6 => letter('\u{062F}', "dal"),

        A => letter('\u{0634}', "sheen"),
        S => letter('\u{0633}', "seen"),
        D => letter('\u{064A}', "yeh"),
        F => letter('\u{0628}', "beh"),
        G => letter('\u{0644}', "lam"),
        H => letter('\u{0627}', "alef"),
        J => letter('\u{062A}', "teh"),
        K => letter('\u{0646}', "noon"),
        L => letter('\u{0645}', "meem"),
        Oem1 => letter('\u{0643}', "kaf"),
        Oem7 => letter('\u{0637}', "tah"),

        Z => letter('\u{0626}', "yeh with hamza above"),
        X => letter('\u{0621}', "hamza"),
        C => letter('\u{0624}', "waw with hamza above"),
        V => letter('\u{0631}', "reh"),
        B => KeyModel::new('\u{FEFB}').with_tooltip("Arabic ligature lam with alef"),
        N => letter('\u{0649}', "alef maksura"),
        M => letter('\u{0629}', "teh marbuta"),
        OemComma => letter('\u{0648}', "waw"),
        OemPeriod => letter('\u{0632}', "zain"),
        Oem2 => letter('\u{0638}', "zah"),
    };
    keys.extend(native_digits(0x0660, "Arabic-Indic digit"));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_letters_are_single_glyph() {
        for (slot, key) in overrides().iter().filter(|(slot, _)| !slot.is_digit()) {
            assert_eq!(key.shifted(), None, "{slot}");
            assert_eq!(key.alt_gr(), None, "{slot}");
            assert!(!key.is_letter(), "{slot}");
        }
    }

    #[test]
    fn test_every_slot_but_the_outer_symbols_is_overridden() {
        let keys = overrides();
        assert_eq!(keys.len(), 44);
        assert!(!keys.contains_key(&KeySlot::OemMinus));
        assert!(!keys.contains_key(&KeySlot::OemPlus));
    }

    #[test]
    fn test_tooltips() {
        assert_eq!(
            overrides()[&KeySlot::Q].unshifted_tooltip(),
            Some("Arabic letter dad")
        );
    }
}

//! Sanskrit, Devanagari InScript. Vowel signs sit unshifted and independent
//! vowels shifted on the left hand; consonants on the right. AltGr on the
//! digit row types Devanagari digits.

use ::maplit::hashmap;
use ::std::collections::HashMap;

use super::native_digits;
use crate::layout::{FontSizeHints, KeyModel, KeySlot, LayoutAttributes};

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        uses_alt_gr: true,
        keycap_font_family: "Mangal",
        font_size_hints: FontSizeHints {
            single: 24.0,
            two_glyph: 18.0,
            three_glyph: 15.0,
        },
        ..Default::default()
    }
}

/// Devanagari has no case, so Caps Lock never applies to these.
fn pair(unshifted: char, shifted: char) -> KeyModel {
    KeyModel::pair(unshifted, shifted)
}

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    let mut keys = hashmap! {
        Oem3 => pair('\u{094A}', '\u{0912}'),
        OemMinus => KeyModel::pair('-', '\u{0903}').with_shifted_tooltip("Devanagari sign visarga"),
        OemPlus => pair('\u{0943}', '\u{090B}'),

        Q => pair('\u{094C}', '\u{0914}'),
        W => pair('\u{0948}', '\u{0910}'),
        E => pair('\u{093E}', '\u{0906}'),
        R => pair('\u{0940}', '\u{0908}'),
        T => pair('\u{0942}', '\u{090A}'),
        Y => pair('\u{092C}', '\u{092D}'),
        U => pair('\u{0939}', '\u{0919}'),
        I => pair('\u{0917}', '\u{0918}'),
        O => pair('\u{0926}', '\u{0927}'),
        P => pair('\u{091C}', '\u{091D}'),
        OemOpenBrackets => pair('\u{0921}', '\u{0922}'),
        Oem6 => pair('\u{093C}', '\u{091E}'),

        A => pair('\u{094B}', '\u{0913}'),
        S => pair('\u{0947}', '\u{090F}'),
        D => pair('\u{094D}', '\u{0905}').with_tooltips("Devanagari sign virama", "Devanagari letter a"),
        F => pair('\u{093F}', '\u{0907}'),
        G => pair('\u{0941}', '\u{0909}'),
        H => pair('\u{092A}', '\u{092B}'),
        J => pair('\u{0930}', '\u{0931}'),
        K => pair('\u{0915}', '\u{0916}'),
        L => pair('\u{0924}', '\u{0925}'),
        Oem1 => pair('\u{091A}', '\u{091B}'),
        Oem7 => pair('\u{091F}', '\u{0920}'),

        Z => pair('\u{0946}', '\u{090E}'),
        X => pair('\u{0902}', '\u{0901}')
            .with_tooltips("Devanagari sign anusvara", "Devanagari sign candrabindu"),
        C => pair('\u{092E}', '\u{0923}'),
        V => KeyModel::new('\u{0928}'),
        B => pair('\u{0935}', '\u{0934}'),
        N => pair('\u{0932}', '\u{0933}'),
        M => pair('\u{0938}', '\u{0936}'),
        OemComma => KeyModel::pair(',', '\u{0937}'),
        OemPeriod => KeyModel::pair('.', '\u{0964}').with_shifted_tooltip("Devanagari danda"),
        Oem2 => pair('\u{092F}', '\u{095F}'),
    };
    keys.extend(native_digits(0x0966, "Devanagari digit"));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_no_letters() {
        for (slot, key) in overrides().iter() {
            assert!(!key.is_letter(), "{slot}");
        }
    }

    #[test]
    fn test_consonants() {
        let keys = overrides();

        assert_eq!(keys[&KeySlot::K].unshifted(), 'क');
        assert_eq!(keys[&KeySlot::K].shifted(), Some('ख'));
        assert_eq!(keys[&KeySlot::D3].alt_gr(), Some('३'));
    }
}

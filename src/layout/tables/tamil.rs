//! Tamil InScript. Positions with no Tamil counterpart in the InScript
//! arrangement keep their English output. AltGr on the digit row types Tamil
//! digits.

use ::maplit::hashmap;
use ::std::collections::HashMap;

use super::native_digits;
use crate::layout::{FontSizeHints, KeyModel, KeySlot, LayoutAttributes};

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        uses_alt_gr: true,
        keycap_font_family: "Latha",
        font_size_hints: FontSizeHints {
            single: 22.0,
            two_glyph: 17.0,
            three_glyph: 14.0,
        },
        ..Default::default()
    }
}

fn pair(unshifted: char, shifted: char) -> KeyModel {
    KeyModel::pair(unshifted, shifted)
}

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    let mut keys = hashmap! {
        Oem3 => pair('\u{0BCA}', '\u{0B92}'),
        OemMinus => pair('-', '\u{0B83}').with_shifted_tooltip("Tamil sign visarga"),

        Q => pair('\u{0BCC}', '\u{0B94}'),
        W => pair('\u{0BC8}', '\u{0B90}'),
        E => pair('\u{0BBE}', '\u{0B86}'),
        R => pair('\u{0BC0}', '\u{0B88}'),
        T => pair('\u{0BC2}', '\u{0B8A}'),
        U => pair('\u{0BB9}', '\u{0B99}'),
        P => KeyModel::new('\u{0B9C}'),
        Oem6 => KeyModel::new('\u{0B9E}'),

        A => pair('\u{0BCB}', '\u{0B93}'),
        S => pair('\u{0BC7}', '\u{0B8F}'),
        D => pair('\u{0BCD}', '\u{0B85}').with_tooltips("Tamil sign virama", "Tamil letter a"),
        F => pair('\u{0BBF}', '\u{0B87}'),
        G => pair('\u{0BC1}', '\u{0B89}'),
        H => KeyModel::new('\u{0BAA}'),
        J => pair('\u{0BB0}', '\u{0BB1}'),
        K => KeyModel::new('\u{0B95}'),
        L => KeyModel::new('\u{0BA4}'),
        Oem1 => KeyModel::new('\u{0B9A}'),
        Oem7 => KeyModel::new('\u{0B9F}'),

        Z => pair('\u{0BC6}', '\u{0B8E}'),
        C => pair('\u{0BAE}', '\u{0BA3}'),
        V => pair('\u{0BA8}', '\u{0BA9}'),
        B => pair('\u{0BB5}', '\u{0BB4}'),
        N => pair('\u{0BB2}', '\u{0BB3}'),
        M => pair('\u{0BB8}', '\u{0BB7}'),
        Oem2 => KeyModel::new('\u{0BAF}'),
    };
    keys.extend(native_digits(0x0BE6, "Tamil digit"));
    keys
}

//! Russian (ЙЦУКЕН).

use ::maplit::hashmap;
use ::std::collections::HashMap;

use crate::layout::{KeyModel, KeySlot, LayoutAttributes};

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        help_available: true,
        ..Default::default()
    }
}

/// A Cyrillic letter key. Every Russian letter has a single-code-point
/// capital.
fn letter(lower: char) -> KeyModel {
    let mut upper = lower.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => KeyModel::letter(lower, upper),
        _ => KeyModel::new(lower),
    }
}

pub(super) fn overrides() -> HashMap<KeySlot, KeyModel> {
    use KeySlot::*;

    hashmap! {
        Oem3 => letter('ё'),
        D2 => KeyModel::pair('2', '"'),
        D3 => KeyModel::pair('3', '№').with_shifted_tooltip("Numero sign"),
        D4 => KeyModel::pair('4', ';'),
        D6 => KeyModel::pair('6', ':'),
        D7 => KeyModel::pair('7', '?'),

        Q => letter('й'),
        W => letter('ц'),
        E => letter('у'),
        R => letter('к'),
        T => letter('е'),
        Y => letter('н'),
        U => letter('г'),
        I => letter('ш'),
        O => letter('щ'),
        P => letter('з'),
        OemOpenBrackets => letter('х'),
        Oem6 => letter('ъ'),

        A => letter('ф'),
        S => letter('ы'),
        D => letter('в'),
        F => letter('а'),
        G => letter('п'),
        H => letter('р'),
        J => letter('о'),
        K => letter('л'),
        L => letter('д'),
        Oem1 => letter('ж'),
        Oem7 => letter('э'),

        Z => letter('я'),
        X => letter('ч'),
        C => letter('с'),
        V => letter('м'),
        B => letter('и'),
        N => letter('т'),
        M => letter('ь'),
        OemComma => letter('б'),
        OemPeriod => letter('ю'),
        Oem2 => KeyModel::pair('.', ','),
    }
}

//! US English (QWERTY). The base table every other locale builds on.

use ::lazy_static::lazy_static;
use ::strum::IntoEnumIterator;

use crate::layout::{KeyModel, KeySlot, LayoutAttributes};

lazy_static! {
    static ref BASE: Vec<KeyModel> = KeySlot::iter().map(build).collect();
}

pub(super) fn attributes() -> LayoutAttributes {
    LayoutAttributes {
        help_available: true,
        ..Default::default()
    }
}

/// The English key for `slot`.
pub(in crate::layout) fn key(slot: KeySlot) -> KeyModel {
    BASE[slot.index()].clone()
}

fn letter(lower: char) -> KeyModel {
    KeyModel::letter(lower, lower.to_ascii_uppercase())
}

fn symbol(unshifted: char, shifted: char, names: (&str, &str)) -> KeyModel {
    KeyModel::pair(unshifted, shifted).with_tooltips(names.0, names.1)
}

fn digit(unshifted: char, shifted: char, shifted_name: &str) -> KeyModel {
    KeyModel::pair(unshifted, shifted).with_shifted_tooltip(shifted_name)
}

fn build(slot: KeySlot) -> KeyModel {
    use KeySlot::*;

    match slot {
        Oem3 => symbol('`', '~', ("Grave accent", "Tilde")),
        D1 => digit('1', '!', "Exclamation mark"),
        D2 => digit('2', '@', "Commercial at"),
        D3 => digit('3', '#', "Number sign"),
        D4 => digit('4', '$', "Dollar sign"),
        D5 => digit('5', '%', "Percent sign"),
        D6 => digit('6', '^', "Circumflex accent"),
        D7 => digit('7', '&', "Ampersand"),
        D8 => digit('8', '*', "Asterisk"),
        D9 => digit('9', '(', "Left parenthesis"),
        D0 => digit('0', ')', "Right parenthesis"),
        OemMinus => symbol('-', '_', ("Hyphen-minus", "Low line")),
        OemPlus => symbol('=', '+', ("Equals sign", "Plus sign")),

        Q => letter('q'),
        W => letter('w'),
        E => letter('e'),
        R => letter('r'),
        T => letter('t'),
        Y => letter('y'),
        U => letter('u'),
        I => letter('i'),
        O => letter('o'),
        P => letter('p'),
        OemOpenBrackets => symbol('[', '{', ("Left square bracket", "Left curly bracket")),
        Oem6 => symbol(']', '}', ("Right square bracket", "Right curly bracket")),

        A => letter('a'),
        S => letter('s'),
        D => letter('d'),
        F => letter('f'),
        G => letter('g'),
        H => letter('h'),
        J => letter('j'),
        K => letter('k'),
        L => letter('l'),
        Oem1 => symbol(';', ':', ("Semicolon", "Colon")),
        Oem7 => symbol('\'', '"', ("Apostrophe", "Quotation mark")),

        Z => letter('z'),
        X => letter('x'),
        C => letter('c'),
        V => letter('v'),
        B => letter('b'),
        N => letter('n'),
        M => letter('m'),
        OemComma => symbol(',', '<', ("Comma", "Less-than sign")),
        OemPeriod => symbol('.', '>', ("Full stop", "Greater-than sign")),
        Oem2 => symbol('/', '?', ("Solidus", "Question mark")),
    }
}

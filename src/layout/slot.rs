//! Locale-independent key positions.

use ::strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One physical position on the on-screen keyboard.
///
/// The set and order of slots is the same for every layout. Layouts only
/// differ in what each slot produces. Slot names follow the host platform's
/// virtual-key naming (`Oem1`, `OemPlus`, ...) and round-trip through
/// [`Display`] and [`FromStr`]. Parsing ignores ASCII case.
///
/// Declaration order is the fixed keyboard order, row by row from the number
/// row down, and is what [`KeySlot::index`] and
/// [`LayoutDefinition::key_assignments`] follow.
///
/// [`Display`]: ::std::fmt::Display
/// [`FromStr`]: ::std::str::FromStr
/// [`LayoutDefinition::key_assignments`]: crate::layout::LayoutDefinition::key_assignments
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum KeySlot {
    // Number row
    Oem3,
    #[strum(serialize = "1")]
    D1,
    #[strum(serialize = "2")]
    D2,
    #[strum(serialize = "3")]
    D3,
    #[strum(serialize = "4")]
    D4,
    #[strum(serialize = "5")]
    D5,
    #[strum(serialize = "6")]
    D6,
    #[strum(serialize = "7")]
    D7,
    #[strum(serialize = "8")]
    D8,
    #[strum(serialize = "9")]
    D9,
    #[strum(serialize = "0")]
    D0,
    OemMinus,
    OemPlus,

    // Top letter row
    Q,
    W,
    E,
    R,
    T,
    Y,
    U,
    I,
    O,
    P,
    OemOpenBrackets,
    Oem6,

    // Home row
    A,
    S,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    Oem1,
    Oem7,

    // Bottom row
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    OemComma,
    OemPeriod,
    Oem2,
}

impl KeySlot {
    /// Position of the slot in the fixed keyboard order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The keyboard row the slot sits on, counting the number row as `0`.
    pub const fn row(self) -> usize {
        match self.index() {
            0..=12 => 0,
            13..=24 => 1,
            25..=35 => 2,
            _ => 3,
        }
    }

    /// Returns `true` for the ten digit keys on the number row.
    pub const fn is_digit(self) -> bool {
        matches!(
            self,
            Self::D1
                | Self::D2
                | Self::D3
                | Self::D4
                | Self::D5
                | Self::D6
                | Self::D7
                | Self::D8
                | Self::D9
                | Self::D0
        )
    }
}

//! Selectable keyboard layouts.

use ::serde::{Deserialize, Serialize};
use ::std::str::FromStr;
use ::strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::errors::{ErrorKind, Result};

/// Identifies a keyboard layout by language.
///
/// The name of each variant is also its persisted form: a [`Locale`]
/// round-trips through [`Display`], [`FromStr`] (ignoring ASCII case) and
/// serde as `"English"`, `"Arabic"`, and so on.
///
/// [`Locale::Italian`] and [`Locale::Mandarin`] are selectable but have no key
/// table of their own. They resolve to the English layout.
///
/// [`Display`]: ::std::fmt::Display
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    English,
    Arabic,
    French,
    German,
    Italian,
    Mandarin,
    Russian,
    Sanskrit,
    Spanish,
    Tamil,
}

impl Locale {
    /// Returns `true` if the locale has its own key table.
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::Italian | Self::Mandarin)
    }

    /// The locale whose table actually backs this one.
    pub const fn effective(self) -> Self {
        if self.is_implemented() {
            self
        } else {
            Self::English
        }
    }

    /// All locales with a key table of their own, in declaration order.
    pub fn implemented() -> impl Iterator<Item = Self> {
        Self::iter().filter(|locale| locale.is_implemented())
    }

    /// Parses a persisted locale name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| ErrorKind::UnknownLocale(name.to_owned()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for locale in Locale::iter() {
            assert_eq!(Locale::from_name(&locale.to_string()), Ok(locale));
        }
    }

    #[test]
    fn test_from_name_ignores_case_and_whitespace() {
        assert_eq!(Locale::from_name("german"), Ok(Locale::German));
        assert_eq!(Locale::from_name("  RUSSIAN "), Ok(Locale::Russian));
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Locale::from_name("Klingon").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownLocale("Klingon".into()));
    }

    #[test]
    fn test_placeholders_fall_back_to_english() {
        assert_eq!(Locale::Italian.effective(), Locale::English);
        assert_eq!(Locale::Mandarin.effective(), Locale::English);
        assert_eq!(Locale::Tamil.effective(), Locale::Tamil);
    }

    #[test]
    fn test_implemented_order() {
        assert_eq!(
            Locale::implemented().collect::<Vec<_>>(),
            vec![
                Locale::English,
                Locale::Arabic,
                Locale::French,
                Locale::German,
                Locale::Russian,
                Locale::Sanskrit,
                Locale::Spanish,
                Locale::Tamil,
            ]
        );
    }
}

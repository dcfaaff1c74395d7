//! Per-locale key tables.
//!
//! English is the base table and defines every slot. Every other locale is a
//! sparse set of overrides on top of it: a slot a locale does not mention
//! produces the English output.

pub(super) mod arabic;
pub(super) mod english;
pub(super) mod french;
pub(super) mod german;
pub(super) mod russian;
pub(super) mod sanskrit;
pub(super) mod spanish;
pub(super) mod tamil;

use ::std::collections::HashMap;

use super::{KeyModel, KeySlot, LayoutAttributes, Locale};

/// Attributes and slot overrides for `locale`. Placeholder locales yield the
/// English attributes and no overrides.
pub(super) fn for_locale(locale: Locale) -> (LayoutAttributes, HashMap<KeySlot, KeyModel>) {
    match locale {
        Locale::English | Locale::Italian | Locale::Mandarin => {
            (english::attributes(), HashMap::new())
        }
        Locale::Arabic => (arabic::attributes(), arabic::overrides()),
        Locale::French => (french::attributes(), french::overrides()),
        Locale::German => (german::attributes(), german::overrides()),
        Locale::Russian => (russian::attributes(), russian::overrides()),
        Locale::Sanskrit => (sanskrit::attributes(), sanskrit::overrides()),
        Locale::Spanish => (spanish::attributes(), spanish::overrides()),
        Locale::Tamil => (tamil::attributes(), tamil::overrides()),
    }
}

/// Maps the ten digit slots (`1` to `9`, then `0`) to the code points of a
/// native digit block whose zero is `zero`. Each digit keeps its English
/// output and shifted symbol and gains the native digit on AltGr.
pub(super) fn native_digits(zero: u32, tooltip_prefix: &str) -> HashMap<KeySlot, KeyModel> {
    use ::strum::IntoEnumIterator;

    KeySlot::iter()
        .filter(|slot| slot.is_digit())
        .filter_map(|slot| {
            let value = slot.as_ref().chars().next()?.to_digit(10)?;
            let native = char::from_u32(zero + value)?;
            let key = english::key(slot)
                .with_alt_gr(native)
                .with_alt_gr_tooltip(format!("{tooltip_prefix} {value}"));
            Some((slot, key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_native_digits() {
        let digits = native_digits(0x0660, "Arabic-Indic digit");

        assert_eq!(digits.len(), 10);
        assert_eq!(digits[&KeySlot::D1].alt_gr(), Some('\u{0661}'));
        assert_eq!(digits[&KeySlot::D0].alt_gr(), Some('\u{0660}'));
        assert_eq!(digits[&KeySlot::D9].unshifted(), '9');
        assert_eq!(digits[&KeySlot::D9].shifted(), Some('('));
        assert_eq!(
            digits[&KeySlot::D5].alt_gr_tooltip(),
            Some("Arabic-Indic digit 5")
        );
    }

    #[test]
    fn test_placeholders_have_no_overrides() {
        assert!(for_locale(Locale::Italian).1.is_empty());
        assert!(for_locale(Locale::Mandarin).1.is_empty());
    }
}

//! Complete, immutable key tables for one locale.

use ::std::collections::HashMap;
use ::strum::{EnumCount, IntoEnumIterator};
use ::tracing::debug;

use super::{tables, KeyForm, KeyModel, KeySlot, Locale};

/// Direction in which text of a layout flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Keycap font sizes, chosen by how many glyphs a key shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeHints {
    pub single: f32,
    pub two_glyph: f32,
    pub three_glyph: f32,
}

impl Default for FontSizeHints {
    fn default() -> Self {
        Self {
            single: 20.0,
            two_glyph: 16.0,
            three_glyph: 13.0,
        }
    }
}

impl FontSizeHints {
    pub fn for_form(&self, form: KeyForm) -> f32 {
        match form {
            KeyForm::Single => self.single,
            KeyForm::TwoGlyph => self.two_glyph,
            KeyForm::ThreeGlyph => self.three_glyph,
        }
    }
}

/// Locale-wide properties of a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Whether the layout has any AltGr glyphs. AltGr cannot be activated
    /// otherwise.
    pub uses_alt_gr: bool,
    pub text_direction: TextDirection,
    /// Font family suggested for rendering keycaps.
    pub keycap_font_family: &'static str,
    /// Whether a help page exists for the layout.
    pub help_available: bool,
    pub font_size_hints: FontSizeHints,
}

impl Default for LayoutAttributes {
    fn default() -> Self {
        Self {
            uses_alt_gr: false,
            text_direction: TextDirection::LeftToRight,
            keycap_font_family: "Segoe UI",
            help_available: false,
            font_size_hints: FontSizeHints::default(),
        }
    }
}

/// The full mapping of every [`KeySlot`] to a [`KeyModel`] for one locale.
///
/// A definition is the English base table with the locale's sparse set of
/// overrides applied on top. It is built eagerly, validated once, and never
/// mutated afterwards, so a single instance can be shared by any number of
/// keyboards.
///
/// Definitions are normally obtained through a [`LayoutRegistry`] rather than
/// constructed directly, so that each locale is only built once.
///
/// [`LayoutRegistry`]: crate::layout::LayoutRegistry
#[derive(Debug)]
pub struct LayoutDefinition {
    /// The locale whose table was used, after placeholder fallback.
    locale: Locale,
    attributes: LayoutAttributes,
    keys: Vec<KeyModel>,
}

impl LayoutDefinition {
    /// Build the definition for `locale`. Locales without a table of their
    /// own produce the English definition.
    ///
    /// # Panics
    ///
    /// Panics if the locale tables are inconsistent: a table which does not
    /// cover all 46 slots, or a key with an AltGr glyph in a layout that does
    /// not use AltGr. Both are programming errors in the tables.
    pub fn new(locale: Locale) -> Self {
        let locale = locale.effective();
        let (attributes, overrides) = tables::for_locale(locale);

        debug!(%locale, n_overrides = overrides.len(), "Building keyboard layout");
        Self::from_parts(locale, attributes, overrides)
    }

    fn from_parts(
        locale: Locale,
        attributes: LayoutAttributes,
        mut overrides: HashMap<KeySlot, KeyModel>,
    ) -> Self {
        let keys: Vec<KeyModel> = KeySlot::iter()
            .map(|slot| {
                let key = overrides
                    .remove(&slot)
                    .unwrap_or_else(|| tables::english::key(slot));
                if key.display_name().is_empty() {
                    key.with_display_name(format!("{locale} {slot}"))
                } else {
                    key
                }
            })
            .collect();

        assert_eq!(
            keys.len(),
            KeySlot::COUNT,
            "{locale} layout does not cover every key slot"
        );
        if !attributes.uses_alt_gr {
            if let Some((slot, _)) = KeySlot::iter()
                .zip(&keys)
                .find(|(_, key)| key.alt_gr().is_some())
            {
                panic!("{locale} layout does not use AltGr but {slot} has an AltGr glyph");
            }
        }

        Self {
            locale,
            attributes,
            keys,
        }
    }

    /// The locale whose table backs this definition.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn attributes(&self) -> &LayoutAttributes {
        &self.attributes
    }

    pub fn uses_alt_gr(&self) -> bool {
        self.attributes.uses_alt_gr
    }

    pub fn text_direction(&self) -> TextDirection {
        self.attributes.text_direction
    }

    /// The key model for one slot.
    pub fn key(&self, slot: KeySlot) -> &KeyModel {
        &self.keys[slot.index()]
    }

    /// Every key model, in the fixed slot order. Always 46 entries.
    pub fn key_assignments(&self) -> &[KeyModel] {
        &self.keys
    }

    /// Slot and key model pairs, in the fixed slot order.
    pub fn iter(&self) -> impl Iterator<Item = (KeySlot, &KeyModel)> {
        KeySlot::iter().zip(self.keys.iter())
    }

    /// Suggested keycap font size for one slot.
    pub fn font_size(&self, slot: KeySlot) -> f32 {
        self.attributes
            .font_size_hints
            .for_form(self.key(slot).form())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::ModifierFlags;

    use ::maplit::hashmap;
    use ::pretty_assertions::assert_eq;

    const NORMAL: ModifierFlags = ModifierFlags {
        shift_lock: false,
        caps_lock: false,
        alt_gr: false,
    };
    const SHIFT: ModifierFlags = ModifierFlags {
        shift_lock: true,
        ..NORMAL
    };
    const CAPS: ModifierFlags = ModifierFlags {
        caps_lock: true,
        ..NORMAL
    };
    const ALT_GR: ModifierFlags = ModifierFlags {
        alt_gr: true,
        ..NORMAL
    };

    macro_rules! layout_tests {
        ($($name:ident => $locale:expr),* $(,)?) => {
            $(
                ::paste::paste! {
                    #[test]
                    fn [<test_ $name _covers_every_slot>]() {
                        let layout = LayoutDefinition::new($locale);
                        assert_eq!(layout.key_assignments().len(), KeySlot::COUNT);
                        for (slot, key) in layout.iter() {
                            assert!(
                                !key.unshifted().is_control(),
                                "{slot} produces a control character"
                            );
                            assert!(!key.display_name().is_empty());
                        }
                    }

                    #[test]
                    fn [<test_ $name _non_letters_ignore_caps_lock>]() {
                        let layout = LayoutDefinition::new($locale);
                        for (slot, key) in layout.iter().filter(|(_, key)| !key.is_letter()) {
                            assert_eq!(key.text(CAPS), key.text(NORMAL), "{slot}");
                            assert_eq!(
                                key.text(ModifierFlags { caps_lock: true, ..ALT_GR }),
                                key.text(ALT_GR),
                                "{slot}"
                            );
                        }
                    }
                }
            )*
        };
    }

    layout_tests! {
        english => Locale::English,
        arabic => Locale::Arabic,
        french => Locale::French,
        german => Locale::German,
        russian => Locale::Russian,
        sanskrit => Locale::Sanskrit,
        spanish => Locale::Spanish,
        tamil => Locale::Tamil,
        italian => Locale::Italian,
        mandarin => Locale::Mandarin,
    }

    #[test]
    fn test_english_letters() {
        let layout = LayoutDefinition::new(Locale::English);
        let key = layout.key(KeySlot::A);

        assert_eq!(key.text(NORMAL), "a");
        assert_eq!(key.text(SHIFT), "A");
        assert_eq!(key.text(CAPS), "A");
        assert_eq!(layout.key(KeySlot::D1).text(SHIFT), "!");
        assert_eq!(layout.key(KeySlot::Oem2).text(SHIFT), "?");
        assert!(!layout.uses_alt_gr());
    }

    #[test]
    fn test_arabic_letters_have_no_shifted_form() {
        let layout = LayoutDefinition::new(Locale::Arabic);
        let q = layout.key(KeySlot::Q);

        assert_eq!(q.code_point(NORMAL), '\u{0636}');
        assert_eq!(q.code_point(SHIFT), '\u{0636}');
        assert_eq!(q.code_point(CAPS), '\u{0636}');
        assert_eq!(layout.key(KeySlot::D1).code_point(ALT_GR), '\u{0661}');
        assert_eq!(layout.key(KeySlot::D0).code_point(ALT_GR), '\u{0660}');
        assert_eq!(layout.text_direction(), TextDirection::RightToLeft);
    }

    #[test]
    fn test_german_swaps_y_and_z() {
        let layout = LayoutDefinition::new(Locale::German);

        assert_eq!(layout.key(KeySlot::Y).text(NORMAL), "z");
        assert_eq!(layout.key(KeySlot::Y).text(SHIFT), "Z");
        assert_eq!(layout.key(KeySlot::Z).text(NORMAL), "y");
        assert_eq!(layout.key(KeySlot::Z).text(SHIFT), "Y");
        assert_eq!(layout.key(KeySlot::Q).text(ALT_GR), "@");
        assert_eq!(layout.key(KeySlot::Oem1).text(CAPS), "Ö");
    }

    #[test]
    fn test_unoverridden_slots_inherit_english() {
        let english = LayoutDefinition::new(Locale::English);
        let tamil = LayoutDefinition::new(Locale::Tamil);

        assert_eq!(
            tamil.key(KeySlot::Y).code_point(NORMAL),
            english.key(KeySlot::Y).code_point(NORMAL)
        );
        assert_ne!(
            tamil.key(KeySlot::K).code_point(NORMAL),
            english.key(KeySlot::K).code_point(NORMAL)
        );
    }

    #[test]
    fn test_placeholder_locale_builds_english() {
        let layout = LayoutDefinition::new(Locale::Mandarin);
        assert_eq!(layout.locale(), Locale::English);
        assert_eq!(layout.key(KeySlot::Q).text(NORMAL), "q");
    }

    #[test]
    fn test_display_names() {
        let layout = LayoutDefinition::new(Locale::Russian);
        assert_eq!(layout.key(KeySlot::Oem1).display_name(), "Russian Oem1");
    }

    #[test]
    fn test_font_size_follows_key_form() {
        let layout = LayoutDefinition::new(Locale::German);
        let hints = layout.attributes().font_size_hints;

        assert_eq!(layout.font_size(KeySlot::Q), hints.three_glyph);
        assert_eq!(layout.font_size(KeySlot::W), hints.two_glyph);
    }

    #[test]
    #[should_panic(expected = "does not use AltGr")]
    fn test_alt_gr_glyph_without_alt_gr_panics() {
        LayoutDefinition::from_parts(
            Locale::English,
            LayoutAttributes::default(),
            hashmap! { KeySlot::E => KeyModel::letter('e', 'E').with_alt_gr('€') },
        );
    }
}

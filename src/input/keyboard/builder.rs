//! Builder object which constructs [`VirtualKeyboard`]s.
//!
//! [`VirtualKeyboard`]: crate::input::keyboard::VirtualKeyboard

use ::std::{rc::Rc, sync::Arc, time::Duration};

use crate::{
    input::{
        clock::{Clock, SystemClock},
        keyboard::VirtualKeyboard,
    },
    layout::{LayoutRegistry, Locale},
    settings::KeyboardSettings,
};

/// How long Shift-Lock and AltGr stay on without a key press.
pub const DEFAULT_MODIFIER_TIMEOUT: Duration = Duration::from_secs(10);

/// A builder pattern object which simplifies the process of creating a
/// [`VirtualKeyboard`].
///
/// The same builder can be re-used to create multiple keyboards with the same
/// configuration, as a type of prototype. Keyboards built from one builder
/// share its [`LayoutRegistry`].
///
/// ```
/// use ::std::time::Duration;
/// use ::vkbd::{input::keyboard::Builder, layout::Locale};
///
/// let keyboard = Builder::new()
///     .with_layout(Locale::French)
///     .with_modifier_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(keyboard.locale(), Locale::French);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    locale: Locale,
    registry: Arc<LayoutRegistry>,
    modifier_timeout: Duration,
    clock: Rc<dyn Clock>,
    force_left_to_right: bool,
    caps_lock_clears_modifiers: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Construct a new builder. Default values will be used for all properties
    /// until explicitly set.
    pub fn new() -> Self {
        Self {
            locale: Locale::English,
            registry: Arc::new(LayoutRegistry::new()),
            modifier_timeout: DEFAULT_MODIFIER_TIMEOUT,
            clock: Rc::new(SystemClock),
            force_left_to_right: false,
            caps_lock_clears_modifiers: true,
        }
    }

    /// Construct a builder from persisted settings.
    pub fn from_settings(settings: &KeyboardSettings) -> Self {
        Self::new()
            .with_layout(settings.layout)
            .with_modifier_timeout(settings.modifier_timeout())
            .with_force_left_to_right(settings.force_left_to_right)
            .with_caps_lock_clears_modifiers(settings.caps_lock_clears_modifiers)
    }

    /// Set the initial layout.
    ///
    /// Defaults to [`Locale::English`] if not set.
    pub fn with_layout(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Share an existing registry instead of creating a new one.
    pub fn with_registry(self, registry: Arc<LayoutRegistry>) -> Self {
        Self { registry, ..self }
    }

    /// Set how long Shift-Lock and AltGr stay on.
    ///
    /// Defaults to [`DEFAULT_MODIFIER_TIMEOUT`] if not set. The timeout must
    /// be non-zero, or the modifiers would release as soon as they engage.
    pub fn with_modifier_timeout(self, modifier_timeout: Duration) -> Self {
        debug_assert!(
            !modifier_timeout.is_zero(),
            "modifier timeout must be non-zero"
        );
        Self {
            modifier_timeout,
            ..self
        }
    }

    /// Set the time source for the modifier timeouts.
    ///
    /// Defaults to [`SystemClock`] if not set.
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            ..self
        }
    }

    /// Force text typed with a right-to-left layout to be inserted
    /// left-to-right.
    ///
    /// Defaults to `false` if not set.
    pub fn with_force_left_to_right(self, force_left_to_right: bool) -> Self {
        Self {
            force_left_to_right,
            ..self
        }
    }

    /// Whether changing Caps Lock releases Shift-Lock and AltGr.
    ///
    /// Defaults to `true` if not set.
    pub fn with_caps_lock_clears_modifiers(self, caps_lock_clears_modifiers: bool) -> Self {
        Self {
            caps_lock_clears_modifiers,
            ..self
        }
    }

    /// Gets the currently set layout.
    pub fn layout(&self) -> Locale {
        self.locale
    }

    /// Gets the registry keyboards will resolve layouts from.
    pub fn registry(&self) -> &Arc<LayoutRegistry> {
        &self.registry
    }

    /// Gets the currently set modifier timeout.
    pub fn modifier_timeout(&self) -> Duration {
        self.modifier_timeout
    }

    pub fn force_left_to_right(&self) -> bool {
        self.force_left_to_right
    }

    pub fn caps_lock_clears_modifiers(&self) -> bool {
        self.caps_lock_clears_modifiers
    }

    /// Build a new [`VirtualKeyboard`] with the properties of the builder.
    ///
    /// The builder can be re-used to create multiple keyboards with these
    /// same properties.
    pub fn build(&self) -> VirtualKeyboard {
        VirtualKeyboard::new(
            self.registry.clone(),
            self.locale,
            self.modifier_timeout,
            self.clock.clone(),
            self.force_left_to_right,
            self.caps_lock_clears_modifiers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let builder = Builder::new();

        assert_eq!(builder.layout(), Locale::English);
        assert_eq!(builder.modifier_timeout(), Duration::from_secs(10));
        assert!(!builder.force_left_to_right());
        assert!(builder.caps_lock_clears_modifiers());
    }

    #[test]
    fn test_from_settings() {
        let settings = KeyboardSettings {
            layout: Locale::Arabic,
            force_left_to_right: true,
            modifier_timeout_secs: 3,
            caps_lock_clears_modifiers: false,
        };
        let builder = Builder::from_settings(&settings);

        assert_eq!(builder.layout(), Locale::Arabic);
        assert_eq!(builder.modifier_timeout(), Duration::from_secs(3));
        assert!(builder.force_left_to_right());
        assert!(!builder.caps_lock_clears_modifiers());
    }

    #[test]
    fn test_keyboards_share_the_builder_registry() {
        let builder = Builder::new().with_layout(Locale::German);
        let first = builder.build();
        let second = builder.with_layout(Locale::Russian).build();

        assert_eq!(first.locale(), Locale::German);
        assert_eq!(second.locale(), Locale::Russian);
        assert!(Arc::ptr_eq(first.registry(), second.registry()));
        assert_eq!(first.registry().cached_count(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "modifier timeout must be non-zero")]
    fn test_zero_timeout() {
        Builder::new().with_modifier_timeout(Duration::ZERO);
    }
}

//! Resolution and caching of [`LayoutDefinition`]s.

use ::parking_lot::Mutex;
use ::std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};
use ::tap::Pipe;
use ::tracing::{debug, warn};

use super::{LayoutDefinition, Locale};

/// A cache which resolves a [`Locale`] to its shared [`LayoutDefinition`].
///
/// A layout is built the first time it is requested. Later requests for the
/// same locale return a clone of the same [`Arc`], so the tables are only
/// ever built once per registry. Cached layouts live as long as the registry.
///
/// The registry is owned by the embedding application and handed to each
/// keyboard, typically inside an [`Arc`]. Several keyboards with different
/// locales can share one registry.
///
/// ```
/// use ::std::sync::Arc;
/// use ::vkbd::layout::{KeySlot, LayoutRegistry, Locale};
///
/// let registry = LayoutRegistry::new();
/// let german = registry.resolve(Locale::German);
///
/// assert!(Arc::ptr_eq(&german, &registry.resolve(Locale::German)));
/// assert_eq!(german.key(KeySlot::Y).unshifted(), 'z');
/// ```
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    layouts: Mutex<HashMap<Locale, Arc<LayoutDefinition>>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cached layout for `locale`, or builds it for the first time.
    ///
    /// Locales without a table of their own resolve to the English layout.
    /// The English instance is then cached under the requested locale too,
    /// so the fallback is reference-stable like any other layout.
    pub fn resolve(&self, locale: Locale) -> Arc<LayoutDefinition> {
        let mut layouts = self.layouts.lock();

        if let Some(layout) = layouts.get(&locale) {
            return layout.clone();
        }

        let effective = locale.effective();
        if effective != locale {
            warn!(%locale, "No keyboard layout for locale, falling back to {effective}");
        }

        let layout = match layouts.entry(effective) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => LayoutDefinition::new(effective)
                .pipe(Arc::new)
                .pipe(|layout| entry.insert(layout).clone()),
        };
        layouts.insert(locale, layout.clone());

        debug!(%locale, "Resolved keyboard layout");
        layout
    }

    /// Resolves a persisted locale name. Unknown names resolve to the English
    /// layout.
    pub fn resolve_name(&self, name: &str) -> Arc<LayoutDefinition> {
        let locale = Locale::from_name(name).unwrap_or_else(|err| {
            warn!("{err}, falling back to {}", Locale::English);
            Locale::English
        });
        self.resolve(locale)
    }

    /// Locales with a table of their own, in a fixed order.
    pub fn available_locales(&self) -> Vec<Locale> {
        Locale::implemented().collect()
    }

    /// Number of locales resolved so far, fallbacks included.
    pub fn cached_count(&self) -> usize {
        self.layouts.lock().len()
    }
}

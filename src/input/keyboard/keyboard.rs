//! Modifier state tracking and text injection for one keyboard session.

use ::std::{fmt, rc::Rc, sync::Arc, time::Duration};
use ::tracing::{debug, trace};

use super::{
    state::{Expired, ModifierState},
    Builder, KeyEvent, ModifierFlags, ModifierMode, ShiftOverride, SpecialKey,
};
use crate::{
    errors::{Context, Result},
    inject::{InjectionEvent, InjectionTarget},
    input::clock::Clock,
    layout::{KeySlot, LayoutDefinition, LayoutRegistry, Locale, ModifierKey, TextDirection},
};

type InjectionListener = Box<dyn FnMut(&InjectionEvent)>;

/// The central object which tracks modifier state and turns key presses into
/// text for an [`InjectionTarget`].
///
/// # Modifier State
///
/// Shift and AltGr on an on-screen keyboard cannot be held down while another
/// key is clicked, so both latch instead. Clicking Shift locks it until the
/// next character key is pressed, Shift is clicked again, or the modifier
/// timeout passes. AltGr works the same way, except that pressing a
/// character key does not release it. Shift-Lock and AltGr are mutually
/// exclusive: engaging one releases the other. AltGr can only be engaged on
/// layouts which use it.
///
/// Caps Lock has no timeout. By default, changing Caps Lock also releases
/// Shift-Lock and AltGr; see [`Builder::with_caps_lock_clears_modifiers`].
///
/// Timeouts are deadlines checked against the keyboard's [`Clock`] every time
/// state is read or changed. [`poll_timers`] applies any expiry eagerly and
/// reports it, which is useful for refreshing keycaps from a UI timer.
///
/// # Text Injection
///
/// Typed text goes to the bound [`InjectionTarget`]. With no target bound
/// the keyboard is idle: key presses are ignored and leave state untouched.
/// Unbinding the target ends the session and resets all modifiers.
///
/// A [`VirtualKeyboard`] is `!Send + !Sync`: like the UI it serves, it lives
/// on one thread. The layouts it uses are shared and thread-safe.
///
/// # Example
///
/// ```
/// use ::std::{cell::RefCell, rc::Rc};
/// use ::vkbd::{
///     inject::TextBuffer,
///     input::keyboard::VirtualKeyboard,
///     layout::KeySlot,
/// };
///
/// let buffer = Rc::new(RefCell::new(TextBuffer::new()));
/// let mut keyboard = VirtualKeyboard::default();
/// keyboard.bind_target(buffer.clone());
///
/// keyboard.toggle_shift();
/// keyboard.press_key(KeySlot::H).unwrap();
/// keyboard.press_key(KeySlot::I).unwrap();
///
/// assert_eq!(buffer.borrow().text(), "Hi");
/// assert!(!keyboard.is_shift_locked());
/// ```
///
/// [`poll_timers`]: Self::poll_timers
pub struct VirtualKeyboard {
    registry: Arc<LayoutRegistry>,
    /// The locale last requested, which may be a placeholder backed by
    /// another locale's layout.
    locale: Locale,
    layout: Arc<LayoutDefinition>,
    state: ModifierState,
    clock: Rc<dyn Clock>,
    modifier_timeout: Duration,
    force_left_to_right: bool,
    caps_lock_clears_modifiers: bool,
    target: Option<Box<dyn InjectionTarget>>,
    listener: Option<InjectionListener>,
}

impl fmt::Debug for VirtualKeyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualKeyboard")
            .field("locale", &self.locale)
            .field("flags", &self.flags())
            .field("has_target", &self.has_target())
            .finish_non_exhaustive()
    }
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl VirtualKeyboard {
    /// Construct a new keyboard. Usually called through [`Builder::build`].
    pub fn new(
        registry: Arc<LayoutRegistry>,
        locale: Locale,
        modifier_timeout: Duration,
        clock: Rc<dyn Clock>,
        force_left_to_right: bool,
        caps_lock_clears_modifiers: bool,
    ) -> Self {
        debug!(%locale, "Creating virtual keyboard");
        Self {
            layout: registry.resolve(locale),
            registry,
            locale,
            state: ModifierState::default(),
            clock,
            modifier_timeout,
            force_left_to_right,
            caps_lock_clears_modifiers,
            target: None,
            listener: None,
        }
    }

    /// Shorthand for [`Builder::new`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The most recently selected locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The active layout.
    pub fn layout(&self) -> &Arc<LayoutDefinition> {
        &self.layout
    }

    pub fn registry(&self) -> &Arc<LayoutRegistry> {
        &self.registry
    }

    /// Locales which can be switched to, in a fixed order.
    pub fn available_locales(&self) -> Vec<Locale> {
        self.registry.available_locales()
    }

    /// Binds the target which receives typed text, starting a new session.
    /// Any previously bound target is unbound first and returned.
    pub fn bind_target(
        &mut self,
        target: impl InjectionTarget + 'static,
    ) -> Option<Box<dyn InjectionTarget>> {
        let previous = self.unbind_target();
        debug!("Binding injection target");
        self.target = Some(Box::new(target));
        previous
    }

    /// Unbinds the current target, ending the session. All modifier state,
    /// Caps Lock included, is reset.
    pub fn unbind_target(&mut self) -> Option<Box<dyn InjectionTarget>> {
        let previous = self.target.take();
        if previous.is_some() {
            debug!("Unbinding injection target");
            self.state.reset();
        }
        previous
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Registers a callback which observes every successful insertion and
    /// deletion, e.g. to play a key click.
    pub fn set_injection_listener(&mut self, listener: impl FnMut(&InjectionEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Current modifier flags, with any passed deadlines already applied.
    pub fn flags(&self) -> ModifierFlags {
        self.state.flags(self.clock.now())
    }

    pub fn mode(&self) -> ModifierMode {
        self.flags().mode()
    }

    pub fn is_shift_locked(&self) -> bool {
        self.flags().shift_lock
    }

    pub fn is_caps_lock(&self) -> bool {
        self.flags().caps_lock
    }

    pub fn is_alt_gr_active(&self) -> bool {
        self.flags().alt_gr
    }

    /// The text pressing `slot` would type right now.
    pub fn current_text(&self, slot: KeySlot) -> String {
        self.layout.key(slot).text(self.flags())
    }

    /// The code point pressing `slot` would type right now.
    pub fn current_code_point(&self, slot: KeySlot) -> char {
        self.layout.key(slot).code_point(self.flags())
    }

    /// The tooltip for `slot` in the current modifier state.
    pub fn current_tooltip(&self, slot: KeySlot) -> Option<&str> {
        self.layout.key(slot).tooltip(self.flags())
    }

    /// The tooltip for a modifier key in the current state.
    pub fn modifier_tooltip(&self, key: ModifierKey) -> &'static str {
        key.tooltip(self.flags(), self.layout.uses_alt_gr())
    }

    /// Flips Shift-Lock. Engaging it releases AltGr.
    pub fn toggle_shift(&mut self) {
        self.poll_timers();
        self.state
            .toggle_shift(self.clock.now(), self.modifier_timeout);
        trace!(shift_lock = self.is_shift_locked(), "Toggled Shift");
    }

    /// Flips AltGr. Engaging it releases Shift-Lock. Does nothing if the
    /// layout does not use AltGr.
    pub fn toggle_alt_gr(&mut self) {
        if !self.layout.uses_alt_gr() {
            trace!(locale = %self.locale, "Ignoring AltGr, layout does not use it");
            return;
        }
        self.poll_timers();
        self.state
            .toggle_alt_gr(self.clock.now(), self.modifier_timeout);
        trace!(alt_gr = self.is_alt_gr_active(), "Toggled AltGr");
    }

    pub fn set_caps_lock(&mut self, on: bool) {
        self.poll_timers();
        self.state.set_caps_lock(on, self.caps_lock_clears_modifiers);
        trace!(caps_lock = on, "Set Caps Lock");
    }

    pub fn toggle_caps_lock(&mut self) {
        let on = !self.is_caps_lock();
        self.set_caps_lock(on);
    }

    /// Presses one of the modifier keys.
    pub fn press_modifier(&mut self, key: ModifierKey) {
        match key {
            ModifierKey::Shift => self.toggle_shift(),
            ModifierKey::CapsLock => self.toggle_caps_lock(),
            ModifierKey::AltGr => self.toggle_alt_gr(),
        }
    }

    /// Types the current output of `slot` into the bound target and releases
    /// Shift-Lock. AltGr stays on.
    ///
    /// Returns the text typed, or `None` if no target is bound. If the target
    /// rejects the text, the error is returned and state is unchanged.
    pub fn press_key(&mut self, slot: KeySlot) -> Result<Option<String>> {
        self.press(slot, None)
    }

    /// Like [`press_key`], but the shifted or unshifted output is chosen by
    /// `shift` rather than by Shift-Lock. Caps Lock and AltGr still apply.
    ///
    /// [`press_key`]: Self::press_key
    pub fn press_key_with(&mut self, slot: KeySlot, shift: ShiftOverride) -> Result<Option<String>> {
        self.press(slot, Some(shift))
    }

    /// Types the text of a special key and releases Shift-Lock.
    pub fn press_special(&mut self, key: SpecialKey) -> Result<Option<String>> {
        self.poll_timers();
        if self.target.is_none() {
            trace!(%key, "No injection target bound, ignoring key");
            return Ok(None);
        }

        self.inject(key.text())
            .context(format!("Failed to type {key}"))?;
        self.state.release_shift();
        Ok(Some(key.text().to_owned()))
    }

    /// Deletes the code point before the caret of the bound target.
    ///
    /// Returns `false` if no target is bound.
    pub fn backspace(&mut self) -> Result<bool> {
        let Some(target) = self.target.as_mut() else {
            trace!("No injection target bound, ignoring backspace");
            return Ok(false);
        };

        target.backspace().context("Failed to delete character")?;
        trace!("Deleted character");
        if let Some(listener) = self.listener.as_mut() {
            listener(&InjectionEvent::Deleted);
        }
        Ok(true)
    }

    /// Switches to another layout. Caps Lock is kept; Shift-Lock and AltGr
    /// are released.
    pub fn switch_layout(&mut self, locale: Locale) {
        debug!(from = %self.locale, to = %locale, "Switching keyboard layout");
        self.layout = self.registry.resolve(locale);
        self.locale = locale;
        self.state.release_latches();
    }

    /// Dispatches a key event. Returns the text typed, if any.
    pub fn process_evt(&mut self, evt: KeyEvent) -> Result<Option<String>> {
        match evt {
            KeyEvent::Key { slot, shift } => self.press(slot, shift),
            KeyEvent::Modifier(key) => {
                self.press_modifier(key);
                Ok(None)
            }
            KeyEvent::Special(key) => self.press_special(key),
            KeyEvent::Backspace => self.backspace().map(|_| None),
        }
    }

    /// Releases Shift-Lock and AltGr if their timeouts have passed. Returns
    /// the modifiers which were released.
    pub fn poll_timers(&mut self) -> Vec<ModifierKey> {
        let Expired { shift, alt_gr } = self.state.expire(self.clock.now());

        let mut released = Vec::new();
        if shift {
            trace!("Shift-Lock timed out");
            released.push(ModifierKey::Shift);
        }
        if alt_gr {
            trace!("AltGr timed out");
            released.push(ModifierKey::AltGr);
        }
        released
    }

    fn press(&mut self, slot: KeySlot, shift: Option<ShiftOverride>) -> Result<Option<String>> {
        self.poll_timers();
        if self.target.is_none() {
            trace!(%slot, "No injection target bound, ignoring key");
            return Ok(None);
        }

        let mut flags = self.flags();
        if let Some(shift) = shift {
            flags.shift_lock = shift == ShiftOverride::Shifted;
        }
        let text = self.layout.key(slot).text(flags);

        self.inject(&text)
            .context(format!("Failed to type {slot}"))?;
        if self.state.release_shift() {
            trace!("Released Shift-Lock after key press");
        }
        Ok(Some(text))
    }

    fn inject(&mut self, text: &str) -> Result<()> {
        let force_ltr =
            self.force_left_to_right && self.layout.text_direction() == TextDirection::RightToLeft;
        let Some(target) = self.target.as_mut() else {
            return Ok(());
        };

        if force_ltr {
            target.insert_text_forced_ltr(text)?;
        } else {
            target.insert_text(text)?;
        }
        trace!(text, force_ltr, "Injected text");

        if let Some(listener) = self.listener.as_mut() {
            listener(&InjectionEvent::Inserted(text.to_owned()));
        }
        Ok(())
    }
}

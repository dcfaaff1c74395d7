//! Shift-Lock, Caps Lock and AltGr state.

use ::std::time::{Duration, Instant};

/// A snapshot of the modifier flags, as seen by key resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierFlags {
    pub shift_lock: bool,
    pub caps_lock: bool,
    pub alt_gr: bool,
}

impl ModifierFlags {
    /// Which of the mutually exclusive modes the flags describe. Caps Lock is
    /// orthogonal and not part of the mode.
    pub fn mode(&self) -> ModifierMode {
        if self.shift_lock {
            ModifierMode::ShiftLocked
        } else if self.alt_gr {
            ModifierMode::AltGrActive
        } else {
            ModifierMode::Normal
        }
    }
}

/// The mutually exclusive modifier modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModifierMode {
    #[default]
    Normal,
    ShiftLocked,
    AltGrActive,
}

/// A modifier which stays on until it is released or its deadline passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Latch {
    #[default]
    Released,
    /// `until` is `None` if the timeout is too large to represent, in which
    /// case the latch never expires.
    Engaged { until: Option<Instant> },
}

impl Latch {
    /// Engages the latch, replacing any previous deadline.
    fn engage(&mut self, now: Instant, timeout: Duration) {
        *self = Self::Engaged {
            until: now.checked_add(timeout),
        };
    }

    /// Returns `true` if the latch was engaged (expired or not).
    fn release(&mut self) -> bool {
        ::std::mem::take(self) != Self::Released
    }

    fn is_engaged(&self, now: Instant) -> bool {
        match self {
            Self::Released => false,
            Self::Engaged { until } => until.map_or(true, |until| now < until),
        }
    }

    /// Releases the latch if its deadline has passed. Returns `true` if it
    /// did.
    fn expire(&mut self, now: Instant) -> bool {
        if matches!(self, Self::Engaged { .. }) && !self.is_engaged(now) {
            *self = Self::Released;
            true
        } else {
            false
        }
    }
}

/// Which latches [`ModifierState::expire`] released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Expired {
    pub(super) shift: bool,
    pub(super) alt_gr: bool,
}

/// The modifier state of one keyboard session. Only the keyboard mutates it.
///
/// Shift-Lock and AltGr are mutually exclusive: engaging one releases the
/// other. Each carries its own auto-reset deadline.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct ModifierState {
    shift: Latch,
    alt_gr: Latch,
    caps_lock: bool,
}

impl ModifierState {
    pub(super) fn flags(&self, now: Instant) -> ModifierFlags {
        ModifierFlags {
            shift_lock: self.shift.is_engaged(now),
            caps_lock: self.caps_lock,
            alt_gr: self.alt_gr.is_engaged(now),
        }
    }

    /// Flips Shift-Lock. Returns the new Shift-Lock state.
    pub(super) fn toggle_shift(&mut self, now: Instant, timeout: Duration) -> bool {
        if self.shift.is_engaged(now) {
            self.shift.release();
            false
        } else {
            self.alt_gr.release();
            self.shift.engage(now, timeout);
            true
        }
    }

    /// Flips AltGr. Returns the new AltGr state.
    pub(super) fn toggle_alt_gr(&mut self, now: Instant, timeout: Duration) -> bool {
        if self.alt_gr.is_engaged(now) {
            self.alt_gr.release();
            false
        } else {
            self.shift.release();
            self.alt_gr.engage(now, timeout);
            true
        }
    }

    /// Sets Caps Lock. With `clears_latches`, Shift-Lock and AltGr are
    /// released whenever Caps Lock changes.
    pub(super) fn set_caps_lock(&mut self, on: bool, clears_latches: bool) {
        if self.caps_lock != on && clears_latches {
            self.release_latches();
        }
        self.caps_lock = on;
    }

    pub(super) fn release_shift(&mut self) -> bool {
        self.shift.release()
    }

    pub(super) fn release_latches(&mut self) {
        self.shift.release();
        self.alt_gr.release();
    }

    pub(super) fn expire(&mut self, now: Instant) -> Expired {
        Expired {
            shift: self.shift.expire(now),
            alt_gr: self.alt_gr.expire(now),
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}

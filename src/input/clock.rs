//! Time sources for the modifier auto-reset timers.

use ::std::{
    cell::Cell,
    fmt::Debug,
    rc::Rc,
    time::{Duration, Instant},
};

/// A source of the current time.
///
/// The keyboard never sleeps or spawns timers. A pending auto-reset is a
/// deadline which is compared against [`Clock::now`] whenever state is read
/// or changed, so swapping the clock is all it takes to drive the timers
/// deterministically.
pub trait Clock: Debug {
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock which only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the keyboard.
///
/// ```
/// use ::std::time::Duration;
/// use ::vkbd::input::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let keyboard_clock = clock.clone();
/// let start = keyboard_clock.now();
///
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(keyboard_clock.now() - start, Duration::from_secs(10));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward, for every clone.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_manual_clock_stands_still() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();

        clock.advance(Duration::from_millis(1500));
        other.advance(Duration::from_millis(500));

        assert_eq!(clock.now() - start, Duration::from_secs(2));
        assert_eq!(clock.now(), other.now());
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}

//! Reactions to viewport visibility signals.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    Ignore,
    Fire,
}

/// Nav stickiness follows the header for as long as the page lives:
/// once the header leaves the viewport the nav sticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StickySignal {
    sticky: bool,
}

impl StickySignal {
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        self.sticky = !is_intersecting;
        self.sticky
    }
}

/// Fires on the first intersecting signal and never again.
/// Used for section reveal and lazy images; the caller unobserves on `Fire`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneShotSignal {
    fired: bool,
}

impl OneShotSignal {
    pub fn observe(&mut self, is_intersecting: bool) -> SignalOutcome {
        if self.fired || !is_intersecting {
            return SignalOutcome::Ignore;
        }
        self.fired = true;
        SignalOutcome::Fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_toggles_indefinitely() {
        let mut signal = StickySignal::default();
        assert_eq!(signal, StickySignal { sticky: false });
        assert!(signal.observe(false));
        assert!(!signal.observe(true));
        assert!(signal.observe(false));
        assert!(signal.observe(false));
    }

    #[test]
    fn one_shot_waits_for_intersection() {
        let mut signal = OneShotSignal::default();
        assert_eq!(signal.observe(false), SignalOutcome::Ignore);
        assert_eq!(signal.observe(false), SignalOutcome::Ignore);
        assert_eq!(signal.observe(true), SignalOutcome::Fire);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut signal = OneShotSignal::default();
        assert_eq!(signal.observe(true), SignalOutcome::Fire);
        assert_eq!(signal.observe(false), SignalOutcome::Ignore);
        assert_eq!(signal.observe(true), SignalOutcome::Ignore);
    }
}

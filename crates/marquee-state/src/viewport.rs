use std::cell::Cell;

use marquee_core::{Signal, signal};

/// Ambient "user prefers reduced motion" condition.
///
/// Owned by the platform layer, consumed by the engines; `signal()`
/// hands out the observable the typing effect subscribes to.
#[derive(Clone)]
pub struct MotionPreference {
    reduce: Signal<bool>,
}

impl MotionPreference {
    pub fn new(initially_reduced: bool) -> Self {
        Self {
            reduce: signal(initially_reduced),
        }
    }

    pub fn get(&self) -> bool {
        self.reduce.get()
    }

    /// Called when the ambient media condition changes.
    pub fn set(&self, reduce: bool) {
        self.reduce.set(reduce);
    }

    pub fn signal(&self) -> Signal<bool> {
        self.reduce.clone()
    }
}

/// "Element has been seen" condition: latches true on the first
/// sighting and never reverts for the lifetime of the instance.
#[derive(Default)]
pub struct InViewLatch {
    seen: Cell<bool>,
}

impl InViewLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self, visible: bool) {
        if visible {
            self.seen.set(true);
        }
    }

    pub fn is_in_view(&self) -> bool {
        self.seen.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_never_reverts() {
        let latch = InViewLatch::new();
        assert!(!latch.is_in_view());

        latch.observe(false);
        assert!(!latch.is_in_view());

        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_in_view());
    }

    #[test]
    fn motion_preference_tracks_the_ambient_condition() {
        let motion = MotionPreference::new(false);
        assert!(!motion.get());
        motion.set(true);
        assert!(motion.get());
        assert!(motion.signal().get());
    }
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use marquee_core::{Signal, SubKey, TimerKey, Timers};
use unicode_segmentation::UnicodeSegmentation;
use web_time::Duration;

/// Pause multiplier applied to the reveal that follows one of `. , ! ? ; :`.
const PUNCTUATION_PAUSE: u32 = 4;

fn is_pause_grapheme(g: &str) -> bool {
    matches!(g, "." | "," | "!" | "?" | ";" | ":")
}

#[derive(Clone, Copy, Debug)]
pub struct TypingSpec {
    /// Delay per revealed grapheme.
    pub speed: Duration,
    /// Delay before the first reveal of a fresh text.
    pub initial_delay: Duration,
}

impl Default for TypingSpec {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(50),
            initial_delay: Duration::ZERO,
        }
    }
}

struct Inner {
    text: String,
    /// Byte offset after each grapheme; `boundaries[0] == 0`, so
    /// `&text[..boundaries[revealed]]` is always a valid slice.
    boundaries: Vec<usize>,
    revealed: usize,
    complete: bool,
    active: bool,
    pending: Option<TimerKey>,
}

impl Inner {
    fn graphemes(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn cancel_pending(&mut self, timers: &Timers) {
        if let Some(key) = self.pending.take() {
            timers.cancel(key);
        }
    }

    fn finish_instantly(&mut self, timers: &Timers) {
        self.cancel_pending(timers);
        self.revealed = self.graphemes();
        self.complete = true;
    }
}

/// Reveals a string one grapheme at a time on the shared timer queue.
///
/// One instance per rendered text slot. Changing the text restarts the
/// reveal from scratch; deactivating freezes it in place; dropping the
/// engine cancels everything, so no tick can fire against stale state.
pub struct TypingEffect {
    inner: Rc<RefCell<Inner>>,
    timers: Timers,
    reduced_motion: Signal<bool>,
    motion_sub: SubKey,
    spec: TypingSpec,
}

impl TypingEffect {
    pub fn new(timers: Timers, reduced_motion: Signal<bool>, spec: TypingSpec) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            text: String::new(),
            boundaries: vec![0],
            revealed: 0,
            complete: false,
            active: true,
            pending: None,
        }));

        // A flip to reduced motion mid-reveal completes instantly, the
        // same way the original effect re-ran with the full text.
        let motion_sub = {
            let weak = Rc::downgrade(&inner);
            let timers = timers.clone();
            reduced_motion.subscribe(move |&reduce| {
                if !reduce {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().finish_instantly(&timers);
                }
            })
        };

        Self {
            inner,
            timers,
            reduced_motion,
            motion_sub,
            spec,
        }
    }

    /// Adopts `text` and restarts the reveal; identical text is a no-op.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        if self.inner.borrow().text == text {
            return;
        }
        {
            let mut s = self.inner.borrow_mut();
            s.cancel_pending(&self.timers);
            s.boundaries = grapheme_boundaries(&text);
            s.text = text;
            s.revealed = 0;
            s.complete = false;
        }
        self.kick(self.spec.initial_delay);
    }

    /// Restarts the reveal of the current text from the beginning.
    pub fn restart(&self) {
        {
            let mut s = self.inner.borrow_mut();
            s.cancel_pending(&self.timers);
            s.revealed = 0;
            s.complete = false;
        }
        self.kick(self.spec.initial_delay);
    }

    /// Gates advancement. Deactivating freezes the reveal in place
    /// (idle, not reset); reactivating resumes from where it stopped.
    pub fn set_active(&self, active: bool) {
        let resume_delay = {
            let mut s = self.inner.borrow_mut();
            if s.active == active {
                return;
            }
            s.active = active;
            if !active {
                s.cancel_pending(&self.timers);
                return;
            }
            if s.complete {
                return;
            }
            if s.revealed == 0 {
                self.spec.initial_delay
            } else {
                self.spec.speed
            }
        };
        self.kick(resume_delay);
    }

    pub fn displayed_text(&self) -> String {
        let s = self.inner.borrow();
        s.text[..s.boundaries[s.revealed]].to_string()
    }

    pub fn full_text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn revealed(&self) -> usize {
        self.inner.borrow().revealed
    }

    pub fn is_complete(&self) -> bool {
        self.inner.borrow().complete
    }

    fn kick(&self, delay: Duration) {
        if self.reduced_motion.get() {
            self.inner.borrow_mut().finish_instantly(&self.timers);
            return;
        }
        {
            let s = self.inner.borrow();
            if !s.active || s.text.is_empty() || s.complete {
                return;
            }
        }
        schedule_reveal(&self.timers, &self.inner, self.spec, delay);
    }
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        self.reduced_motion.unsubscribe(self.motion_sub);
        self.inner.borrow_mut().cancel_pending(&self.timers);
    }
}

fn grapheme_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = vec![0];
    boundaries.extend(text.grapheme_indices(true).map(|(i, g)| i + g.len()));
    boundaries
}

fn schedule_reveal(timers: &Timers, inner: &Rc<RefCell<Inner>>, spec: TypingSpec, delay: Duration) {
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
    let timers2 = timers.clone();
    let key = timers.schedule(delay, move || {
        let Some(strong) = weak.upgrade() else { return };
        let next_delay = {
            let mut s = strong.borrow_mut();
            s.pending = None;
            if !s.active || s.complete {
                return;
            }
            s.revealed += 1;
            if s.revealed >= s.graphemes() {
                s.complete = true;
                None
            } else {
                let just = &s.text[s.boundaries[s.revealed - 1]..s.boundaries[s.revealed]];
                Some(if is_pause_grapheme(just) {
                    spec.speed * PUNCTUATION_PAUSE
                } else {
                    spec.speed
                })
            }
        };
        if let Some(d) = next_delay {
            schedule_reveal(&timers2, &strong, spec, d);
        }
    });
    inner.borrow_mut().pending = Some(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{TestClock, signal};
    use std::rc::Rc;

    fn harness() -> (Rc<TestClock>, Timers, Signal<bool>) {
        let clock = TestClock::new();
        let timers = Timers::new(clock.clone());
        (clock, timers, signal(false))
    }

    fn spec_40ms() -> TypingSpec {
        TypingSpec {
            speed: Duration::from_millis(40),
            initial_delay: Duration::ZERO,
        }
    }

    fn step(clock: &TestClock, timers: &Timers, ms: u64) {
        clock.advance(Duration::from_millis(ms));
        timers.tick();
    }

    #[test]
    fn punctuation_stretches_the_following_delay() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Hi. Go?");

        // 'H' and 'i' arrive on the plain cadence.
        step(&clock, &timers, 0);
        assert_eq!(typing.displayed_text(), "H");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi.");

        // After '.', the next reveal waits 160 ms, not 40.
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi.");
        step(&clock, &timers, 120);
        assert_eq!(typing.displayed_text(), "Hi. ");

        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi. G");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi. Go");
        assert!(!typing.is_complete());
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Hi. Go?");
        assert!(typing.is_complete());

        // Nothing further is scheduled once complete.
        assert_eq!(timers.pending(), 0);
        step(&clock, &timers, 1000);
        assert_eq!(typing.displayed_text(), "Hi. Go?");
    }

    #[test]
    fn reduced_motion_short_circuits_without_timers() {
        let (_clock, timers, motion) = harness();
        motion.set(true);
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Lights up.");

        assert_eq!(typing.displayed_text(), "Lights up.");
        assert!(typing.is_complete());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn motion_flip_mid_reveal_completes_instantly() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion.clone(), spec_40ms());
        typing.set_text("Fade in");
        step(&clock, &timers, 0);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Fa");

        motion.set(true);
        assert_eq!(typing.displayed_text(), "Fade in");
        assert!(typing.is_complete());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn text_change_restarts_and_cancels_the_old_tick() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Old line");
        step(&clock, &timers, 0);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Ol");

        typing.set_text("New");
        assert_eq!(typing.revealed(), 0);
        assert!(!typing.is_complete());
        assert_eq!(timers.pending(), 1);

        // Only the new text is ever revealed from here on.
        step(&clock, &timers, 0);
        assert_eq!(typing.displayed_text(), "N");
        step(&clock, &timers, 40);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "New");
        assert!(typing.is_complete());
    }

    #[test]
    fn identical_text_does_not_restart() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Same");
        step(&clock, &timers, 0);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Sa");

        typing.set_text("Same");
        assert_eq!(typing.displayed_text(), "Sa");
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn deactivate_freezes_and_reactivate_resumes() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Resume me");
        step(&clock, &timers, 0);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Re");

        typing.set_active(false);
        assert_eq!(timers.pending(), 0);
        step(&clock, &timers, 500);
        assert_eq!(typing.displayed_text(), "Re");

        typing.set_active(true);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Res");
    }

    #[test]
    fn empty_text_stays_idle() {
        let (_clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("filled");
        typing.set_text("");

        assert_eq!(typing.displayed_text(), "");
        assert!(!typing.is_complete());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn reveals_whole_graphemes() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("So‘z");

        step(&clock, &timers, 0);
        assert_eq!(typing.displayed_text(), "S");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "So");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "So‘");
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "So‘z");
        assert!(typing.is_complete());
    }

    #[test]
    fn drop_cancels_the_pending_tick() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Leak check");
        assert_eq!(timers.pending(), 1);

        drop(typing);
        assert_eq!(timers.pending(), 0);
        step(&clock, &timers, 500);
    }

    #[test]
    fn restart_rewinds_to_zero() {
        let (clock, timers, motion) = harness();
        let typing = TypingEffect::new(timers.clone(), motion, spec_40ms());
        typing.set_text("Encore");
        step(&clock, &timers, 0);
        step(&clock, &timers, 40);
        step(&clock, &timers, 40);
        assert_eq!(typing.displayed_text(), "Enc");

        typing.restart();
        assert_eq!(typing.displayed_text(), "");
        assert!(!typing.is_complete());
        step(&clock, &timers, 0);
        assert_eq!(typing.displayed_text(), "E");
    }
}

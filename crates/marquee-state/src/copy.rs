use std::cell::RefCell;
use std::rc::{Rc, Weak};

use marquee_core::{TimerKey, Timers};
use web_time::Duration;

pub const DEFAULT_COPY_WINDOW: Duration = Duration::from_millis(2000);

/// Write-only clipboard seam. Fire-and-forget: implementations log
/// their own failures, callers never see them.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Clipboard that goes nowhere, for headless use.
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&self, _text: &str) {}
}

struct Inner {
    copied: bool,
    reset: Option<TimerKey>,
}

/// Transient "copied!" acknowledgement after a clipboard write.
///
/// Overlapping copies re-arm the single reset timer, so the flag falls
/// exactly once, one window after the last call.
pub struct CopyFeedback {
    inner: Rc<RefCell<Inner>>,
    timers: Timers,
    clipboard: Rc<dyn Clipboard>,
    window: Duration,
}

impl CopyFeedback {
    pub fn new(timers: Timers, clipboard: Rc<dyn Clipboard>, window: Duration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                copied: false,
                reset: None,
            })),
            timers,
            clipboard,
            window,
        }
    }

    pub fn with_default_window(timers: Timers, clipboard: Rc<dyn Clipboard>) -> Self {
        Self::new(timers, clipboard, DEFAULT_COPY_WINDOW)
    }

    pub fn copied(&self) -> bool {
        self.inner.borrow().copied
    }

    pub fn copy(&self, text: &str) {
        self.clipboard.write_text(text);

        let mut s = self.inner.borrow_mut();
        if let Some(key) = s.reset.take() {
            self.timers.cancel(key);
        }
        s.copied = true;

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        let key = self.timers.schedule(self.window, move || {
            if let Some(strong) = weak.upgrade() {
                let mut s = strong.borrow_mut();
                s.reset = None;
                s.copied = false;
            }
        });
        s.reset = Some(key);
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        if let Some(key) = self.inner.borrow_mut().reset.take() {
            self.timers.cancel(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::TestClock;

    struct RecordingClipboard(RefCell<Vec<String>>);

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    fn harness() -> (Rc<TestClock>, Timers, Rc<RecordingClipboard>, CopyFeedback) {
        let clock = TestClock::new();
        let timers = Timers::new(clock.clone());
        let clipboard = Rc::new(RecordingClipboard(RefCell::new(Vec::new())));
        let feedback = CopyFeedback::with_default_window(timers.clone(), clipboard.clone());
        (clock, timers, clipboard, feedback)
    }

    #[test]
    fn acknowledges_then_reverts_after_the_window() {
        let (clock, timers, clipboard, feedback) = harness();
        assert!(!feedback.copied());

        feedback.copy("hello@example.com");
        assert!(feedback.copied());
        assert_eq!(*clipboard.0.borrow(), vec!["hello@example.com"]);

        clock.advance(Duration::from_millis(1999));
        timers.tick();
        assert!(feedback.copied());
        clock.advance(Duration::from_millis(1));
        timers.tick();
        assert!(!feedback.copied());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn overlapping_copies_reset_once_after_the_last() {
        let (clock, timers, clipboard, feedback) = harness();

        feedback.copy("first");
        clock.advance(Duration::from_millis(1500));
        timers.tick();
        feedback.copy("second");
        assert_eq!(timers.pending(), 1);

        // The first window's deadline passes; still acknowledged.
        clock.advance(Duration::from_millis(500));
        timers.tick();
        assert!(feedback.copied());

        clock.advance(Duration::from_millis(1500));
        timers.tick();
        assert!(!feedback.copied());
        assert_eq!(clipboard.0.borrow().len(), 2);
    }

    #[test]
    fn drop_cancels_the_reset() {
        let (_clock, timers, _clipboard, feedback) = harness();
        feedback.copy("x");
        assert_eq!(timers.pending(), 1);
        drop(feedback);
        assert_eq!(timers.pending(), 0);
    }
}

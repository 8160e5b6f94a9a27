use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use marquee_core::{TimerKey, Timers};
use web_time::Duration;

pub const DEFAULT_RESET_AFTER: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

struct Inner {
    status: SendStatus,
    /// Bumped on every accepted `send`; stale completions and stale
    /// auto-resets carry an older value and are ignored.
    attempt: u64,
    reset: Option<TimerKey>,
}

/// Lifecycle of one form's submission attempts:
/// idle -> sending -> sent/error -> idle.
///
/// The asynchronous work itself is caller-supplied: `send` hands the
/// starter closure a `Completion`, and whenever that resolves the
/// machine moves to its terminal state and schedules the auto-reset
/// back to idle. Calling `send` again while sending is ignored; calling
/// it from `Sent`/`Error` starts a fresh attempt and cancels the
/// pending reset so it cannot fire into the new one.
pub struct Submission {
    inner: Rc<RefCell<Inner>>,
    timers: Timers,
    reset_after: Duration,
}

impl Submission {
    pub fn new(timers: Timers, reset_after: Duration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                status: SendStatus::Idle,
                attempt: 0,
                reset: None,
            })),
            timers,
            reset_after,
        }
    }

    pub fn with_default_reset(timers: Timers) -> Self {
        Self::new(timers, DEFAULT_RESET_AFTER)
    }

    pub fn status(&self) -> SendStatus {
        self.inner.borrow().status
    }

    pub fn is_sending(&self) -> bool {
        self.status() == SendStatus::Sending
    }

    /// Begins an attempt. `start` is invoked at most once, synchronously,
    /// with the `Completion` that settles this attempt.
    pub fn send(&self, start: impl FnOnce(Completion)) {
        let attempt = {
            let mut s = self.inner.borrow_mut();
            if s.status == SendStatus::Sending {
                log::debug!("send ignored: an attempt is already in flight");
                return;
            }
            if let Some(key) = s.reset.take() {
                self.timers.cancel(key);
            }
            s.attempt += 1;
            s.status = SendStatus::Sending;
            s.attempt
        };
        start(Completion {
            inner: Rc::downgrade(&self.inner),
            timers: self.timers.clone(),
            reset_after: self.reset_after,
            attempt,
        });
    }
}

impl Drop for Submission {
    fn drop(&mut self) {
        if let Some(key) = self.inner.borrow_mut().reset.take() {
            self.timers.cancel(key);
        }
    }
}

/// Settles one attempt. Consumed by value, so an attempt resolves at
/// most once; a completion outliving its attempt settles nothing.
pub struct Completion {
    inner: Weak<RefCell<Inner>>,
    timers: Timers,
    reset_after: Duration,
    attempt: u64,
}

impl Completion {
    pub fn succeed(self) {
        self.finish(SendStatus::Sent);
    }

    /// Failure is surfaced only as a status; the reason is logged and
    /// never re-thrown to the caller.
    pub fn fail(self, reason: impl fmt::Display) {
        log::warn!("submission failed: {reason}");
        self.finish(SendStatus::Error);
    }

    fn finish(self, terminal: SendStatus) {
        let Some(strong) = self.inner.upgrade() else {
            return;
        };
        let mut s = strong.borrow_mut();
        if s.attempt != self.attempt || s.status != SendStatus::Sending {
            log::debug!("stale completion ignored");
            return;
        }
        s.status = terminal;

        let weak = self.inner.clone();
        let attempt = self.attempt;
        let key = self.timers.schedule(self.reset_after, move || {
            let Some(strong) = weak.upgrade() else { return };
            let mut s = strong.borrow_mut();
            s.reset = None;
            if s.attempt == attempt {
                s.status = SendStatus::Idle;
            }
        });
        s.reset = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::TestClock;
    use std::cell::Cell;

    fn harness() -> (Rc<TestClock>, Timers, Submission) {
        let clock = TestClock::new();
        let timers = Timers::new(clock.clone());
        let submission = Submission::with_default_reset(timers.clone());
        (clock, timers, submission)
    }

    /// Resolves the completion through a simulated 1500 ms transport.
    fn send_simulated(submission: &Submission, timers: &Timers, succeed: bool) {
        submission.send(|done| {
            let key = timers.schedule(Duration::from_millis(1500), move || {
                if succeed {
                    done.succeed();
                } else {
                    done.fail("mailbox unreachable");
                }
            });
            let _ = key;
        });
    }

    #[test]
    fn success_walks_idle_sending_sent_idle() {
        let (clock, timers, submission) = harness();
        assert_eq!(submission.status(), SendStatus::Idle);

        send_simulated(&submission, &timers, true);
        assert_eq!(submission.status(), SendStatus::Sending);

        clock.advance(Duration::from_millis(1500));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Sent);

        // Not a moment before the reset delay.
        clock.advance(Duration::from_millis(3999));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Sent);
        clock.advance(Duration::from_millis(1));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Idle);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn failure_surfaces_only_as_a_status() {
        let (clock, timers, submission) = harness();
        send_simulated(&submission, &timers, false);

        clock.advance(Duration::from_millis(1500));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Error);

        clock.advance(DEFAULT_RESET_AFTER);
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Idle);
    }

    #[test]
    fn reentrant_send_is_ignored_while_sending() {
        let (_clock, timers, submission) = harness();
        let starts = Rc::new(Cell::new(0));

        let starts2 = starts.clone();
        submission.send(move |_done| starts2.set(starts2.get() + 1));
        assert_eq!(submission.status(), SendStatus::Sending);

        let starts3 = starts.clone();
        submission.send(move |_done| starts3.set(starts3.get() + 1));
        assert_eq!(starts.get(), 1);
        let _ = timers;
    }

    #[test]
    fn new_attempt_cancels_the_stale_reset() {
        let (clock, timers, submission) = harness();
        send_simulated(&submission, &timers, true);
        clock.advance(Duration::from_millis(1500));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Sent);

        // Start again 100 ms before the old reset would have fired.
        clock.advance(Duration::from_millis(3900));
        timers.tick();
        send_simulated(&submission, &timers, true);
        assert_eq!(submission.status(), SendStatus::Sending);

        // The old reset's deadline passes; the new attempt is untouched.
        clock.advance(Duration::from_millis(100));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Sending);

        clock.advance(Duration::from_millis(1400));
        timers.tick();
        assert_eq!(submission.status(), SendStatus::Sent);
    }

    #[test]
    fn completion_dropped_without_resolving_leaves_sending() {
        let (_clock, _timers, submission) = harness();
        submission.send(|done| drop(done));
        // The caller never settled the attempt; the machine stays put.
        assert_eq!(submission.status(), SendStatus::Sending);
    }

    #[test]
    fn sequential_attempts_each_resolve_cleanly() {
        let (clock, timers, submission) = harness();
        let parked: Rc<RefCell<Option<Completion>>> = Rc::new(RefCell::new(None));

        let parked2 = parked.clone();
        submission.send(move |done| *parked2.borrow_mut() = Some(done));
        let first = parked.borrow_mut().take().expect("starter ran");

        // First attempt fails, resets to idle, and a second one succeeds.
        first.fail("timed out");
        assert_eq!(submission.status(), SendStatus::Error);
        clock.advance(DEFAULT_RESET_AFTER);
        timers.tick();

        let parked3 = parked.clone();
        submission.send(move |done| *parked3.borrow_mut() = Some(done));
        let second = parked.borrow_mut().take().expect("starter ran");
        second.succeed();
        assert_eq!(submission.status(), SendStatus::Sent);
    }
}

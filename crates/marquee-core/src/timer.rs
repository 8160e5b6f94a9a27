use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::clock::Clock;

new_key_type! {
    /// Handle to one scheduled callback. Generational: cancelling an
    /// already-fired or already-cancelled key is a safe no-op.
    pub struct TimerKey;
}

struct Entry {
    deadline: Instant,
    seq: u64,
    run: Box<dyn FnOnce()>,
}

struct Inner {
    clock: Rc<dyn Clock>,
    entries: RefCell<SlotMap<TimerKey, Entry>>,
    next_seq: Cell<u64>,
}

/// Single-threaded cancellable timer queue.
///
/// Every engine owns at most one pending key per purpose and must
/// cancel it before scheduling a replacement; the generational keys
/// make that discipline cheap (stale cancels do nothing). Callbacks run
/// outside the queue borrow, so they may schedule and cancel freely.
#[derive(Clone)]
pub struct Timers {
    inner: Rc<Inner>,
}

impl Timers {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(Inner {
                clock,
                entries: RefCell::new(SlotMap::with_key()),
                next_seq: Cell::new(0),
            }),
        }
    }

    pub fn now(&self) -> Instant {
        self.inner.clock.now()
    }

    pub fn schedule(&self, delay: Duration, run: impl FnOnce() + 'static) -> TimerKey {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        self.inner.entries.borrow_mut().insert(Entry {
            deadline: self.inner.clock.now() + delay,
            seq,
            run: Box::new(run),
        })
    }

    /// Returns true if the key was still pending.
    pub fn cancel(&self, key: TimerKey) -> bool {
        self.inner.entries.borrow_mut().remove(key).is_some()
    }

    pub fn pending(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .entries
            .borrow()
            .values()
            .map(|e| e.deadline)
            .min()
    }

    /// Fires every due entry in (deadline, scheduling order). Re-scans
    /// after each batch so work made due by a callback also fires.
    /// Returns the number of callbacks run.
    pub fn tick(&self) -> usize {
        // A callback that keeps rescheduling itself at zero delay would
        // otherwise spin this loop forever.
        const MAX_PASSES: usize = 64;

        let mut fired = 0;
        for pass in 0.. {
            if pass == MAX_PASSES {
                log::warn!(
                    "tick: {MAX_PASSES} re-scan passes without draining; \
                     a callback is rescheduling itself at zero delay"
                );
                break;
            }
            let now = self.inner.clock.now();
            let mut due: SmallVec<[(Instant, u64, TimerKey); 8]> = self
                .inner
                .entries
                .borrow()
                .iter()
                .filter(|(_, e)| e.deadline <= now)
                .map(|(k, e)| (e.deadline, e.seq, k))
                .collect();
            if due.is_empty() {
                break;
            }
            due.sort_unstable_by_key(|&(deadline, seq, _)| (deadline, seq));
            for (_, _, key) in due {
                // A callback earlier in the batch may have cancelled this one.
                let entry = self.inner.entries.borrow_mut().remove(key);
                if let Some(e) = entry {
                    (e.run)();
                    fired += 1;
                }
            }
        }
        fired
    }
}

use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Source of the current instant for a timer queue.
///
/// Injected per `Timers` instance so tests can drive time by hand while
/// the demo runs on the wall clock.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A test clock you can advance deterministically.
pub struct TestClock {
    t: Cell<Instant>,
}

impl TestClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            t: Cell::new(Instant::now()),
        })
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

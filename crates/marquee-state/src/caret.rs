use std::cell::RefCell;
use std::rc::{Rc, Weak};

use marquee_core::{TimerKey, Timers};
use web_time::Duration;

pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(530);

struct Inner {
    visible: bool,
    tick: Option<TimerKey>,
}

/// Fixed-period visibility toggle for a simulated caret.
///
/// Starts flipping immediately on construction and runs until dropped;
/// there is no pause contract.
pub struct CursorBlink {
    inner: Rc<RefCell<Inner>>,
    timers: Timers,
}

impl CursorBlink {
    pub fn new(timers: Timers, period: Duration, initially_visible: bool) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            visible: initially_visible,
            tick: None,
        }));
        schedule_flip(&timers, &inner, period);
        Self { inner, timers }
    }

    pub fn with_default_period(timers: Timers) -> Self {
        Self::new(timers, DEFAULT_BLINK_PERIOD, true)
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }
}

impl Drop for CursorBlink {
    fn drop(&mut self) {
        if let Some(key) = self.inner.borrow_mut().tick.take() {
            self.timers.cancel(key);
        }
    }
}

fn schedule_flip(timers: &Timers, inner: &Rc<RefCell<Inner>>, period: Duration) {
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
    let timers2 = timers.clone();
    let key = timers.schedule(period, move || {
        let Some(strong) = weak.upgrade() else { return };
        {
            let mut s = strong.borrow_mut();
            s.tick = None;
            s.visible = !s.visible;
        }
        schedule_flip(&timers2, &strong, period);
    });
    inner.borrow_mut().tick = Some(key);
}

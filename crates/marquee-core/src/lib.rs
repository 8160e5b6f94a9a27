//! # Clocks, timers, and signals
//!
//! Marquee's engines are plain single-threaded state machines driven by
//! timer callbacks. This crate holds the three pieces they all share:
//!
//! - `Clock` — injectable time source (`SystemClock` for the demo,
//!   `TestClock` for deterministic tests).
//! - `Timers` — a cancellable timer queue. `schedule` returns a
//!   generational `TimerKey`; an engine keeps at most one pending key
//!   per purpose and cancels it before scheduling a replacement.
//! - `Signal<T>` — observable value for ambient conditions (reduced
//!   motion, preferences) with removable subscriptions.
//!
//! ## Timers
//!
//! ```rust
//! use marquee_core::{TestClock, Timers};
//! use web_time::Duration;
//!
//! let clock = TestClock::new();
//! let timers = Timers::new(clock.clone());
//!
//! let key = timers.schedule(Duration::from_millis(100), || println!("due"));
//! clock.advance(Duration::from_millis(100));
//! timers.tick(); // runs the callback
//! timers.cancel(key); // already fired: no-op
//! ```
//!
//! There is no parallelism anywhere: mutual exclusion comes from the
//! run-to-completion execution of each callback on one thread.

pub mod clock;
pub mod signal;
pub mod timer;

pub use clock::*;
pub use signal::*;
pub use timer::*;

#[cfg(test)]
mod tests;

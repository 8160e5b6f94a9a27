//! # UI state machines
//!
//! Each engine here is a small, single-owner state machine the
//! presentation layer instantiates per rendered slot and reads on every
//! frame. They do not call each other; they share only the `Timers`
//! queue from `marquee-core` and the ambient viewport signals.
//!
//! The common shape:
//!
//! - state lives in an `Rc<RefCell<..>>` the timer callbacks reach
//!   through a `Weak`, so a fired callback can never touch a dropped
//!   engine;
//! - each engine holds at most one pending `TimerKey` per purpose and
//!   cancels it before scheduling a replacement;
//! - dropping an engine cancels its pending timers synchronously.
//!
//! ```rust
//! use marquee_core::{SystemClock, Timers};
//! use marquee_state::{MotionPreference, TypingEffect, TypingSpec};
//! use std::rc::Rc;
//!
//! let timers = Timers::new(Rc::new(SystemClock));
//! let motion = MotionPreference::new(false);
//! let typing = TypingEffect::new(timers.clone(), motion.signal(), TypingSpec::default());
//! typing.set_text("FADE IN:");
//! // platform loop: sleep until timers.next_deadline(), then timers.tick()
//! ```

pub mod caret;
pub mod copy;
pub mod send;
pub mod tabs;
pub mod typing;
pub mod viewport;

pub use caret::*;
pub use copy::*;
pub use send::*;
pub use tabs::*;
pub use typing::*;
pub use viewport::*;

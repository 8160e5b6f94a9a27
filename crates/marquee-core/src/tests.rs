use std::cell::RefCell;
use std::rc::Rc;

use web_time::Duration;

use crate::clock::TestClock;
use crate::signal::signal;
use crate::timer::Timers;

#[test]
fn timers_and_signals_compose_deterministically() {
    let clock = TestClock::new();
    let timers = Timers::new(clock.clone());
    let phase = signal("armed");
    let log = Rc::new(RefCell::new(Vec::new()));

    let log2 = log.clone();
    phase.subscribe(move |p: &&str| log2.borrow_mut().push(*p));

    let phase2 = phase.clone();
    timers.schedule(Duration::from_millis(10), move || phase2.set("fired"));
    let phase3 = phase.clone();
    timers.schedule(Duration::from_millis(20), move || phase3.set("done"));

    clock.advance(Duration::from_millis(10));
    timers.tick();
    assert_eq!(phase.get(), "fired");

    clock.advance(Duration::from_millis(10));
    timers.tick();
    assert_eq!(*log.borrow(), vec!["fired", "done"]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn next_deadline_tracks_the_earliest_entry() {
    let clock = TestClock::new();
    let timers = Timers::new(clock.clone());
    assert!(timers.next_deadline().is_none());

    timers.schedule(Duration::from_millis(30), || {});
    let early = timers.schedule(Duration::from_millis(10), || {});
    assert_eq!(
        timers.next_deadline(),
        Some(timers.now() + Duration::from_millis(10))
    );

    timers.cancel(early);
    assert_eq!(
        timers.next_deadline(),
        Some(timers.now() + Duration::from_millis(30))
    );
}

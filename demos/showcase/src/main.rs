//! Terminal walkthrough of the site's state machines on the wall clock.
//!
//! Restores language/theme from a JSON file next to the working
//! directory, types the narrator line with a blinking caret, walks the
//! portfolio tabs, runs one simulated form submission end to end, and
//! copies the contact email to the system clipboard.
//!
//! Run with `RUST_LOG=debug cargo run -p showcase` to see the engines'
//! internal decisions.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::thread;

use anyhow::Result;
use marquee_core::{SystemClock, Timers};
use marquee_i18n::{Language, content::portfolio_content, translate};
use marquee_prefs::{EnvironmentSink, FileStorage, PreferenceStore, Theme};
use marquee_state::{
    Clipboard, CopyFeedback, CursorBlink, MotionPreference, NullClipboard, SendStatus, Submission,
    Tab, TabSelection, TypingEffect, TypingSpec,
};
use web_time::Duration;

const PREFS_FILE: &str = "marquee-prefs.json";
const CONTACT_EMAIL: &str = "gulsevararzikulova@gmail.com";

/// Stands in for the document attributes the web build would set.
struct TerminalSink;

impl EnvironmentSink for TerminalSink {
    fn set_locale(&self, language: Language) {
        log::info!("document locale -> {}", language.code());
    }

    fn set_color_scheme(&self, theme: Theme) {
        log::info!("color scheme -> {}", theme.token());
    }
}

/// arboard-backed clipboard. Write failures are logged, not surfaced,
/// matching the fire-and-forget seam.
struct SystemClipboard {
    inner: RefCell<arboard::Clipboard>,
}

impl SystemClipboard {
    fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(inner) => Some(Self {
                inner: RefCell::new(inner),
            }),
            Err(err) => {
                log::warn!("clipboard unavailable: {err}");
                None
            }
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) {
        if let Err(err) = self.inner.borrow_mut().set_text(text.to_string()) {
            log::warn!("clipboard write failed: {err}");
        }
    }
}

/// Sleeps until the earliest deadline and fires it, until `done` says
/// stop or the queue drains.
fn run_until(timers: &Timers, done: impl Fn() -> bool) {
    while !done() {
        let Some(deadline) = timers.next_deadline() else {
            return;
        };
        let wait = deadline.saturating_duration_since(timers.now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        timers.tick();
    }
}

fn redraw(typing: &TypingEffect, caret: &CursorBlink) -> io::Result<()> {
    let mark = if caret.is_visible() { "|" } else { " " };
    let mut out = io::stdout().lock();
    write!(out, "\r{}{mark}", typing.displayed_text())?;
    out.flush()
}

fn main() -> Result<()> {
    env_logger::init();

    let prefs = PreferenceStore::new(
        Rc::new(FileStorage::new(PREFS_FILE)),
        Rc::new(TerminalSink),
    );
    prefs.restore();
    let lang = prefs.language();
    println!(
        "[{}] {} — {}",
        lang.code(),
        translate(lang, "intro.tagline"),
        translate(lang, "title"),
    );

    let timers = Timers::new(Rc::new(SystemClock));
    let motion = MotionPreference::new(false);

    // The screenplay line, typed out with punctuation pauses and a caret.
    let typing = TypingEffect::new(timers.clone(), motion.signal(), TypingSpec::default());
    let caret = CursorBlink::with_default_period(timers.clone());
    typing.set_text(translate(lang, "narrator.line"));
    while !typing.is_complete() {
        let Some(deadline) = timers.next_deadline() else {
            break;
        };
        thread::sleep(deadline.saturating_duration_since(timers.now()));
        timers.tick();
        redraw(&typing, &caret)?;
    }
    println!("\r{} ", typing.displayed_text());
    drop(caret);
    drop(typing);

    // Tab walk: same selection state the portfolio section uses.
    let tabs = TabSelection::new();
    for tab in Tab::ALL {
        tabs.select(tab);
        let content = portfolio_content(lang);
        let line = match tabs.active() {
            Tab::Experience => format!(
                "{}: {} roles, latest {}",
                translate(lang, "portfolio.employment"),
                content.timeline.len(),
                content.timeline[0].role,
            ),
            Tab::Skills => format!(
                "{}: {}",
                translate(lang, "portfolio.skills.technical"),
                content.skills.technical.join(", "),
            ),
            Tab::Achievements => format!(
                "{}: {}",
                translate(lang, "portfolio.certifications"),
                content.achievements.len(),
            ),
            Tab::Education => format!(
                "{}: {}",
                translate(lang, "portfolio.education"),
                content.education[0].institution,
            ),
        };
        println!("  {line}");
    }

    // One submission attempt over a simulated 1500 ms transport.
    let submission = Submission::with_default_reset(timers.clone());
    submission.send(|done| {
        timers.schedule(Duration::from_millis(1500), move || done.succeed());
    });
    println!("{}", translate(lang, "contact.form.submitting"));
    run_until(&timers, || !submission.is_sending());
    match submission.status() {
        SendStatus::Sent => println!("{}", translate(lang, "contact.form.success")),
        SendStatus::Error => println!("{}", translate(lang, "contact.form.error")),
        status => log::warn!("submission settled in unexpected state {status:?}"),
    }
    // Let the auto-reset land so the machine ends the run idle.
    run_until(&timers, || submission.status() == SendStatus::Idle);

    // Copy the contact email; the acknowledgement falls after its window.
    let clipboard: Rc<dyn Clipboard> = match SystemClipboard::open() {
        Some(cb) => Rc::new(cb),
        None => Rc::new(NullClipboard),
    };
    let feedback = CopyFeedback::with_default_window(timers.clone(), clipboard);
    feedback.copy(CONTACT_EMAIL);
    println!("{} {CONTACT_EMAIL} ✓", translate(lang, "contact.email"));
    run_until(&timers, || !feedback.copied());

    // Persist a theme flip so the next run restores the other scheme.
    prefs.toggle_theme();
    println!("theme persisted as {:?}", prefs.theme());
    Ok(())
}

//! In-memory `log` backend for unit tests.
//!
//! Records are kept per thread, so tests running in parallel only see the
//! lines their own code emitted.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    pub level: Level,
    pub message: String,
}

struct Capture;

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

thread_local! {
    static LINES: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        LINES.with(|lines| {
            lines.borrow_mut().push(Captured {
                level: record.level(),
                message: record.args().to_string(),
            });
        });
    }

    fn flush(&self) {}
}

/// Run `f` and return its result with every line it logged on this thread.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    LINES.set(Vec::new());
    let result = f();
    (result, LINES.take())
}

/// Lines at `Level::Error`.
pub fn errors(lines: &[Captured]) -> Vec<&Captured> {
    lines.iter().filter(|line| line.level == Level::Error).collect()
}

use std::cell::RefCell;
use std::fs::File;
use std::io::{Result as IoResult, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

thread_local! {
    static SOURCE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Tees decoder diagnostics into a file in addition to stderr.
///
/// The first call wins; later calls leave the established file in place.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn set_log_file(path: &Path) -> IoResult<()> {
    let _ = LOG_FILE.set(Mutex::new(File::create(path)?));
    Ok(())
}

/// Names the input whose diagnostics follow on this thread.
///
/// The parse driver installs the path being parsed here. The returned guard
/// restores the previous source on drop, so interleaved parses keep their
/// messages attributed to the right file.
#[must_use]
pub fn set_source(source: impl Into<String>) -> SourceGuard {
    let previous = SOURCE.with_borrow_mut(|slot| slot.replace(source.into()));
    SourceGuard { previous }
}

pub struct SourceGuard {
    previous: Option<String>,
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        SOURCE.with_borrow_mut(|slot| *slot = self.previous.take());
    }
}

/// Reports one decoder diagnostic, attributed to the current source.
pub fn log_error(message: &str) {
    let line = attributed(message);
    eprintln!("{line}");
    if let Some(log) = LOG_FILE.get()
        && let Ok(mut log) = log.lock()
    {
        let _ = writeln!(log, "{line}");
    }
}

fn attributed(message: &str) -> String {
    SOURCE.with_borrow(|source| {
        source
            .as_deref()
            .map_or_else(|| message.to_string(), |name| format!("{name}: {message}"))
    })
}

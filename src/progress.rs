// src/progress.rs
/// Lightweight progress reporting used by long-running operations (extract/import).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a sheet row was examined).
    fn item_done(&mut self, _row: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Writes begin/finish and free-form lines to stderr; per-row ticks are skipped.
pub struct StderrProgress {
    total: usize,
    done: usize,
}

impl StderrProgress {
    pub fn new() -> Self { Self { total: 0, done: 0 } }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scanning {} row(s)…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, _row: usize) {
        self.done += 1;
    }
    fn finish(&mut self) {
        eprintln!("Scanned {}/{} row(s)", self.done, self.total);
    }
}

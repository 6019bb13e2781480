use crate::domain::FileReport;
use std::path::Path;

/// Receives generation milestones. The CLI prints them; tests record them.
pub trait Progress {
    /// Called once per written block that lands the counter just past a
    /// whole-milestone boundary.
    fn milestone(&mut self, path: &Path, written: u64);

    fn finished(&mut self, report: &FileReport);
}

/// Discards every event.
pub struct NoProgress;

impl Progress for NoProgress {
    fn milestone(&mut self, _path: &Path, _written: u64) {}
    fn finished(&mut self, _report: &FileReport) {}
}

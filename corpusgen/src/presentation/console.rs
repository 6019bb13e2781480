use corpusgen_core::{FileReport, GIB, Progress};
use std::path::Path;

/// Prints generation progress to stdout.
pub struct ConsoleProgress;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Progress for ConsoleProgress {
    fn milestone(&mut self, path: &Path, written: u64) {
        println!(
            "📦 {}: {:.2} GB escritos",
            display_name(path),
            written as f64 / GIB as f64
        );
    }

    fn finished(&mut self, report: &FileReport) {
        println!(
            "✅ Archivo \"{}\" generado ({:.2} GB)",
            display_name(&report.path),
            report.gib()
        );
    }
}

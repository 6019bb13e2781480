use std::path::{Path, PathBuf};
use std::time::Instant;

use corpusgen_core::error::Result;
use corpusgen_core::index::IndexOptions;
use corpusgen_core::{build_index, parse_size_arg, run, write_index};
use tracing::info;

use crate::presentation::console::ConsoleProgress;

pub fn handle_generate(size: Option<String>) -> Result<()> {
    let gb = parse_size_arg(size.as_deref())?;
    println!("📚 Generando 5 archivos de {gb} GB sin tildes ni caracteres especiales...\n");

    let report = run(Path::new("."), gb, &mut ConsoleProgress)?;
    info!(
        files = report.files.len(),
        bytes = report.files.iter().map(|f| f.bytes_written).sum::<u64>(),
        "generation finished"
    );

    println!("\n🔠 Palabras unicas totales: {}", report.unique_words);
    Ok(())
}

pub fn handle_index(inputs: Vec<PathBuf>, out: PathBuf, opts: IndexOptions) -> Result<()> {
    let started = Instant::now();
    println!("Generando índice invertido...");

    let build = build_index(&inputs, &opts)?;
    for p in &build.skipped {
        eprintln!("No se pudo abrir: {}", p.display());
    }
    write_index(&build.index, &out)?;

    let secs = started.elapsed().as_secs_f64();
    info!(
        files = build.indexed.len(),
        skipped = build.skipped.len(),
        words = build.index.len(),
        secs,
        "indexing finished"
    );
    println!("Índice invertido almacenado en '{}'.", out.display());
    println!("Tiempo total de ejecución:\t{secs:.3} segundos.");
    Ok(())
}

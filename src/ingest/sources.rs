// CSV source discovery and per-source reading.
//
// Every source file is expected to carry named `title` and `context`
// columns; extra columns are ignored. A file that cannot be read or is
// missing the required columns is skipped with a diagnostic — a bad
// source never takes down the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One (title, context) row from a source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub title: String,
    pub context: String,
}

/// All surviving rows from a single source file.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub source: PathBuf,
    pub rows: Vec<Row>,
}

/// Lazily yield one batch per readable source file, in lexical filename
/// order. Single-pass and finite; the aggregator is the sole consumer.
pub fn iter_sources(input_dir: &Path) -> Result<impl Iterator<Item = SourceBatch>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(input_dir)
        .with_context(|| format!("Cannot read input directory {}", input_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    Ok(paths.into_iter().filter_map(|path| match read_source(&path) {
        Ok(rows) => {
            debug!(source = %path.display(), rows = rows.len(), "Loaded source");
            Some(SourceBatch { source: path, rows })
        }
        Err(e) => {
            warn!(source = %path.display(), error = %e, "Skipping unreadable source");
            None
        }
    }))
}

/// Read one source file, dropping rows whose context repeats an earlier
/// context value within this same file (first occurrence wins).
fn read_source(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader.headers().context("Missing header row")?;
    let title_idx = column_index(headers, "title")?;
    let context_idx = column_index(headers, "context")?;

    let mut seen_contexts: HashSet<String> = HashSet::new();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.context("Malformed CSV record")?;
        let title = record.get(title_idx).unwrap_or("").to_string();
        let context = record.get(context_idx).unwrap_or("").to_string();

        if !seen_contexts.insert(context.clone()) {
            continue;
        }
        rows.push(Row { title, context });
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("Required column '{name}' not found"))
}

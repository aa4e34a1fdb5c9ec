// Artifact writers: pretty JSON for the lexical and entity reports, CSV
// for the similarity matrix, JSON for its summary.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::{EntityReport, LexicalReport, SimilarityReport};

/// Write all three artifacts into `output_dir`, creating it if needed.
/// Returns the paths written, for the CLI to echo back.
pub fn write_artifacts(
    output_dir: &Path,
    lexical: &BTreeMap<String, LexicalReport>,
    entities: &BTreeMap<String, EntityReport>,
    similarity: &SimilarityReport,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Cannot create output directory {}", output_dir.display()))?;

    let mut written = Vec::new();

    let lexical_path = output_dir.join("lexical_analysis.json");
    write_json(&lexical_path, lexical)?;
    written.push(lexical_path);

    let entities_path = output_dir.join("entity_analysis.json");
    write_json(&entities_path, entities)?;
    written.push(entities_path);

    let matrix_path = output_dir.join("similarity_matrix.csv");
    write_matrix_csv(&matrix_path, similarity)?;
    written.push(matrix_path);

    let summary_path = output_dir.join("similarity_summary.json");
    write_json(&summary_path, &similarity.summary)?;
    written.push(summary_path);

    info!(dir = %output_dir.display(), files = written.len(), "Artifacts written");
    Ok(written)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("Cannot serialize {}", path.display()))?;
    Ok(())
}

/// Title-indexed square matrix: first column carries the row title, the
/// header row carries the column titles.
fn write_matrix_csv(path: &Path, report: &SimilarityReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;

    let mut header = vec![String::new()];
    header.extend(report.titles.iter().cloned());
    writer.write_record(&header)?;

    for (i, title) in report.titles.iter().enumerate() {
        let mut record = vec![title.clone()];
        record.extend(report.matrix[i].iter().map(|score| format!("{score:.6}")));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimilaritySummary;

    fn sample_report() -> SimilarityReport {
        SimilarityReport {
            titles: vec!["A".to_string(), "B".to_string()],
            matrix: vec![vec![1.0, 0.42], vec![0.42, 1.0]],
            summary: Some(SimilaritySummary {
                most_similar: ("A".to_string(), "B".to_string()),
                highest_score: 0.42,
                least_similar: ("A".to_string(), "B".to_string()),
                lowest_score: 0.42,
            }),
        }
    }

    #[test]
    fn writes_all_four_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_artifacts(
            dir.path(),
            &BTreeMap::new(),
            &BTreeMap::new(),
            &sample_report(),
        )
        .unwrap();

        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.exists(), "missing artifact {}", path.display());
        }
    }

    #[test]
    fn matrix_csv_is_title_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        write_matrix_csv(&path, &sample_report()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), ",A,B");
        assert!(lines.next().unwrap().starts_with("A,1.000000,0.420000"));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("out");
        write_artifacts(&nested, &BTreeMap::new(), &BTreeMap::new(), &sample_report()).unwrap();
        assert!(nested.is_dir());
    }
}

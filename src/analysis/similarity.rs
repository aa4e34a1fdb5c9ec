// Pairwise topic similarity: full N x N matrix plus the off-diagonal
// highest/lowest pair summary.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::traits::LanguageEngine;
use crate::ingest::TopicMap;

/// The off-diagonal extremes of the matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilaritySummary {
    pub most_similar: (String, String),
    pub highest_score: f64,
    pub least_similar: (String, String),
    pub lowest_score: f64,
}

/// Square similarity matrix over all topics, titles on both axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Row/column labels, in sorted title order
    pub titles: Vec<String>,
    /// matrix[i][j] = similarity(titles[i], titles[j]); diagonal included
    pub matrix: Vec<Vec<f64>>,
    /// None when there are fewer than 2 topics — no off-diagonal cells
    pub summary: Option<SimilaritySummary>,
}

/// Annotate every topic once, then score every ordered pair.
///
/// The full matrix is computed without exploiting symmetry — redundant
/// but simple, and it keeps the output shape independent of the engine
/// honoring the symmetry contract.
///
/// Tie-break: titles are sorted and only a strictly better score replaces
/// the current extremum, so the lexicographically smallest pair wins ties.
pub fn similarity_report(
    topics: &TopicMap,
    engine: &dyn LanguageEngine,
) -> Result<SimilarityReport> {
    let titles: Vec<String> = topics.keys().cloned().collect();

    let mut docs = Vec::with_capacity(titles.len());
    for title in &titles {
        docs.push(engine.annotate(&topics[title])?);
    }

    let n = titles.len();
    let mut matrix = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in 0..n {
            matrix[i][j] = engine.similarity(&docs[i], &docs[j]);
        }
    }

    let summary = off_diagonal_extremes(&titles, &matrix);

    if summary.is_none() {
        info!(topics = n, "Fewer than 2 topics — extremum summary not applicable");
    }

    Ok(SimilarityReport {
        titles,
        matrix,
        summary,
    })
}

/// Scan every off-diagonal cell for the highest and lowest scores.
/// Returns None when there are no off-diagonal cells to scan.
fn off_diagonal_extremes(titles: &[String], matrix: &[Vec<f64>]) -> Option<SimilaritySummary> {
    let n = titles.len();
    if n < 2 {
        return None;
    }

    let mut best: Option<(usize, usize, f64)> = None;
    let mut worst: Option<(usize, usize, f64)> = None;

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let score = matrix[i][j];
            if best.is_none_or(|(_, _, s)| score > s) {
                best = Some((i, j, score));
            }
            if worst.is_none_or(|(_, _, s)| score < s) {
                worst = Some((i, j, score));
            }
        }
    }

    let (bi, bj, highest_score) = best?;
    let (wi, wj, lowest_score) = worst?;

    Some(SimilaritySummary {
        most_similar: (titles[bi].clone(), titles[bj].clone()),
        highest_score,
        least_similar: (titles[wi].clone(), titles[wj].clone()),
        lowest_score,
    })
}

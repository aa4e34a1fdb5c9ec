// Corpus table aggregation and topic grouping.

use std::collections::BTreeMap;

use tracing::info;

use super::sources::{Row, SourceBatch};

/// All rows from all sources, in source order. No cross-source dedup —
/// the same context under two sources is counted twice on purpose.
pub type CorpusTable = Vec<Row>;

/// Title -> concatenated corpus text. BTreeMap keeps iteration (and the
/// similarity matrix axes) deterministic.
pub type TopicMap = BTreeMap<String, String>;

/// Drain the whole source sequence into one table.
pub fn gather_rows(sources: impl Iterator<Item = SourceBatch>) -> CorpusTable {
    let mut table = Vec::new();
    let mut source_count = 0usize;
    for batch in sources {
        source_count += 1;
        table.extend(batch.rows);
    }
    info!(sources = source_count, rows = table.len(), "Aggregated sources");
    table
}

/// Group the table by title, joining each title's contexts with a single
/// space in row order. Titles whose contexts are all empty map to "".
pub fn group_topics(table: &CorpusTable) -> TopicMap {
    let mut pieces: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for row in table {
        let entry = pieces.entry(row.title.as_str()).or_default();
        if !row.context.is_empty() {
            entry.push(row.context.as_str());
        }
    }

    pieces
        .into_iter()
        .map(|(title, contexts)| (title.to_string(), contexts.join(" ")))
        .collect()
}

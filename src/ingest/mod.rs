// Source ingestion and topic grouping.
//
// sources.rs finds and reads the CSV inputs (dropping within-source
// duplicate contexts); aggregate.rs merges every source into one table
// and folds it into the per-topic corpus map the analyzers consume.

pub mod aggregate;
pub mod sources;

pub use aggregate::{gather_rows, group_topics, CorpusTable, TopicMap};
pub use sources::{iter_sources, Row, SourceBatch};

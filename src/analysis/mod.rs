// Per-topic analyzers.
//
// Each analyzer is a pure function of (topic map, engine) -> report.
// They share nothing but the corpus map and can run in any order.

pub mod entities;
pub mod lexical;
pub mod similarity;

pub use entities::{analyze_entities, EntityReport};
pub use lexical::{analyze_lexical, LexicalReport};
pub use similarity::{similarity_report, SimilarityReport, SimilaritySummary};

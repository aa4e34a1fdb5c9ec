// Lexiscope: batch lexical, entity, and similarity analytics
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline: ingest reads and groups the raw sources, engine
// provides the linguistic capability boundary, analysis produces the
// three per-topic reports, output renders and serializes them.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod ingest;
pub mod output;

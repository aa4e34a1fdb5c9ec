// Lexical statistics per topic: token list, type-token ratio, and
// part-of-speech frequencies.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::traits::LanguageEngine;
use crate::ingest::TopicMap;

/// Lexical profile of one topic's corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalReport {
    /// Count of content tokens (stop words and punctuation excluded)
    pub num_tokens: usize,
    /// Lowercased lemmas of the content tokens, in corpus order
    pub tokens: Vec<String>,
    /// Distinct tokens / total tokens; 0.0 for an empty token list
    pub ttr: f64,
    /// Tag -> count over every annotated token, filtered or not
    pub pos_counts: BTreeMap<String, u64>,
}

/// Run the lexical analysis over every topic corpus.
///
/// Filtering happens on the surface token (stop-word and punctuation
/// flags), and only surviving tokens are lemmatized and lowercased —
/// that order matters, since lemmatization can turn an inflected form
/// into a stop word.
pub fn analyze_lexical(
    topics: &TopicMap,
    engine: &dyn LanguageEngine,
) -> Result<BTreeMap<String, LexicalReport>> {
    let mut reports = BTreeMap::new();

    for (title, corpus) in topics {
        let doc = engine.annotate(corpus)?;

        let tokens: Vec<String> = doc
            .tokens
            .iter()
            .filter(|t| !t.is_stop && !t.is_punct)
            .map(|t| t.lemma.to_lowercase())
            .collect();

        let types: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let ttr = if tokens.is_empty() {
            0.0
        } else {
            types.len() as f64 / tokens.len() as f64
        };

        let mut pos_counts: BTreeMap<String, u64> = BTreeMap::new();
        for tok in &doc.tokens {
            *pos_counts.entry(tok.pos.clone()).or_insert(0) += 1;
        }

        debug!(topic = %title, tokens = tokens.len(), ttr, "Lexical profile built");

        reports.insert(
            title.clone(),
            LexicalReport {
                num_tokens: tokens.len(),
                tokens,
                ttr,
                pos_counts,
            },
        );
    }

    Ok(reports)
}

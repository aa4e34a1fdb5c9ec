// Baseline language engine — no model files, no network.
//
// Tokenization is Unicode word-boundary segmentation, lemmas are Snowball
// stems, POS tags come from closed-class word lists plus suffix rules, and
// entity recognition is a capitalized-span scanner with indicator keyword
// sets. Good enough to exercise the whole pipeline locally; a model-backed
// engine can replace it behind the LanguageEngine trait.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use super::traits::{AnnotatedDoc, LanguageEngine, NamedEntity, Token};

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no"]
        .iter()
        .copied()
        .collect()
});

static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "who",
        "whom", "whose", "which", "what", "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "themselves",
    ]
    .iter()
    .copied()
    .collect()
});

static ADPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
        "over", "under", "near", "across", "behind", "beyond", "within", "without",
    ]
    .iter()
    .copied()
    .collect()
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["and", "or", "but", "nor", "so", "yet", "both", "either", "neither"]
        .iter()
        .copied()
        .collect()
});

static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
    ]
    .iter()
    .copied()
    .collect()
});

/// Honorifics that mark the following capitalized span as a person.
static PERSON_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["mr", "mrs", "ms", "dr", "prof", "sir", "madam", "president", "professor"]
        .iter()
        .copied()
        .collect()
});

/// Suffix words that mark a capitalized span as an organization.
static ORG_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "corp", "ltd", "llc", "company", "corporation", "university", "institute",
        "foundation", "agency", "ministry", "committee", "association",
    ]
    .iter()
    .copied()
    .collect()
});

/// Well-known place names recognized as locations outright.
static LOCATION_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "london", "paris", "berlin", "rome", "madrid", "vienna", "moscow", "tokyo", "beijing",
        "delhi", "cairo", "washington", "france", "germany", "england", "britain", "spain",
        "italy", "russia", "china", "japan", "india", "egypt", "america", "europe", "asia",
        "africa", "australia", "belgrade", "serbia",
    ]
    .iter()
    .copied()
    .collect()
});

/// Baseline engine. Holds the stop-word set and the stemmer, both loaded
/// once at construction and shared read-only across every annotate call.
pub struct HeuristicEngine {
    stop: HashSet<String>,
    stemmer: Stemmer,
}

impl HeuristicEngine {
    /// Build the engine, loading its word lists.
    ///
    /// This is the startup availability check the pipeline relies on:
    /// if the engine cannot come up, the run never starts.
    pub fn new() -> Result<Self> {
        let stop: HashSet<String> = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        if stop.is_empty() {
            anyhow::bail!("Stop-word list came up empty — language engine unusable");
        }

        Ok(Self {
            stop,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    fn tag_pos(&self, surface: &str, lower: &str, is_punct: bool, sentence_start: bool) -> String {
        if is_punct {
            return "PUNCT".to_string();
        }
        if lower.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return "NUM".to_string();
        }
        if DETERMINERS.contains(lower) {
            return "DET".to_string();
        }
        if PRONOUNS.contains(lower) {
            return "PRON".to_string();
        }
        if ADPOSITIONS.contains(lower) {
            return "ADP".to_string();
        }
        if CONJUNCTIONS.contains(lower) {
            return "CCONJ".to_string();
        }
        if AUXILIARIES.contains(lower) {
            return "AUX".to_string();
        }
        if lower.ends_with("ly") {
            return "ADV".to_string();
        }
        if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return "VERB".to_string();
        }
        if lower.ends_with("ous")
            || lower.ends_with("ful")
            || lower.ends_with("ive")
            || lower.ends_with("able")
        {
            return "ADJ".to_string();
        }
        // Capitalized away from a sentence boundary reads as a proper noun
        if !sentence_start && surface.chars().next().is_some_and(|c| c.is_uppercase()) {
            return "PROPN".to_string();
        }
        "NOUN".to_string()
    }

    /// Scan for capitalized spans and label them with the indicator sets.
    ///
    /// A capitalized word at a sentence boundary only counts when its
    /// lowercase form isn't a stop word — same check the rule-based
    /// extractors in the wild use to avoid tagging "The".
    fn extract_entities(&self, tokens: &[Token], starts: &[bool]) -> Vec<NamedEntity> {
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let tok = &tokens[i];

            // Standalone four-digit years
            if tok.pos == "NUM" && tok.surface.len() == 4 {
                if let Ok(year) = tok.surface.parse::<u32>() {
                    if (1000..3000).contains(&year) {
                        entities.push(NamedEntity {
                            label: "DATE".to_string(),
                            text: tok.surface.clone(),
                        });
                        i += 1;
                        continue;
                    }
                }
            }

            if !is_capitalized_word(tok) || (starts[i] && self.stop.contains(&tok.lower)) {
                i += 1;
                continue;
            }

            // Grow the span across consecutive capitalized words
            let mut end = i + 1;
            while end < tokens.len() && is_capitalized_word(&tokens[end]) && !starts[end] {
                end += 1;
            }
            let mut span = &tokens[i..end];

            // An honorific is capitalized too, so it shows up as the head of
            // the span rather than before it. Peel it off and keep the name.
            let honorific = PERSON_INDICATORS.contains(span[0].lower.trim_end_matches('.'));
            if honorific {
                if span.len() == 1 {
                    i = end;
                    continue;
                }
                span = &span[1..];
            }

            let label = if honorific {
                "PERSON"
            } else if span.iter().any(|t| ORG_INDICATORS.contains(t.lower.as_str())) {
                "ORG"
            } else if span.iter().any(|t| LOCATION_KEYWORDS.contains(t.lower.as_str())) {
                "LOC"
            } else if span.len() >= 2 {
                "PERSON"
            } else {
                "MISC"
            };

            let text = span
                .iter()
                .map(|t| t.surface.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            entities.push(NamedEntity {
                label: label.to_string(),
                text,
            });
            i = end;
        }

        entities
    }
}

impl LanguageEngine for HeuristicEngine {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc> {
        let mut tokens = Vec::new();
        // True where the token opens a sentence (start of text or after . ! ?)
        let mut sentence_starts = Vec::new();
        let mut at_sentence_start = true;

        for piece in text.split_word_bounds() {
            if piece.chars().all(char::is_whitespace) {
                continue;
            }

            let is_punct = !piece.chars().any(char::is_alphanumeric);
            let lower = piece.to_lowercase();
            let is_stop = self.stop.contains(&lower);
            let pos = self.tag_pos(piece, &lower, is_punct, at_sentence_start);
            let lemma = if is_punct {
                lower.clone()
            } else {
                self.stemmer.stem(&lower).to_string()
            };

            sentence_starts.push(at_sentence_start);
            tokens.push(Token {
                surface: piece.to_string(),
                lower,
                lemma,
                pos,
                is_stop,
                is_punct,
            });

            at_sentence_start = is_punct && piece.chars().any(|c| matches!(c, '.' | '!' | '?'));
        }

        let entities = self.extract_entities(&tokens, &sentence_starts);

        Ok(AnnotatedDoc { tokens, entities })
    }

    /// Cosine similarity over term-frequency vectors of filtered lemmas.
    /// Both vectors are non-negative, so the score lands in [0, 1].
    fn similarity(&self, a: &AnnotatedDoc, b: &AnnotatedDoc) -> f64 {
        let weights_a = term_frequencies(a);
        let weights_b = term_frequencies(b);

        let dot: f64 = weights_a
            .iter()
            .filter_map(|(term, wa)| weights_b.get(term).map(|wb| wa * wb))
            .sum();

        let mag_a: f64 = weights_a.values().map(|w| w * w).sum::<f64>().sqrt();
        let mag_b: f64 = weights_b.values().map(|w| w * w).sum::<f64>().sqrt();

        if mag_a < f64::EPSILON || mag_b < f64::EPSILON {
            return 0.0;
        }
        dot / (mag_a * mag_b)
    }
}

fn is_capitalized_word(tok: &Token) -> bool {
    !tok.is_punct
        && tok.pos != "NUM"
        && tok.surface.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Term-frequency map over the content tokens (stop words and punctuation
/// excluded), keyed by lemma.
fn term_frequencies(doc: &AnnotatedDoc) -> HashMap<&str, f64> {
    let mut weights: HashMap<&str, f64> = HashMap::new();
    for tok in &doc.tokens {
        if tok.is_stop || tok.is_punct {
            continue;
        }
        *weights.entry(tok.lemma.as_str()).or_insert(0.0) += 1.0;
    }
    weights
}

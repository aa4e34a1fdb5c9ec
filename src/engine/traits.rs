// Language engine trait — the swap-ready abstraction.
//
// This trait defines everything the analyzers need from an NLP
// implementation: annotated tokens, recognized entities, and a pairwise
// document similarity score. The baseline implementation is the local
// HeuristicEngine; a model-backed engine can be dropped in behind the
// same trait.

use anyhow::Result;

/// A single annotated token.
#[derive(Debug, Clone)]
pub struct Token {
    /// The surface form exactly as it appeared in the corpus
    pub surface: String,
    /// Lowercased surface form
    pub lower: String,
    /// Lemma (base form); the baseline engine approximates this with a stem
    pub lemma: String,
    /// Part-of-speech tag (coarse, UPOS-style labels)
    pub pos: String,
    /// True if the surface form is a stop word
    pub is_stop: bool,
    /// True if the token is punctuation
    pub is_punct: bool,
}

/// A recognized named entity.
#[derive(Debug, Clone)]
pub struct NamedEntity {
    /// Entity-type label (e.g. PERSON, ORG, LOC)
    pub label: String,
    /// The entity's surface text, case preserved
    pub text: String,
}

/// One annotated document — the engine's output for a single corpus.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedDoc {
    pub tokens: Vec<Token>,
    pub entities: Vec<NamedEntity>,
}

/// Trait for annotating corpus text and scoring document similarity.
///
/// Engines are passed by reference into each analyzer entry point —
/// never held as global state. Construction is where availability is
/// checked; a misconfigured engine must fail there, not per document.
pub trait LanguageEngine {
    /// Annotate one corpus text.
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc>;

    /// Pairwise similarity between two annotated documents.
    /// Expected to be symmetric and bounded to [0, 1].
    fn similarity(&self, a: &AnnotatedDoc, b: &AnnotatedDoc) -> f64;
}

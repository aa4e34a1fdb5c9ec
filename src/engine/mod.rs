// Language engine boundary.
//
// The pipeline never talks to a concrete NLP implementation directly —
// everything goes through the LanguageEngine trait so the engine can be
// swapped (or mocked in tests) without touching the analyzers.

pub mod heuristic;
pub mod traits;

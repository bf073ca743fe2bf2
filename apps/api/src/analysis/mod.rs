// Résumé/job-description similarity scoring.
// Implements: PDF text extraction, text normalization, TF-IDF cosine scoring, request orchestration.
// PDF parsing and NLP are blocking and must run inside tokio::task::spawn_blocking.

pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod scorer;
pub mod stop_words;
pub mod tfidf;

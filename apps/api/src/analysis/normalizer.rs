//! Normalizer — reduces free text to a space-joined sequence of lemmas with
//! stop words removed.
//!
//! Pipeline: NFKD accent folding → lowercase → UAX #29 word segmentation →
//! contraction splitting → stop-word filter → lemma lookup / Snowball stem.

use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::stop_words::{ENGLISH_STOP_WORDS, IRREGULAR_LEMMAS};

/// English text normalizer. Built once at startup and shared read-only.
pub struct Normalizer {
    stemmer: Stemmer,
    stop_words: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
}

impl Normalizer {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            irregular: IRREGULAR_LEMMAS.iter().copied().collect(),
        }
    }

    /// Returns the lemmas of all non-stop-word tokens joined by single spaces.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text)
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .map(|token| self.lemma(&token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Dictionary base form of a lowercase token.
    pub fn lemma(&self, token: &str) -> String {
        let base = self.irregular.get(token).copied().unwrap_or(token);
        self.stemmer.stem(base).into_owned()
    }

    /// Lowercased, accent-folded word tokens in document order.
    pub(crate) fn tokens(&self, text: &str) -> Vec<String> {
        let folded: String = text
            .nfkd()
            .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                _ => c,
            })
            .collect::<String>()
            .to_lowercase();

        let mut tokens = Vec::new();
        for word in folded.unicode_words() {
            match split_contraction(word) {
                Some((head, clitic)) => {
                    if !head.is_empty() {
                        tokens.push(head.to_string());
                    }
                    tokens.push(clitic);
                }
                None => tokens.push(word.to_string()),
            }
        }
        tokens
    }
}

/// "don't" → ("do", "n't"), "it's" → ("it", "'s").
fn split_contraction(word: &str) -> Option<(&str, String)> {
    let idx = word.rfind('\'')?;
    let (head, tail) = (&word[..idx], &word[idx + 1..]);
    if tail.is_empty() {
        return None;
    }
    if tail == "t" && head.ends_with('n') && head.len() > 1 {
        return Some((&head[..head.len() - 1], "n't".to_string()));
    }
    Some((head, format!("'{tail}")))
}

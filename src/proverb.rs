//! Proverb generation: template selection and word substitution.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ProverbError;
use crate::templates::{MARKER, TEMPLATES};

/// A generated proverb. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProverbRecord {
    id: Uuid,
    text: String,
    word: String,
    timestamp: DateTime<Utc>,
}

impl ProverbRecord {
    /// Unique, time-ordered identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The substituted proverb.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word that was spliced in.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Creation time.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Trim user input and reject it if nothing is left.
///
/// # Errors
///
/// Returns [`ProverbError::EmptyWord`] for empty or whitespace-only input.
pub fn validate_word(raw: &str) -> Result<&str, ProverbError> {
    let word = raw.trim();
    if word.is_empty() {
        Err(ProverbError::EmptyWord)
    } else {
        Ok(word)
    }
}

/// Picks templates uniformly at random and splices words into them.
pub struct ProverbGenerator {
    rng: StdRng,
}

impl ProverbGenerator {
    /// Generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: StdRng::from_rng(&mut rand::rng()) }
    }

    /// Deterministic generator for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate a proverb for an already validated word.
    ///
    /// `word` must be non-empty and trimmed (see [`validate_word`]).
    pub fn generate(&mut self, word: &str) -> ProverbRecord {
        let index = self.rng.random_range(0..TEMPLATES.len());
        generate_from(index, word)
    }
}

impl Default for ProverbGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a proverb from a specific template.
///
/// # Panics
///
/// Panics if `template_index` is not below `TEMPLATES.len()`.
#[must_use]
pub fn generate_from(template_index: usize, word: &str) -> ProverbRecord {
    debug_assert!(!word.is_empty() && word.trim() == word, "word must be validated");
    let template = TEMPLATES[template_index];
    ProverbRecord {
        id: Uuid::now_v7(),
        text: template.replacen(MARKER, word, 1),
        word: word.to_string(),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims() {
        assert_eq!(validate_word("  решишь \n").unwrap(), "решишь");
    }

    #[test]
    fn validate_rejects_blank() {
        assert!(matches!(validate_word(""), Err(ProverbError::EmptyWord)));
        assert!(matches!(validate_word(" \t\n"), Err(ProverbError::EmptyWord)));
    }

    #[test]
    fn substitutes_into_known_template() {
        let record = generate_from(0, "решишь");
        assert_eq!(record.text(), "Не говори гоп, пока не решишь");
        assert_eq!(record.word(), "решишь");
    }

    #[test]
    fn word_is_kept_verbatim() {
        let record = generate_from(6, "МУДРЕНЕЕ");
        assert_eq!(record.text(), "Утро вечера МУДРЕНЕЕ");
    }

    #[test]
    fn generated_text_contains_word_and_no_marker() {
        let mut generator = ProverbGenerator::seeded(7);
        for word in ["кот", "пирог", "Rust", "две слова", "{word}x"] {
            for _ in 0..50 {
                let record = generator.generate(word);
                assert!(record.text().contains(word));
                assert_eq!(record.word(), word);
                let matches_template =
                    TEMPLATES.iter().any(|t| t.replacen(MARKER, word, 1) == record.text());
                assert!(matches_template, "unexpected text: {}", record.text());
            }
        }
    }

    #[test]
    fn no_residual_marker() {
        let mut generator = ProverbGenerator::seeded(1);
        for _ in 0..100 {
            assert!(!generator.generate("слово").text().contains(MARKER));
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut generator = ProverbGenerator::seeded(3);
        let a = generator.generate("кот");
        let b = generator.generate("кот");
        assert_ne!(a.id(), b.id());
        assert!(b.timestamp() >= a.timestamp());
    }

    #[test]
    fn selection_reaches_many_templates() {
        let mut generator = ProverbGenerator::seeded(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(generator.generate("x").text().to_string());
        }
        assert_eq!(seen.len(), TEMPLATES.len());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ProverbGenerator::seeded(99);
        let mut b = ProverbGenerator::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.generate("мёд").text(), b.generate("мёд").text());
        }
    }

    #[test]
    fn record_serializes_all_fields() {
        let record = generate_from(6, "кот");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["text"], "Утро вечера кот");
        assert_eq!(value["word"], "кот");
        assert_eq!(value["id"], record.id().to_string());
        assert!(value["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    }
}

//! Content Store
//!
//! Immutable, in-memory study content: the concept glossary, the quiz bank and
//! the study tips. The store is built once at startup and only read afterwards,
//! so it is shared between concurrently served requests without locking.

use crate::random::RandomSource;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Raised while building a [`ContentStore`]. The skill must not start serving
/// requests when any of these occur.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("The quiz question bank is empty")]
    EmptyQuizBank,
    #[error("The study tip list is empty")]
    EmptyTipList,
    #[error("Duplicate concept key: '{0}'")]
    DuplicateConcept(String),
}

/// A glossary entry explaining a single cloud concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptEntry {
    /// Lowercase, trimmed concept name (e.g. "availability zone").
    pub key: String,
    pub explanation: String,
}

impl ConceptEntry {
    /// Creates an entry, normalizing the key.
    pub fn new(key: impl AsRef<str>, explanation: impl Into<String>) -> Self {
        Self {
            key: normalize_key(key.as_ref()),
            explanation: explanation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyTip(String);

impl StudyTip {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Lowercases and trims a concept name so lookups are case-insensitive.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Read-only tables plus the random source used to sample them.
pub struct ContentStore {
    concepts: BTreeMap<String, ConceptEntry>,
    questions: Vec<QuizQuestion>,
    tips: Vec<StudyTip>,
    random: Arc<dyn RandomSource>,
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("concepts", &self.concepts.len())
            .field("questions", &self.questions.len())
            .field("tips", &self.tips.len())
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Builds a store from the given tables.
    ///
    /// Fails when the quiz bank or tip list is empty, or when two concepts
    /// normalize to the same key.
    pub fn new(
        concepts: Vec<ConceptEntry>,
        questions: Vec<QuizQuestion>,
        tips: Vec<StudyTip>,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::EmptyQuizBank);
        }
        if tips.is_empty() {
            return Err(ContentError::EmptyTipList);
        }

        let mut by_key = BTreeMap::new();
        for entry in concepts {
            let key = normalize_key(&entry.key);
            if by_key.contains_key(&key) {
                return Err(ContentError::DuplicateConcept(key));
            }
            by_key.insert(
                key.clone(),
                ConceptEntry {
                    key,
                    explanation: entry.explanation,
                },
            );
        }

        Ok(Self {
            concepts: by_key,
            questions,
            tips,
            random,
        })
    }

    /// Builds a store holding the built-in catalog.
    pub fn with_catalog(random: Arc<dyn RandomSource>) -> Result<Self, ContentError> {
        Self::new(
            crate::catalog::concepts(),
            crate::catalog::questions(),
            crate::catalog::tips(),
            random,
        )
    }

    /// Exact, case-insensitive lookup. Surrounding whitespace is ignored.
    pub fn lookup_concept(&self, name: &str) -> Option<&ConceptEntry> {
        self.concepts.get(&normalize_key(name))
    }

    /// Uniformly draws a question from the bank.
    pub fn random_question(&self) -> &QuizQuestion {
        let idx = self.random.pick(self.questions.len()) % self.questions.len();
        &self.questions[idx]
    }

    /// Uniformly draws a study tip.
    pub fn random_tip(&self) -> &StudyTip {
        let idx = self.random.pick(self.tips.len()) % self.tips.len();
        &self.tips[idx]
    }

    pub fn concepts(&self) -> impl Iterator<Item = &ConceptEntry> {
        self.concepts.values()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn tips(&self) -> &[StudyTip] {
        &self.tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{MockRandomSource, ThreadRandom};
    use std::collections::HashSet;

    fn catalog_store() -> ContentStore {
        ContentStore::with_catalog(Arc::new(ThreadRandom)).unwrap()
    }

    fn fixed_store(idx: usize) -> ContentStore {
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(move |_| idx);
        ContentStore::with_catalog(Arc::new(random)).unwrap()
    }

    #[test]
    fn test_content_error_display() {
        assert_eq!(
            format!("{}", ContentError::EmptyQuizBank),
            "The quiz question bank is empty"
        );
        assert_eq!(
            format!("{}", ContentError::DuplicateConcept("ec2".to_string())),
            "Duplicate concept key: 'ec2'"
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = catalog_store();
        for entry in store.concepts() {
            let lower = store.lookup_concept(&entry.key).unwrap();
            let upper = store.lookup_concept(&entry.key.to_uppercase()).unwrap();
            assert_eq!(lower.explanation, upper.explanation);
        }
    }

    #[test]
    fn test_lookup_trims_input() {
        let store = catalog_store();
        let entry = store.lookup_concept("  Availability Zone ").unwrap();
        assert_eq!(entry.key, "availability zone");
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let store = catalog_store();
        assert!(store.lookup_concept("Kubernetes").is_none());
        assert!(store.lookup_concept("ec").is_none());
        assert!(store.lookup_concept("ec2 instance").is_none());
        assert!(store.lookup_concept("").is_none());
    }

    #[test]
    fn test_lookup_is_pure() {
        let store = catalog_store();
        assert_eq!(store.lookup_concept("S3"), store.lookup_concept("S3"));
    }

    #[test]
    fn test_empty_quiz_bank_fails_fast() {
        let err = ContentStore::new(
            crate::catalog::concepts(),
            vec![],
            crate::catalog::tips(),
            Arc::new(ThreadRandom),
        )
        .unwrap_err();
        assert_eq!(err, ContentError::EmptyQuizBank);
    }

    #[test]
    fn test_empty_tip_list_fails_fast() {
        let err = ContentStore::new(
            crate::catalog::concepts(),
            crate::catalog::questions(),
            vec![],
            Arc::new(ThreadRandom),
        )
        .unwrap_err();
        assert_eq!(err, ContentError::EmptyTipList);
    }

    #[test]
    fn test_duplicate_concept_keys_rejected() {
        let err = ContentStore::new(
            vec![
                ConceptEntry::new("EC2", "first"),
                ConceptEntry::new(" ec2", "second"),
            ],
            crate::catalog::questions(),
            crate::catalog::tips(),
            Arc::new(ThreadRandom),
        )
        .unwrap_err();
        assert_eq!(err, ContentError::DuplicateConcept("ec2".to_string()));
    }

    #[test]
    fn test_empty_glossary_is_allowed() {
        let store = ContentStore::new(
            vec![],
            crate::catalog::questions(),
            crate::catalog::tips(),
            Arc::new(ThreadRandom),
        )
        .unwrap();
        assert!(store.lookup_concept("ec2").is_none());
    }

    #[test]
    fn test_random_question_uses_injected_source() {
        let store = fixed_store(2);
        assert_eq!(
            store.random_question().question,
            "Is AWS Lambda a serverless or virtual machine service?"
        );
    }

    #[test]
    fn test_random_tip_uses_injected_source() {
        let store = fixed_store(3);
        assert!(store.random_tip().text().starts_with("Remove distractions"));
    }

    #[test]
    fn test_out_of_range_pick_stays_in_bank() {
        let store = fixed_store(1_000);
        assert!(store.questions().contains(store.random_question()));
        assert!(store.tips().contains(store.random_tip()));
    }

    #[test]
    fn test_random_question_covers_bank() {
        let store = catalog_store();
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let question = store.random_question();
            assert!(store.questions().contains(question));
            seen.insert(question.question.clone());
        }
        assert_eq!(seen.len(), store.questions().len());
    }

    #[test]
    fn test_random_tip_covers_list() {
        let store = catalog_store();
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.insert(store.random_tip().text().to_string());
        }
        assert_eq!(seen.len(), store.tips().len());
    }
}

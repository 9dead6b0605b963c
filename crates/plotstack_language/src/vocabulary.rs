//! Vocabularies: named, composable bundles of words.
//!
//! A vocabulary lists the vocabularies it depends on. Flattening visits
//! dependencies first, so words registered by a dependency are tried before
//! same-named words of the dependent vocabulary.

use crate::word::Word;

/// A named set of words plus the vocabularies they build on.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    name: String,
    dependencies: Vec<Vocabulary>,
    words: Vec<Word>,
}

impl Vocabulary {
    /// Creates a vocabulary.
    #[must_use]
    pub fn new(name: impl Into<String>, dependencies: Vec<Vocabulary>, words: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            dependencies,
            words,
        }
    }

    /// Adds a direct dependency, placed after any existing ones.
    #[must_use]
    pub fn with_dependency(mut self, vocabulary: Vocabulary) -> Self {
        self.dependencies.push(vocabulary);
        self
    }

    /// Adds a word, placed after any existing ones.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<Word>) -> Self {
        self.words.push(word.into());
        self
    }

    /// The vocabulary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words declared directly by this vocabulary.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Every word reachable from this vocabulary: each dependency's words
    /// (recursively, in declaration order), then this vocabulary's own.
    #[must_use]
    pub fn all_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .dependencies
            .iter()
            .flat_map(Vocabulary::all_words)
            .collect();
        words.extend(self.words.iter().cloned());
        words
    }

    /// Transitive dependencies, depth first with each vocabulary's own
    /// dependencies listed before it. A vocabulary reached more than once is
    /// listed at its first position only.
    #[must_use]
    pub fn dependencies(&self) -> Vec<&Vocabulary> {
        let mut out: Vec<&Vocabulary> = Vec::new();
        for dependency in &self.dependencies {
            for vocabulary in dependency.dependencies().into_iter().chain([dependency]) {
                if !out.iter().any(|v| v.name == vocabulary.name) {
                    out.push(vocabulary);
                }
            }
        }
        out
    }
}

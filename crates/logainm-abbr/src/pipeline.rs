//! Abbreviation pipeline — orchestrates the shortening stages.

use tracing::debug;

use crate::mutation::char_len;
use crate::tables::AbbrTables;
use crate::{noun_phrase, substitution, truncation};

/// Default display budget, in characters.
pub const DEFAULT_MAX_LEN: usize = 19;

/// Abbreviation result with the reporting data a display needs.
#[derive(Debug, Clone)]
pub struct Abbreviation {
    pub output: String,
    pub original_len: usize,
    pub abbreviated_len: usize,
    pub max_len: usize,
    pub stages_applied: Vec<String>,
}

impl Abbreviation {
    /// Whether the result fits the budget. A name with nothing left to
    /// shorten can still come out over budget.
    pub fn fits(&self) -> bool {
        self.abbreviated_len <= self.max_len
    }
}

/// The abbreviator. Owns immutable replacement tables and a length budget;
/// calls are independent and safe to make from multiple threads.
pub struct Abbreviator {
    tables: AbbrTables,
    max_len: usize,
}

impl Abbreviator {
    pub fn new(tables: AbbrTables) -> Self {
        Self {
            tables,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    pub fn with_max_len(tables: AbbrTables, max_len: usize) -> Self {
        Self { tables, max_len }
    }

    /// Shorten `name` until it fits the budget.
    ///
    /// Stages run in fixed order, each gated on the running character
    /// length: adjective substitution, classifier substitution,
    /// definite-noun-phrase truncation, last-word truncation, then a
    /// progressive per-word truncation loop. The cascade stops at the first
    /// point the name fits; the result may still exceed the budget when no
    /// stage can shorten it further.
    pub fn abbreviate(&self, name: &str) -> Abbreviation {
        let original_len = char_len(name);
        let mut out = name.to_string();
        let mut stages = Vec::new();

        if char_len(&out) > self.max_len {
            out = substitution::apply(&out, &self.tables.adjectives);
            stages.push("adjectives".to_string());
            debug!(stage = "adjectives", len = char_len(&out));
        }

        if char_len(&out) > self.max_len {
            out = substitution::apply(&out, &self.tables.classifiers);
            stages.push("classifiers".to_string());
            debug!(stage = "classifiers", len = char_len(&out));
        }

        if char_len(&out) > self.max_len {
            if let Some(shortened) = noun_phrase::truncate_final(&out, &self.tables.mutations) {
                out = shortened;
                stages.push("noun-phrase".to_string());
                debug!(stage = "noun-phrase", len = char_len(&out));
            }
        }

        // Runs even when the noun-phrase stage already shortened the same
        // final word; re-truncating a first sound leaves it unchanged.
        if char_len(&out) > self.max_len {
            out = truncation::truncate_last_word(&out, &self.tables.mutations);
            stages.push("last-word".to_string());
            debug!(stage = "last-word", len = char_len(&out));
        }

        if char_len(&out) > self.max_len {
            stages.push("progressive".to_string());
            while char_len(&out) > self.max_len {
                let next = truncation::progressive_pass(&out, &self.tables.mutations);
                if next == out {
                    // Nothing truncatable left; give up over budget.
                    break;
                }
                out = next;
            }
            debug!(stage = "progressive", len = char_len(&out));
        }

        Abbreviation {
            original_len,
            abbreviated_len: char_len(&out),
            max_len: self.max_len,
            stages_applied: stages,
            output: out,
        }
    }
}

impl Default for Abbreviator {
    fn default() -> Self {
        Self::new(AbbrTables::default())
    }
}

//! Initial-mutation classifier — how many leading characters form a word's first sound.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Mutation-cluster prefixes, partitioned by character length.
///
/// Irish initial mutations (eclipsis, lenition, prefixed t/h/n) put extra
/// letters in front of a word's root; truncating inside such a cluster
/// leaves an unpronounceable fragment, so the cluster is the minimal unit
/// a word can be cut down to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationTables {
    pub clusters4: Vec<String>,
    pub clusters3: Vec<String>,
    pub clusters2: Vec<String>,
    pub vowels2: Vec<String>,
}

impl MutationTables {
    /// Number of leading characters forming the word's first sound (1–4).
    ///
    /// Probes the 4-character clusters, then 3, then both 2-character
    /// tables, first match wins. A word shorter than a probe length yields
    /// itself as the prefix and simply fails to match that bucket.
    pub fn first_sound_len(&self, word: &str) -> usize {
        let p = char_prefix(word, 4);
        if self.clusters4.iter().any(|c| c == p) {
            return 4;
        }
        let p = char_prefix(word, 3);
        if self.clusters3.iter().any(|c| c == p) {
            return 3;
        }
        let p = char_prefix(word, 2);
        if self.clusters2.iter().any(|c| c == p) || self.vowels2.iter().any(|c| c == p) {
            return 2;
        }
        1
    }

    /// Leading slice of `word` covering its first sound.
    pub fn first_sound<'a>(&self, word: &'a str) -> &'a str {
        char_prefix(word, self.first_sound_len(word))
    }

    /// Check that every entry sits in the bucket matching its length.
    pub fn validate(&self) -> Result<()> {
        for (bucket, want) in [
            (&self.clusters4, 4),
            (&self.clusters3, 3),
            (&self.clusters2, 2),
            (&self.vowels2, 2),
        ] {
            for cluster in bucket {
                let got = char_len(cluster);
                if got != want {
                    return Err(TableError::ClusterLength {
                        cluster: cluster.clone(),
                        got,
                        want,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Character count, not bytes — accented vowels count as one.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `n` characters of `s`, or all of `s` if shorter.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

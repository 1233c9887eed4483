//! Definite noun-phrase matching — finds the genitive construction whose
//! final noun is the preferred truncation target.

use crate::mutation::MutationTables;

/// Definite articles and proper-noun particles linking two nouns.
const MARKERS: &[&str] = &["an", "na", "Ó", "Ní", "Uí", "Mac", "Nic", "Mhic"];

/// Truncate the final word of the leftmost definite noun phrase to its
/// first sound, e.g. `Bóthar na gCloch` > `Bóthar na gCl`.
///
/// A phrase is a word, a marker, and a final word; `Mhic an` counts as a
/// single two-token marker when and only when a word follows it. Only the
/// first match is rewritten. Returns `None` when no phrase is found.
pub fn truncate_final(text: &str, mutations: &MutationTables) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    for i in 0..words.len() {
        if i + 3 < words.len() && words[i + 1] == "Mhic" && words[i + 2] == "an" {
            return Some(truncate_at(&words, i + 3, mutations));
        }
        if i + 2 < words.len() && MARKERS.contains(&words[i + 1]) {
            return Some(truncate_at(&words, i + 2, mutations));
        }
    }
    None
}

fn truncate_at(words: &[&str], target: usize, mutations: &MutationTables) -> String {
    let mut out = words.to_vec();
    out[target] = mutations.first_sound(words[target]);
    out.join(" ")
}

//! Ordered substring replacement — the adjective and classifier stages.

/// Apply every (full, abbreviation) pair in table order.
///
/// Replacement is a sequential cascade over raw substrings. Matching is not
/// anchored to word boundaries: Carraig > Crg also rewrites gCarraigíní to
/// gCrgíní, and an earlier key pre-empts a later, longer key over the same
/// text (Stáisiún > Stn fires before Stáisiún Dóiteáin can match).
// TODO: restrict keys to whole-word matches.
pub fn apply(text: &str, table: &[(String, String)]) -> String {
    let mut out = text.to_string();
    for (full, abbr) in table {
        if out.contains(full.as_str()) {
            out = out.replace(full.as_str(), abbr);
        }
    }
    out
}

//! Canonical name keys.
//!
//! The document registry and the roster store the same person differently:
//! reviewer fields carry "First Middle Paternal Maternal" (4 tokens), the
//! roster carries "Paternal Maternal First" (3 tokens). Each side is reduced
//! to the shared "First Paternal Maternal" form by a fixed positional
//! permutation — deliberately not a name parser. Names of any other token
//! count pass through unchanged and simply fail to match downstream.
//!
//! Callers pass already-normalized text (see [`crate::normalize::normalize`]).

/// Key for a document reviewer field.
///
/// Exactly 4 tokens: keep positions `[0, 2, 3]`, dropping the redundant
/// middle name. Any other arity is returned as-is.
pub fn document_name_key(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [first, _middle, paternal, maternal] => format!("{first} {paternal} {maternal}"),
        _ => name.to_string(),
    }
}

/// Key for a roster name.
///
/// Exactly 3 tokens: reorder positions `[2, 0, 1]` ("Paternal Maternal
/// First" becomes "First Paternal Maternal"). Any other arity is returned
/// as-is; such rows surface as unmatched reviewers rather than aborting
/// the run.
pub fn roster_name_key(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [paternal, maternal, first] => format!("{first} {paternal} {maternal}"),
        _ => name.to_string(),
    }
}

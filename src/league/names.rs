//! Case-insensitive name matching.
//!
//! Wrestler and title names are typed by hand, so lookups match on
//! substrings rather than equality. Three rules are used:
//!
//! - [`locates`]: the stored value contains the query (lookups, removals)
//! - [`overlaps`]: either name contains the other (duplicate protection)
//! - [`same_name`]: full equality (reign numbering)

fn fold(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Canonical stored form of a wrestler name.
pub fn canonical(name: &str) -> String {
    fold(name)
}

pub fn locates(stored: &str, query: &str) -> bool {
    fold(stored).contains(&fold(query))
}

pub fn overlaps(a: &str, b: &str) -> bool {
    let (a, b) = (fold(a), fold(b));
    a.contains(&b) || b.contains(&a)
}

pub fn same_name(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

//! Name-based tier1 slot aliases.

use crate::config::names::normalize_key;

/// Tier1 names mapped to 0-based slots.
///
/// Covers the construction preset and the workout preset.
static TIER1_SYNONYMS: [(&str, usize); 20] = [
    ("permitting", 0),
    ("permits", 0),
    ("planning", 0),
    ("structural", 1),
    ("structure", 1),
    ("systems", 2),
    ("mep", 2),
    ("sheathing", 3),
    ("enclosure", 3),
    ("finishings", 4),
    ("finishes", 4),
    ("finishing", 4),
    ("interior", 4),
    ("interiors", 4),
    ("push", 0),
    ("pull", 1),
    ("legs", 2),
    ("cardio", 3),
    ("core", 4),
    ("mobility", 4),
];

fn lookup(word: &str) -> Option<usize> {
    TIER1_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == word)
        .map(|(_, slot)| *slot)
}

/// 0-based tier1 slot for a category name.
///
/// The whole name is tried first, then each word in order, so
/// "Structural Work" resolves like "structural".
pub fn tier1_synonym_slot(name: &str) -> Option<usize> {
    let key = normalize_key(name);
    if key.is_empty() {
        return None;
    }

    lookup(&key).or_else(|| key.split('-').find_map(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_synonyms() {
        assert_eq!(tier1_synonym_slot("Permitting"), Some(0));
        assert_eq!(tier1_synonym_slot("STRUCTURAL"), Some(1));
        assert_eq!(tier1_synonym_slot("legs"), Some(2));
    }

    #[test]
    fn test_word_synonyms() {
        assert_eq!(tier1_synonym_slot("Structural Work"), Some(1));
        assert_eq!(tier1_synonym_slot("Permits & Planning"), Some(0));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(tier1_synonym_slot("Landscaping"), None);
        assert_eq!(tier1_synonym_slot(""), None);
    }
}

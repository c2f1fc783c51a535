//! Stable string hash used for fallback palette selection.

use crate::config::TIER2_SLOTS;

/// 32-bit rolling hash: `hash = (hash << 5) - hash + unit` over UTF-16 code units,
/// wrapped to a signed 32-bit integer.
///
/// Existing categories depend on this exact recurrence for their colors.
pub fn rolling_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// 0-based tier2 palette index for a category name.
pub fn hash_index(name: &str) -> usize {
    let hash = rolling_hash(&name.to_lowercase());
    (hash.unsigned_abs() as usize) % TIER2_SLOTS
}

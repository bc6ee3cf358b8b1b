//! Per-registrant display color hints.
//!
//! UIs color each registrant's row consistently across renders. The hue
//! comes from a deterministic hash of the name, with explicit overrides
//! for known household members whose colors are fixed by product choice.

/// Fixed hues for specific registrants. Checked before hashing.
const HUE_OVERRIDES: &[(&str, u16)] = &[
    ("來夏", 35),  // orange/gold
    ("湊斗", 210), // blue
    ("和奏", 320), // pink/magenta
];

/// Hue in `0..360` for a registrant name.
///
/// Same name, same hue, every time; unrelated names spread across the
/// wheel. Not a quality hash, just a stable one.
pub fn hue_for_name(name: &str) -> u16 {
    if let Some((_, hue)) = HUE_OVERRIDES.iter().find(|(n, _)| *n == name) {
        return *hue;
    }

    let mut hash: i32 = 0;
    for c in name.chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.rem_euclid(360) as u16
}

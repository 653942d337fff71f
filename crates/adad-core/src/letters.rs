//! Western (Pythagorean) letter values.
//!
//! Letters cycle through 1–9 in alphabet order: A, J and S are 1, B, K and T
//! are 2, and so on up to I and R at 9. Lookups are case-insensitive and
//! anything outside A–Z has no value.

use std::collections::BTreeMap;

/// Value table for the Pythagorean cycle, indexed by `letter - 'A'`.
const PYTHAGOREAN: [u32; 26] = [
    // A  B  C  D  E  F  G  H  I
    1, 2, 3, 4, 5, 6, 7, 8, 9, //
    // J  K  L  M  N  O  P  Q  R
    1, 2, 3, 4, 5, 6, 7, 8, 9, //
    // S  T  U  V  W  X  Y  Z
    1, 2, 3, 4, 5, 6, 7, 8,
];

/// Vowels used for the Soul Urge number. Y counts as a consonant.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Whether a letter is scored as a vowel or a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKind {
    /// A, E, I, O, U.
    Vowel,
    /// Every other scored letter.
    Consonant,
}

/// An immutable mapping from Latin letters to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTable {
    values: BTreeMap<char, u32>,
}

impl Default for LetterTable {
    fn default() -> Self {
        Self::pythagorean()
    }
}

impl LetterTable {
    /// The standard Pythagorean table.
    pub fn pythagorean() -> Self {
        let values = ('A'..='Z').zip(PYTHAGOREAN).collect();
        Self { values }
    }

    /// Build a table from explicit `(letter, value)` pairs.
    ///
    /// Letters are stored upper-case; later pairs overwrite earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, u32)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(c, v)| (c.to_ascii_uppercase(), v))
            .collect();
        Self { values }
    }

    /// Value of a letter, or `None` if it is not scored.
    pub fn value(&self, c: char) -> Option<u32> {
        self.values.get(&c.to_ascii_uppercase()).copied()
    }

    /// Classify a scored letter. Returns `None` for unscored characters.
    pub fn kind(&self, c: char) -> Option<LetterKind> {
        self.value(c)?;
        if VOWELS.contains(&c.to_ascii_uppercase()) {
            Some(LetterKind::Vowel)
        } else {
            Some(LetterKind::Consonant)
        }
    }

    /// Number of letters in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the table has no letters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_cycle() {
        let t = LetterTable::pythagorean();
        assert_eq!(t.len(), 26);
        for (letters, value) in [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ] {
            for c in letters.chars() {
                assert_eq!(t.value(c), Some(value), "{c}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = LetterTable::default();
        assert_eq!(t.value('j'), t.value('J'));
        assert_eq!(t.value('z'), Some(8));
    }

    #[test]
    fn non_latin_characters_have_no_value() {
        let t = LetterTable::default();
        assert_eq!(t.value('1'), None);
        assert_eq!(t.value(' '), None);
        assert_eq!(t.value('é'), None);
        assert_eq!(t.value('\u{0639}'), None);
    }

    #[test]
    fn vowels_and_consonants() {
        let t = LetterTable::default();
        assert_eq!(t.kind('a'), Some(LetterKind::Vowel));
        assert_eq!(t.kind('U'), Some(LetterKind::Vowel));
        assert_eq!(t.kind('Y'), Some(LetterKind::Consonant));
        assert_eq!(t.kind('t'), Some(LetterKind::Consonant));
        assert_eq!(t.kind('-'), None);
    }

    #[test]
    fn custom_table() {
        let t = LetterTable::from_pairs([('a', 1), ('b', 2)]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.value('A'), Some(1));
        assert_eq!(t.value('c'), None);
        assert!(!t.is_empty());
    }
}

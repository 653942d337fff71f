//! Persian Abjad values.
//!
//! The Abjad system assigns each letter of the Arabic alphabet a value on a
//! non-uniform scale: units for the first nine letters, tens for the next
//! nine, hundreds for the next nine, and 1000 for the last. The four
//! Persian-only letters take the value of the letter they are derived from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reduce::reduce_number;

/// Base letters and their values, written as escapes so visually identical
/// Arabic and Persian code points stay distinguishable.
const ABJAD_LETTERS: &[(char, u32)] = &[
    ('\u{0627}', 1),    // alef
    ('\u{0628}', 2),    // be
    ('\u{062C}', 3),    // jim
    ('\u{062F}', 4),    // dal
    ('\u{0647}', 5),    // he
    ('\u{0648}', 6),    // vav
    ('\u{0632}', 7),    // ze
    ('\u{062D}', 8),    // he jimi
    ('\u{0637}', 9),    // ta
    ('\u{06CC}', 10),   // ye (Persian)
    ('\u{06A9}', 20),   // kaf (Persian)
    ('\u{0644}', 30),   // lam
    ('\u{0645}', 40),   // mim
    ('\u{0646}', 50),   // nun
    ('\u{0633}', 60),   // sin
    ('\u{0639}', 70),   // ein
    ('\u{0641}', 80),   // fe
    ('\u{0635}', 90),   // sad
    ('\u{0642}', 100),  // qaf
    ('\u{0631}', 200),  // re
    ('\u{0634}', 300),  // shin
    ('\u{062A}', 400),  // te
    ('\u{062B}', 500),  // se
    ('\u{062E}', 600),  // khe
    ('\u{0630}', 700),  // zal
    ('\u{0636}', 800),  // zad
    ('\u{0638}', 900),  // za
    ('\u{063A}', 1000), // gheyn
];

/// Persian additions and common orthographic variants.
const ABJAD_VARIANTS: &[(char, u32)] = &[
    ('\u{067E}', 2),  // pe, as be
    ('\u{0686}', 3),  // che, as jim
    ('\u{0698}', 7),  // zhe, as ze
    ('\u{06AF}', 20), // gaf, as kaf
    ('\u{0622}', 1),  // alef madda
    ('\u{0623}', 1),  // alef hamza above
    ('\u{0625}', 1),  // alef hamza below
    ('\u{0621}', 1),  // hamza
    ('\u{0624}', 6),  // vav hamza
    ('\u{064A}', 10), // Arabic ye
    ('\u{0649}', 10), // alef maqsura
    ('\u{0626}', 10), // ye hamza
    ('\u{0643}', 20), // Arabic kaf
    ('\u{0629}', 5),  // te marbute
];

/// One scored character in an Abjad breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbjadEntry {
    /// The character as it appeared in the input.
    #[serde(rename = "char")]
    pub letter: char,
    /// Its Abjad value.
    pub value: u32,
}

/// The Abjad value of a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbjadResult {
    /// Sum of all scored characters, saturating at `u32::MAX`.
    pub total_value: u32,
    /// `total_value` reduced to a single digit or master number.
    pub reduced_value: u32,
    /// Scored characters in input order.
    pub breakdown: Vec<AbjadEntry>,
}

/// An immutable mapping from Persian/Arabic characters to Abjad values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbjadTable {
    values: BTreeMap<char, u32>,
}

impl Default for AbjadTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl AbjadTable {
    /// The 28 Abjad letters plus Persian letters and spelling variants.
    pub fn standard() -> Self {
        let values = ABJAD_LETTERS
            .iter()
            .chain(ABJAD_VARIANTS)
            .copied()
            .collect();
        Self { values }
    }

    /// Value of a character, or `None` if it is not scored.
    pub fn value(&self, c: char) -> Option<u32> {
        self.values.get(&c).copied()
    }

    /// A custom table. Characters mapped to 0 are never scored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, u32)>) -> Self {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the table has no characters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Compute the Abjad value of `text`.
    ///
    /// Characters without a value (spaces, Latin letters, diacritics,
    /// zero-width joiners) are skipped rather than recorded as zero.
    pub fn compute(&self, text: &str) -> AbjadResult {
        let breakdown: Vec<AbjadEntry> = text
            .chars()
            .filter_map(|c| {
                self.value(c)
                    .filter(|v| *v > 0)
                    .map(|value| AbjadEntry { letter: c, value })
            })
            .collect();
        let total_value = breakdown
            .iter()
            .fold(0u32, |sum, e| sum.saturating_add(e.value));

        AbjadResult {
            total_value,
            reduced_value: reduce_number(total_value, false).final_value,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_letters_cover_one_to_one_thousand() {
        assert_eq!(ABJAD_LETTERS.len(), 28);
        let mut values: Vec<u32> = ABJAD_LETTERS.iter().map(|(_, v)| *v).collect();
        values.sort_unstable();
        let expected: Vec<u32> = (1..=9)
            .chain((1..=9).map(|n| n * 10))
            .chain((1..=9).map(|n| n * 100))
            .chain([1000])
            .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn persian_letters_follow_their_base() {
        let t = AbjadTable::standard();
        assert_eq!(t.value('\u{067E}'), t.value('\u{0628}'));
        assert_eq!(t.value('\u{0686}'), t.value('\u{062C}'));
        assert_eq!(t.value('\u{0698}'), t.value('\u{0632}'));
        assert_eq!(t.value('\u{06AF}'), t.value('\u{06A9}'));
    }

    #[test]
    fn arabic_and_persian_forms_agree() {
        let t = AbjadTable::standard();
        assert_eq!(t.value('\u{064A}'), t.value('\u{06CC}'));
        assert_eq!(t.value('\u{0643}'), t.value('\u{06A9}'));
    }

    #[test]
    fn empty_text() {
        let r = AbjadTable::standard().compute("");
        assert_eq!(
            r,
            AbjadResult {
                total_value: 0,
                reduced_value: 0,
                breakdown: vec![],
            }
        );
    }

    #[test]
    fn ali() {
        // ein 70 + lam 30 + ye 10
        let r = AbjadTable::standard().compute("\u{0639}\u{0644}\u{06CC}");
        assert_eq!(r.total_value, 110);
        assert_eq!(r.reduced_value, 2);
        let values: Vec<u32> = r.breakdown.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![70, 30, 10]);
    }

    #[test]
    fn mohammad_reduces_to_master() {
        // mim 40 + he 8 + mim 40 + dal 4
        let r = AbjadTable::standard().compute("\u{0645}\u{062D}\u{0645}\u{062F}");
        assert_eq!(r.total_value, 92);
        assert_eq!(r.reduced_value, 11);
    }

    #[test]
    fn unmapped_characters_are_skipped() {
        // "ali reza" with a space, a ZWNJ and Latin noise
        let text = "\u{0639}\u{0644}\u{06CC} x\u{200C}\u{0631}\u{0636}\u{0627}!";
        let r = AbjadTable::standard().compute(text);
        let letters: String = r.breakdown.iter().map(|e| e.letter).collect();
        assert_eq!(letters, "\u{0639}\u{0644}\u{06CC}\u{0631}\u{0636}\u{0627}");
        assert_eq!(r.total_value, 110 + 200 + 800 + 1);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let text = "\u{0633}\u{0644}\u{0627}\u{0645} \u{062F}\u{0646}\u{06CC}\u{0627}";
        let r = AbjadTable::standard().compute(text);
        let sum: u32 = r.breakdown.iter().map(|e| e.value).sum();
        assert_eq!(sum, r.total_value);
    }

    #[test]
    fn very_long_text_saturates() {
        // 4,294,968 gheyn at 1000 each exceed u32::MAX
        let text = "\u{063A}".repeat(4_294_968);
        let r = AbjadTable::standard().compute(&text);
        assert_eq!(r.breakdown.len(), 4_294_968);
        assert_eq!(r.total_value, u32::MAX);
        assert_eq!(r.reduced_value, 3);
    }

    #[test]
    fn custom_table() {
        let t = AbjadTable::from_pairs([('\u{0627}', 7), ('\u{0628}', 0)]);
        assert_eq!(t.len(), 2);
        let r = t.compute("\u{0627}\u{0628}\u{0627}");
        assert_eq!(r.total_value, 14);
        assert_eq!(r.breakdown.len(), 2);
    }

    #[test]
    fn serializes_char_field() {
        let r = AbjadTable::standard().compute("\u{0627}");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["breakdown"][0]["char"], "\u{0627}");
        assert_eq!(json["breakdown"][0]["value"], 1);
    }
}

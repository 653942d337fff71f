//! Name analysis with Western letter values.
//!
//! Walks a Latin-script full name and collects the raw sums and letter-value
//! statistics the chart numbers are derived from.

use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, NumerologyResult};
use crate::letters::{LetterKind, LetterTable};

/// The name part of a chart request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInput {
    /// Full name in Latin script. Only A–Z letters are scored.
    pub full_name_latin: String,
    /// Optional Persian spelling, scored with Abjad values.
    pub persian_name: Option<String>,
}

impl NameInput {
    /// A name with no Persian spelling.
    pub fn new(full_name_latin: impl Into<String>) -> Self {
        Self {
            full_name_latin: full_name_latin.into(),
            persian_name: None,
        }
    }

    /// Attach a Persian spelling.
    pub fn with_persian(mut self, persian_name: impl Into<String>) -> Self {
        self.persian_name = Some(persian_name.into());
        self
    }
}

/// Raw letter statistics for a name. Nothing here is reduced yet, and sums
/// saturate at `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameProfile {
    /// Sum over every scored letter.
    pub expression_sum: u32,
    /// Sum over vowels only.
    pub soul_urge_sum: u32,
    /// Sum over consonants only.
    pub personality_sum: u32,
    /// Sum over the first scored letter of each whitespace-separated part.
    pub initials_sum: u32,
    /// How many letters carry each value; index 0 is value 1.
    pub value_counts: [u32; 9],
}

impl NameProfile {
    /// The most frequent letter value, ties going to the lowest value.
    pub fn hidden_passion(&self) -> u32 {
        let mut best = 1;
        let mut best_count = 0;
        for (idx, &count) in self.value_counts.iter().enumerate() {
            if count > best_count {
                best = idx as u32 + 1;
                best_count = count;
            }
        }
        best
    }

    /// Values from 1 to 9 that no letter in the name carries.
    pub fn missing_values(&self) -> Vec<u32> {
        self.value_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(idx, _)| idx as u32 + 1)
            .collect()
    }

    /// `9 - missing values`, never below 1.
    pub fn subconscious(&self) -> u32 {
        9u32.saturating_sub(self.missing_values().len() as u32).max(1)
    }
}

/// Collect letter statistics for `full_name`.
///
/// Fails only when the name contains no letter the table can score.
pub fn analyze_name(full_name: &str, table: &LetterTable) -> NumerologyResult<NameProfile> {
    let mut profile = NameProfile {
        expression_sum: 0,
        soul_urge_sum: 0,
        personality_sum: 0,
        initials_sum: 0,
        value_counts: [0; 9],
    };
    let mut scored = 0;

    for c in full_name.chars() {
        let (Some(value), Some(kind)) = (table.value(c), table.kind(c)) else {
            continue;
        };
        scored += 1;
        profile.expression_sum = profile.expression_sum.saturating_add(value);
        let part = match kind {
            LetterKind::Vowel => &mut profile.soul_urge_sum,
            LetterKind::Consonant => &mut profile.personality_sum,
        };
        *part = part.saturating_add(value);
        if let Some(slot) = (value as usize)
            .checked_sub(1)
            .and_then(|i| profile.value_counts.get_mut(i))
        {
            *slot = slot.saturating_add(1);
        }
    }

    if scored == 0 {
        return Err(NumerologyError::InvalidInput(format!(
            "name {full_name:?} has no scorable letters"
        )));
    }

    profile.initials_sum = full_name
        .split_whitespace()
        .filter_map(|part| part.chars().find_map(|c| table.value(c)))
        .fold(0, u32::saturating_add);

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> NameProfile {
        analyze_name(name, &LetterTable::default()).unwrap()
    }

    #[test]
    fn john_smith_sums() {
        let p = profile("John Smith");
        // J1 O6 H8 N5 S1 M4 I9 T2 H8
        assert_eq!(p.expression_sum, 44);
        assert_eq!(p.soul_urge_sum, 15);
        assert_eq!(p.personality_sum, 29);
        assert_eq!(p.initials_sum, 2);
        assert_eq!(p.value_counts.iter().sum::<u32>(), 9);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(profile("JOHN SMITH"), profile("john smith"));
        assert_eq!(profile("John-Smith!").expression_sum, 44);
    }

    #[test]
    fn non_latin_characters_are_skipped() {
        let p = profile("Sara \u{0633}\u{0627}\u{0631}\u{0627}");
        // S1 A1 R9 A1
        assert_eq!(p.expression_sum, 12);
        assert_eq!(p.initials_sum, 1);
    }

    #[test]
    fn no_letters_is_invalid() {
        for name in ["123", "", "   ", "\u{0639}\u{0644}\u{06CC}"] {
            let err = analyze_name(name, &LetterTable::default()).unwrap_err();
            assert!(matches!(err, NumerologyError::InvalidInput(_)), "{name:?}");
        }
    }

    #[test]
    fn hidden_passion_picks_most_frequent() {
        // A1 N5 N5 A1 N5 -> 5 appears three times
        assert_eq!(profile("Annan").hidden_passion(), 5);
    }

    #[test]
    fn hidden_passion_tie_goes_low() {
        // John Smith: 1 and 8 both appear twice
        assert_eq!(profile("John Smith").hidden_passion(), 1);
    }

    #[test]
    fn subconscious_counts_missing_values() {
        let p = profile("John Smith");
        assert_eq!(p.missing_values(), vec![3, 7]);
        assert_eq!(p.subconscious(), 7);
    }

    #[test]
    fn subconscious_never_below_one() {
        // only value 1 present, eight missing
        assert_eq!(profile("Aja").subconscious(), 1);
    }

    #[test]
    fn initials_skip_parts_without_letters() {
        // "Mary 2nd Jones": M4 + N5 (first letter of "2nd") + J1
        assert_eq!(profile("Mary 2nd Jones").initials_sum, 10);
        assert_eq!(profile("Mary 42 Jones").initials_sum, 5);
    }

    #[test]
    fn huge_letter_values_saturate() {
        let table = LetterTable::from_pairs([('a', u32::MAX), ('b', u32::MAX)]);
        let p = analyze_name("Aab Ba", &table).unwrap();
        assert_eq!(p.expression_sum, u32::MAX);
        assert_eq!(p.soul_urge_sum, u32::MAX);
        assert_eq!(p.personality_sum, u32::MAX);
        assert_eq!(p.initials_sum, u32::MAX);
    }

    #[test]
    fn name_input_builder() {
        let input = NameInput::new("Ali Rezaei").with_persian("\u{0639}\u{0644}\u{06CC}");
        assert_eq!(input.full_name_latin, "Ali Rezaei");
        assert!(input.persian_name.is_some());
    }
}

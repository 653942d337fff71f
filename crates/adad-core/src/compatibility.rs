//! Life-path compatibility.
//!
//! Compatibility is a symmetric relation keyed by an unordered pair of
//! life-path digits. The built-in matrix covers every same-number pair and a
//! curated set of cross pairs; anything else gets a moderate fallback.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, NumerologyResult};
use crate::reduce::root_digit;

/// Qualitative compatibility level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    /// Natural harmony.
    Excellent,
    /// Works well with little effort.
    Good,
    /// Workable with conscious effort.
    Moderate,
    /// Significant friction.
    Challenging,
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Challenging => write!(f, "Challenging"),
        }
    }
}

/// The result of scoring two life paths against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Score from 0 to 100.
    pub score: u8,
    /// Qualitative level.
    pub level: CompatibilityLevel,
    /// One-line summary.
    pub description: String,
    /// What the pair does well together.
    pub strengths: Vec<String>,
    /// Where the pair tends to clash.
    pub challenges: Vec<String>,
    /// Advice for the pair.
    pub advice: String,
}

impl CompatibilityResult {
    /// The result returned for pairs the matrix does not list.
    pub fn fallback() -> Self {
        Self {
            score: 70,
            level: CompatibilityLevel::Moderate,
            description: "compatible with effort".to_string(),
            strengths: vec!["mutual learning".to_string()],
            challenges: vec!["fundamental differences".to_string()],
            advice: "patience and mutual understanding are key".to_string(),
        }
    }
}

/// An unordered pair of life-path digits, stored as `(low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: u32,
    high: u32,
}

impl PairKey {
    /// Normalize `a` and `b` into a key.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Parse `"a-b"` in either order.
    pub fn parse(s: &str) -> Option<Self> {
        let (a, b) = s.trim().split_once('-')?;
        Some(Self::new(a.trim().parse().ok()?, b.trim().parse().ok()?))
    }

    /// True when both sides are life-path digits 1-9.
    fn is_in_range(&self) -> bool {
        (1..=9).contains(&self.low) && (1..=9).contains(&self.high)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A built-in matrix row: pair, score, level, description, strengths,
/// challenges, advice.
type Row = (
    (u32, u32),
    u8,
    CompatibilityLevel,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static str,
);

use CompatibilityLevel::{Challenging, Excellent, Good, Moderate};

const BUILTIN: &[Row] = &[
    // Same-number pairs
    (
        (1, 1),
        70,
        Good,
        "two leaders who push each other forward",
        &["shared ambition", "decisiveness"],
        &["competition for control", "stubbornness"],
        "take turns leading and celebrate each other's wins",
    ),
    (
        (2, 2),
        85,
        Excellent,
        "a gentle and deeply attuned partnership",
        &["empathy", "harmony", "emotional support"],
        &["avoiding conflict", "indecision"],
        "say what you need out loud instead of waiting to be guessed",
    ),
    (
        (3, 3),
        75,
        Good,
        "a playful, expressive and social pair",
        &["creativity", "humor", "lively conversation"],
        &["scattered focus", "avoiding hard topics"],
        "finish what you start together and make room for serious talks",
    ),
    (
        (4, 4),
        80,
        Good,
        "a steady pair that builds something lasting",
        &["reliability", "shared discipline", "loyalty"],
        &["rigidity", "routine without joy"],
        "plan surprises as carefully as you plan budgets",
    ),
    (
        (5, 5),
        65,
        Moderate,
        "an exciting pair that loves freedom",
        &["adventure", "curiosity", "spontaneity"],
        &["restlessness", "lack of commitment"],
        "build a home base you both want to come back to",
    ),
    (
        (6, 6),
        85,
        Excellent,
        "a caring, family-centred bond",
        &["devotion", "nurturing", "shared values"],
        &["over-responsibility", "self-neglect"],
        "care for yourselves as generously as you care for others",
    ),
    (
        (7, 7),
        70,
        Good,
        "two seekers who respect each other's depth",
        &["intellectual connection", "respect for solitude"],
        &["emotional distance", "secrecy"],
        "share your inner world, not just your ideas",
    ),
    (
        (8, 8),
        65,
        Moderate,
        "a powerful, goal-driven alliance",
        &["ambition", "material success"],
        &["power struggles", "work before love"],
        "set shared goals and leave competition at the door",
    ),
    (
        (9, 9),
        80,
        Good,
        "a compassionate pair with a wide horizon",
        &["idealism", "generosity", "understanding"],
        &["neglecting practical matters", "self-sacrifice"],
        "keep your feet on the ground while you change the world",
    ),
    // Cross pairs
    (
        (1, 2),
        80,
        Good,
        "a leader and a diplomat who complete each other",
        &["balance of action and care", "clear roles"],
        &["one voice dominating", "hurt feelings"],
        "the leader listens, the diplomat speaks up",
    ),
    (
        (1, 3),
        90,
        Excellent,
        "a bright, energetic and inspiring match",
        &["enthusiasm", "creativity", "shared optimism"],
        &["impatience", "shallow planning"],
        "turn your bursts of inspiration into concrete plans",
    ),
    (
        (1, 4),
        55,
        Challenging,
        "boldness meets caution",
        &["vision grounded by structure"],
        &["different tempos", "rigidity versus risk"],
        "respect the other's pace before asking them to change it",
    ),
    (
        (1, 5),
        85,
        Excellent,
        "an adventurous pair always on the move",
        &["independence", "excitement", "courage"],
        &["restlessness", "little patience for routine"],
        "make time to rest together, not only to chase the next thing",
    ),
    (
        (1, 8),
        60,
        Moderate,
        "two strong wills aiming high",
        &["drive", "ambition"],
        &["power struggles", "pride"],
        "divide territory clearly and back each other in public",
    ),
    (
        (2, 4),
        85,
        Excellent,
        "a loyal and secure partnership",
        &["stability", "trust", "patience"],
        &["routine", "avoiding change"],
        "add novelty on purpose",
    ),
    (
        (2, 6),
        90,
        Excellent,
        "a tender, home-loving match",
        &["compassion", "devotion", "peace"],
        &["over-giving", "avoiding conflict"],
        "let honest disagreement be a form of care",
    ),
    (
        (2, 8),
        80,
        Good,
        "support meets ambition",
        &["complementary strengths", "security"],
        &["imbalance of power", "feeling unseen"],
        "acknowledge the quiet work as loudly as the visible wins",
    ),
    (
        (3, 5),
        85,
        Excellent,
        "a vibrant, fun-loving pair",
        &["humor", "adventure", "social ease"],
        &["inconsistency", "avoiding responsibility"],
        "share chores as enthusiastically as you share plans",
    ),
    (
        (3, 6),
        85,
        Excellent,
        "creativity wrapped in warmth",
        &["artistic connection", "affection"],
        &["criticism", "unequal effort"],
        "appreciate more than you correct",
    ),
    (
        (3, 7),
        50,
        Challenging,
        "expression meets introspection",
        &["learning from difference"],
        &["social versus solitary needs", "misread silences"],
        "explain your needs rather than assuming they are obvious",
    ),
    (
        (4, 6),
        85,
        Excellent,
        "a responsible, family-minded pair",
        &["commitment", "practicality", "loyalty"],
        &["worry", "heaviness"],
        "make laughter part of the routine",
    ),
    (
        (4, 5),
        45,
        Challenging,
        "stability meets freedom",
        &["each offers what the other lacks"],
        &["control versus independence", "clashing lifestyles"],
        "agree on a few firm rules and leave the rest open",
    ),
    (
        (4, 8),
        85,
        Excellent,
        "a practical power couple",
        &["shared work ethic", "long-term planning"],
        &["workaholism", "emotional reserve"],
        "schedule time for feelings, not just for goals",
    ),
    (
        (5, 7),
        75,
        Good,
        "two explorers of different worlds",
        &["curiosity", "respect for space"],
        &["detachment", "unpredictability"],
        "check in often, even when you are off exploring",
    ),
    (
        (6, 9),
        90,
        Excellent,
        "a generous pair devoted to others",
        &["compassion", "shared ideals", "service"],
        &["neglecting the relationship itself"],
        "save some of your care for each other",
    ),
    (
        (7, 9),
        80,
        Good,
        "a spiritual and thoughtful bond",
        &["depth", "wisdom", "idealism"],
        &["distance", "living in your heads"],
        "ground your shared ideals in everyday gestures",
    ),
    (
        (8, 9),
        55,
        Challenging,
        "material drive meets idealism",
        &["big vision"],
        &["different values around money and purpose"],
        "find one cause you can both invest in",
    ),
];

/// A symmetric compatibility lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    entries: BTreeMap<PairKey, CompatibilityResult>,
}

impl Default for CompatibilityMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}

/// JSON form of a matrix entry.
#[derive(Debug, Deserialize, Serialize)]
struct MatrixEntry {
    pair: String,
    #[serde(flatten)]
    result: CompatibilityResult,
}

/// JSON form of a matrix.
#[derive(Debug, Deserialize, Serialize)]
struct MatrixDocument {
    entries: Vec<MatrixEntry>,
}

impl CompatibilityMatrix {
    /// The built-in matrix.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(
                |&((a, b), score, level, description, strengths, challenges, advice)| {
                    (
                        PairKey::new(a, b),
                        CompatibilityResult {
                            score,
                            level,
                            description: description.to_string(),
                            strengths: strengths.iter().map(|s| (*s).to_string()).collect(),
                            challenges: challenges.iter().map(|s| (*s).to_string()).collect(),
                            advice: advice.to_string(),
                        },
                    )
                },
            )
            .collect();
        Self { entries }
    }

    /// Load a matrix from JSON:
    ///
    /// ```text
    /// { "entries": [ { "pair": "3-7", "score": 88, "level": "excellent",
    ///                  "description": "...", "strengths": ["..."],
    ///                  "challenges": ["..."], "advice": "..." } ] }
    /// ```
    ///
    /// Pairs may be written in either order. Malformed pairs, pairs with a
    /// side outside 1-9, scores above 100 and a pair listed twice are
    /// rejected.
    pub fn from_json(json: &str) -> NumerologyResult<Self> {
        let doc: MatrixDocument = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();

        for entry in doc.entries {
            let key = PairKey::parse(&entry.pair).ok_or_else(|| {
                NumerologyError::InvalidConfig(format!("invalid pair {:?}", entry.pair))
            })?;
            if !key.is_in_range() {
                return Err(NumerologyError::InvalidConfig(format!(
                    "pair {key} is outside 1-9"
                )));
            }
            if entry.result.score > 100 {
                return Err(NumerologyError::InvalidConfig(format!(
                    "score {} for pair {key} is above 100",
                    entry.result.score
                )));
            }
            if entries.insert(key, entry.result).is_some() {
                return Err(NumerologyError::InvalidConfig(format!(
                    "pair {key} listed more than once"
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Serialize the matrix to the JSON form accepted by [`Self::from_json`].
    pub fn to_json(&self) -> NumerologyResult<String> {
        let doc = MatrixDocument {
            entries: self
                .entries
                .iter()
                .map(|(key, result)| MatrixEntry {
                    pair: key.to_string(),
                    result: result.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Look up a pair without falling back.
    pub fn get(&self, a: u32, b: u32) -> Option<&CompatibilityResult> {
        self.entries.get(&PairKey::new(a, b))
    }

    /// Score two life paths.
    ///
    /// Master numbers are looked up by their root digit (11 as 2, 22 as 4,
    /// 33 as 6). Any other value outside 1-9, and pairs missing from the
    /// matrix, get [`CompatibilityResult::fallback`].
    pub fn score(&self, a: u32, b: u32) -> CompatibilityResult {
        let key = PairKey::new(root_digit(a), root_digit(b));
        match self.entries.get(&key) {
            Some(result) => result.clone(),
            None => {
                tracing::debug!(pair = %key, "no matrix entry, using fallback");
                CompatibilityResult::fallback()
            }
        }
    }

    /// Number of listed pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no pairs are listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_same_number_pairs() {
        let m = CompatibilityMatrix::builtin();
        for n in 1..=9 {
            assert!(m.get(n, n).is_some(), "{n}-{n} missing");
        }
    }

    #[test]
    fn builtin_has_no_duplicate_pairs() {
        let m = CompatibilityMatrix::builtin();
        assert_eq!(m.len(), BUILTIN.len());
    }

    #[test]
    fn builtin_scores_are_percentages() {
        for ((a, b), score, ..) in BUILTIN {
            assert!(*score <= 100, "{a}-{b}: {score}");
            assert!((1..=9).contains(a) && (1..=9).contains(b));
        }
    }

    #[test]
    fn one_one_is_good_seventy() {
        let r = CompatibilityMatrix::builtin().score(1, 1);
        assert_eq!(r.score, 70);
        assert_eq!(r.level, CompatibilityLevel::Good);
    }

    #[test]
    fn lookup_is_symmetric() {
        let m = CompatibilityMatrix::builtin();
        for a in 1..=9 {
            for b in 1..=9 {
                assert_eq!(m.score(a, b), m.score(b, a), "{a}-{b}");
            }
        }
    }

    #[test]
    fn unlisted_pair_falls_back() {
        let m = CompatibilityMatrix::builtin();
        assert!(m.get(2, 9).is_none());
        let r = m.score(2, 9);
        assert_eq!(r, CompatibilityResult::fallback());
        assert_eq!(r.score, 70);
        assert_eq!(r.level, CompatibilityLevel::Moderate);
        assert_eq!(r.description, "compatible with effort");
        assert_eq!(r.strengths, vec!["mutual learning"]);
        assert_eq!(r.challenges, vec!["fundamental differences"]);
        assert_eq!(r.advice, "patience and mutual understanding are key");
    }

    #[test]
    fn out_of_range_falls_back() {
        let m = CompatibilityMatrix::builtin();
        for (a, b) in [(0, 3), (12, 3), (10, 1), (40, 4), (29, 2), (13, 4)] {
            assert_eq!(m.score(a, b), CompatibilityResult::fallback(), "{a}-{b}");
        }
    }

    #[test]
    fn master_numbers_use_root_digit() {
        let m = CompatibilityMatrix::builtin();
        assert_eq!(m.score(11, 4), m.score(2, 4));
        assert_eq!(m.score(22, 22), m.score(4, 4));
        assert_eq!(m.score(33, 9), m.score(6, 9));
    }

    #[test]
    fn pair_key_normalizes() {
        assert_eq!(PairKey::new(7, 3), PairKey::new(3, 7));
        assert_eq!(PairKey::new(7, 3).to_string(), "3-7");
        assert_eq!(PairKey::parse("7-3"), Some(PairKey::new(3, 7)));
        assert_eq!(PairKey::parse(" 1 - 2 "), Some(PairKey::new(1, 2)));
        assert_eq!(PairKey::parse("1"), None);
        assert_eq!(PairKey::parse("a-b"), None);
    }

    #[test]
    fn level_display() {
        assert_eq!(CompatibilityLevel::Challenging.to_string(), "Challenging");
        assert_eq!(CompatibilityLevel::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn json_round_trip_preserves_lookups() {
        let m = CompatibilityMatrix::builtin();
        let json = m.to_json().unwrap();
        let loaded = CompatibilityMatrix::from_json(&json).unwrap();
        assert_eq!(loaded, m);
    }

    #[test]
    fn json_pairs_are_normalized() {
        let json = r#"{ "entries": [ {
            "pair": "7-3", "score": 88, "level": "excellent",
            "description": "custom", "strengths": ["a"], "challenges": [],
            "advice": "b"
        } ] }"#;
        let m = CompatibilityMatrix::from_json(json).unwrap();
        assert_eq!(m.score(3, 7).score, 88);
        assert_eq!(m.score(7, 3).description, "custom");
        assert_eq!(m.score(1, 1), CompatibilityResult::fallback());
    }

    #[test]
    fn json_rejects_bad_documents() {
        let entry = |pair: &str, score: u32| {
            format!(
                r#"{{ "pair": "{pair}", "score": {score}, "level": "good",
                    "description": "", "strengths": [], "challenges": [], "advice": "" }}"#
            )
        };

        let bad_pair = format!(r#"{{ "entries": [ {} ] }}"#, entry("x", 50));
        let out_of_range = format!(r#"{{ "entries": [ {} ] }}"#, entry("0-40", 50));
        let master_pair = format!(r#"{{ "entries": [ {} ] }}"#, entry("11-2", 50));
        let too_high = format!(r#"{{ "entries": [ {} ] }}"#, entry("1-2", 150));
        let duplicate = format!(
            r#"{{ "entries": [ {}, {} ] }}"#,
            entry("1-2", 50),
            entry("2-1", 60)
        );

        for doc in [
            bad_pair,
            out_of_range,
            master_pair,
            too_high,
            duplicate,
            "not json".to_string(),
        ] {
            assert!(
                matches!(
                    CompatibilityMatrix::from_json(&doc),
                    Err(NumerologyError::InvalidConfig(_))
                ),
                "{doc}"
            );
        }
    }
}

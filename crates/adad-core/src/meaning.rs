//! Interpretive meanings for chart numbers.
//!
//! Static text keyed by the values a reduction can produce (1–9, 11, 22, 33)
//! and by the karmic-debt numbers (13, 14, 16, 19).

use serde::Serialize;

/// What a number signifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    /// The number this meaning belongs to.
    pub number: u32,
    /// Short English title.
    pub title: &'static str,
    /// Persian title.
    pub persian_title: &'static str,
    /// A few keywords.
    pub keywords: &'static [&'static str],
    /// One-paragraph interpretation.
    pub description: &'static str,
}

const NUMBER_MEANINGS: &[NumberMeaning] = &[
    NumberMeaning {
        number: 1,
        title: "The Leader",
        persian_title: "رهبر",
        keywords: &["independence", "initiative", "courage"],
        description: "A pioneer who prefers to go first. Strong will and original ideas, \
                      with a lesson in patience and cooperation.",
    },
    NumberMeaning {
        number: 2,
        title: "The Diplomat",
        persian_title: "دیپلمات",
        keywords: &["partnership", "sensitivity", "balance"],
        description: "A peacemaker attuned to others. Thrives in cooperation, \
                      with a lesson in trusting its own voice.",
    },
    NumberMeaning {
        number: 3,
        title: "The Communicator",
        persian_title: "ارتباط‌گر",
        keywords: &["expression", "creativity", "joy"],
        description: "A natural storyteller and artist. Brings lightness to every room, \
                      with a lesson in focus and follow-through.",
    },
    NumberMeaning {
        number: 4,
        title: "The Builder",
        persian_title: "سازنده",
        keywords: &["order", "discipline", "stability"],
        description: "A steady worker who lays solid foundations. Dependable and practical, \
                      with a lesson in flexibility.",
    },
    NumberMeaning {
        number: 5,
        title: "The Adventurer",
        persian_title: "ماجراجو",
        keywords: &["freedom", "change", "curiosity"],
        description: "A restless explorer who learns by experience. Adaptable and magnetic, \
                      with a lesson in commitment.",
    },
    NumberMeaning {
        number: 6,
        title: "The Nurturer",
        persian_title: "پرورش‌دهنده",
        keywords: &["responsibility", "love", "home"],
        description: "A caretaker devoted to family and community. Warm and protective, \
                      with a lesson in letting others carry their own weight.",
    },
    NumberMeaning {
        number: 7,
        title: "The Seeker",
        persian_title: "جستجوگر",
        keywords: &["wisdom", "introspection", "mystery"],
        description: "A thinker drawn to hidden truths. Analytical and spiritual, \
                      with a lesson in opening up to others.",
    },
    NumberMeaning {
        number: 8,
        title: "The Achiever",
        persian_title: "موفق",
        keywords: &["power", "abundance", "authority"],
        description: "An organizer with a talent for material success. Ambitious and capable, \
                      with a lesson in balancing wealth and heart.",
    },
    NumberMeaning {
        number: 9,
        title: "The Humanitarian",
        persian_title: "انسان‌دوست",
        keywords: &["compassion", "completion", "generosity"],
        description: "An old soul with a wide heart. Idealistic and forgiving, \
                      with a lesson in letting go.",
    },
    NumberMeaning {
        number: 11,
        title: "The Illuminator",
        persian_title: "روشنگر",
        keywords: &["intuition", "inspiration", "vision"],
        description: "Master number of spiritual insight. A heightened 2, \
                      sensitive and inspiring, with nervous energy to ground.",
    },
    NumberMeaning {
        number: 22,
        title: "The Master Builder",
        persian_title: "معمار بزرگ",
        keywords: &["vision", "mastery", "legacy"],
        description: "Master number that turns dreams into structures. A heightened 4, \
                      able to build on a grand scale.",
    },
    NumberMeaning {
        number: 33,
        title: "The Master Teacher",
        persian_title: "استاد بزرگ",
        keywords: &["healing", "service", "unconditional love"],
        description: "Master number of compassionate guidance. A heightened 6, \
                      devoted to uplifting others.",
    },
];

const KARMIC_DEBT_MEANINGS: &[NumberMeaning] = &[
    NumberMeaning {
        number: 13,
        title: "Karmic Debt of Effort",
        persian_title: "دین کارمایی تلاش",
        keywords: &["hard work", "perseverance"],
        description: "Shortcuts tend to fail. Steady, patient work is what pays off.",
    },
    NumberMeaning {
        number: 14,
        title: "Karmic Debt of Freedom",
        persian_title: "دین کارمایی آزادی",
        keywords: &["moderation", "adaptability"],
        description: "Freedom must be balanced with self-control and commitment.",
    },
    NumberMeaning {
        number: 16,
        title: "Karmic Debt of Ego",
        persian_title: "دین کارمایی خودبینی",
        keywords: &["humility", "rebirth"],
        description: "Pride gets humbled. Growth comes from rebuilding on honest ground.",
    },
    NumberMeaning {
        number: 19,
        title: "Karmic Debt of Power",
        persian_title: "دین کارمایی قدرت",
        keywords: &["independence", "accepting help"],
        description: "Strength is learned alongside others, not in isolation.",
    },
];

/// Meaning of a chart value (1–9, 11, 22, 33).
pub fn meaning_for(number: u32) -> Option<&'static NumberMeaning> {
    NUMBER_MEANINGS.iter().find(|m| m.number == number)
}

/// Meaning of a karmic-debt number (13, 14, 16, 19).
pub fn karmic_debt_meaning(number: u32) -> Option<&'static NumberMeaning> {
    KARMIC_DEBT_MEANINGS.iter().find(|m| m.number == number)
}

/// Every chart-value meaning, in number order.
pub fn all_meanings() -> &'static [NumberMeaning] {
    NUMBER_MEANINGS
}

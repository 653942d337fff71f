//! The complete numerology chart.
//!
//! A chart is assembled once from a name, a birth date and an explicit
//! current date, and never changes afterwards.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::abjad::{AbjadResult, AbjadTable};
use crate::date::{BirthDate, birthday_number, life_path, personal_cycle};
use crate::error::NumerologyResult;
use crate::letters::LetterTable;
use crate::name::{NameInput, analyze_name};
use crate::reduce::reduce;

/// A named number in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPosition {
    /// From the full birth date.
    LifePath,
    /// From every letter of the name.
    Expression,
    /// From the vowels of the name.
    SoulUrge,
    /// From the consonants of the name.
    Personality,
    /// From the day of birth.
    Birthday,
    /// Life Path plus Expression.
    Maturity,
    /// The most frequent letter value.
    HiddenPassion,
    /// Nine minus the missing letter values.
    Subconscious,
    /// From the initials.
    Balance,
    /// Birth day and month with the current year.
    PersonalYear,
    /// Personal year with the current month.
    PersonalMonth,
    /// Personal month with the current day.
    PersonalDay,
}

impl ChartPosition {
    /// All positions in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::LifePath,
            Self::Expression,
            Self::SoulUrge,
            Self::Personality,
            Self::Birthday,
            Self::Maturity,
            Self::HiddenPassion,
            Self::Subconscious,
            Self::Balance,
            Self::PersonalYear,
            Self::PersonalMonth,
            Self::PersonalDay,
        ]
    }

    /// What this position describes.
    pub fn description(self) -> &'static str {
        match self {
            Self::LifePath => "the main path and lessons of this life",
            Self::Expression => "natural talents and abilities",
            Self::SoulUrge => "the heart's inner desires",
            Self::Personality => "how others first perceive you",
            Self::Birthday => "a special gift carried from birth",
            Self::Maturity => "the goal that emerges in later life",
            Self::HiddenPassion => "a talent you keep returning to",
            Self::Subconscious => "how you react under pressure",
            Self::Balance => "how you regain balance in hard times",
            Self::PersonalYear => "the theme of the current year",
            Self::PersonalMonth => "the theme of the current month",
            Self::PersonalDay => "the energy of today",
        }
    }
}

impl fmt::Display for ChartPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LifePath => write!(f, "Life Path"),
            Self::Expression => write!(f, "Expression"),
            Self::SoulUrge => write!(f, "Soul Urge"),
            Self::Personality => write!(f, "Personality"),
            Self::Birthday => write!(f, "Birthday"),
            Self::Maturity => write!(f, "Maturity"),
            Self::HiddenPassion => write!(f, "Hidden Passion"),
            Self::Subconscious => write!(f, "Subconscious Self"),
            Self::Balance => write!(f, "Balance"),
            Self::PersonalYear => write!(f, "Personal Year"),
            Self::PersonalMonth => write!(f, "Personal Month"),
            Self::PersonalDay => write!(f, "Personal Day"),
        }
    }
}

/// Every number derived from one name, birth date and current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteNumerologyChart {
    /// Reduced birth date.
    pub life_path_number: u32,
    /// Reduced sum of all name letters.
    pub expression_number: u32,
    /// Reduced sum of vowels (0 when the name has none).
    pub soul_urge_number: u32,
    /// Reduced sum of consonants (0 when the name has none).
    pub personality_number: u32,
    /// Reduced day of birth.
    pub birthday_number: u32,
    /// reduce(life path + expression).
    pub maturity_number: u32,
    /// Most frequent letter value.
    pub hidden_passion: u32,
    /// 9 minus missing letter values, at least 1.
    pub subconscious: u32,
    /// Reduced sum of initials.
    pub balance_number: u32,
    /// Personal year for the supplied current date.
    pub personal_year: u32,
    /// Personal month for the supplied current date.
    pub personal_month: u32,
    /// Personal day for the supplied current date.
    pub personal_day: u32,
    /// Karmic-debt numbers met while computing the life path.
    pub karmic_debt_numbers: Vec<u32>,
    /// Abjad value of the Persian name, if one was given.
    pub abjad: Option<AbjadResult>,
}

impl CompleteNumerologyChart {
    /// Value at a position.
    pub fn get(&self, position: ChartPosition) -> u32 {
        match position {
            ChartPosition::LifePath => self.life_path_number,
            ChartPosition::Expression => self.expression_number,
            ChartPosition::SoulUrge => self.soul_urge_number,
            ChartPosition::Personality => self.personality_number,
            ChartPosition::Birthday => self.birthday_number,
            ChartPosition::Maturity => self.maturity_number,
            ChartPosition::HiddenPassion => self.hidden_passion,
            ChartPosition::Subconscious => self.subconscious,
            ChartPosition::Balance => self.balance_number,
            ChartPosition::PersonalYear => self.personal_year,
            ChartPosition::PersonalMonth => self.personal_month,
            ChartPosition::PersonalDay => self.personal_day,
        }
    }

    /// `(position, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(ChartPosition, u32)> {
        ChartPosition::all()
            .iter()
            .map(|&p| (p, self.get(p)))
            .collect()
    }
}

impl fmt::Display for CompleteNumerologyChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, value) in self.entries() {
            writeln!(f, "{position}: {value}")?;
        }
        if self.karmic_debt_numbers.is_empty() {
            write!(f, "Karmic Debt: none")?;
        } else {
            let karmic: Vec<String> = self
                .karmic_debt_numbers
                .iter()
                .map(|n| n.to_string())
                .collect();
            write!(f, "Karmic Debt: {}", karmic.join(", "))?;
        }
        if let Some(abjad) = &self.abjad {
            write!(
                f,
                "\nAbjad: {} ({})",
                abjad.total_value, abjad.reduced_value
            )?;
        }
        Ok(())
    }
}

/// Assemble a chart with explicit tables.
///
/// Fails only when the Latin name has no scorable letters. A blank Persian
/// name is treated as absent.
pub fn assemble_chart(
    name: &NameInput,
    birth: &BirthDate,
    now: NaiveDate,
    letters: &LetterTable,
    abjad: &AbjadTable,
) -> NumerologyResult<CompleteNumerologyChart> {
    let profile = analyze_name(&name.full_name_latin, letters)?;
    let life_path = life_path(birth);
    let cycle = personal_cycle(birth, now);

    let expression_number = reduce(profile.expression_sum);
    let life_path_number = life_path.final_value;

    let abjad = name
        .persian_name
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| abjad.compute(p));

    tracing::debug!(
        life_path = life_path_number,
        expression = expression_number,
        karmic = ?life_path.karmic_debt_numbers,
        "chart assembled"
    );

    Ok(CompleteNumerologyChart {
        life_path_number,
        expression_number,
        soul_urge_number: reduce(profile.soul_urge_sum),
        personality_number: reduce(profile.personality_sum),
        birthday_number: birthday_number(birth),
        maturity_number: reduce(life_path_number + expression_number),
        hidden_passion: profile.hidden_passion(),
        subconscious: profile.subconscious(),
        balance_number: reduce(profile.initials_sum),
        personal_year: cycle.year,
        personal_month: cycle.month,
        personal_day: cycle.day,
        karmic_debt_numbers: life_path.karmic_debt_numbers,
        abjad,
    })
}

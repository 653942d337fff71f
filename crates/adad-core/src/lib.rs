//! Numerology engine for Adad.
//!
//! Derives a complete numerology chart from a name and a birth date using
//! Pythagorean letter values, computes Persian Abjad values, and scores
//! life-path compatibility. Everything is pure and synchronous; the only
//! time dependency, the current date for personal cycles, is always passed
//! in explicitly.

pub mod abjad;
pub mod chart;
pub mod compatibility;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod letters;
pub mod meaning;
pub mod name;
pub mod reduce;

pub use abjad::{AbjadEntry, AbjadResult, AbjadTable};
pub use chart::{ChartPosition, CompleteNumerologyChart};
pub use compatibility::{CompatibilityLevel, CompatibilityMatrix, CompatibilityResult};
pub use config::EngineConfig;
pub use date::BirthDate;
pub use engine::{NumerologyEngine, build_chart, compute_abjad, score_compatibility};
pub use error::{NumerologyError, NumerologyResult};
pub use letters::LetterTable;
pub use meaning::{NumberMeaning, karmic_debt_meaning, meaning_for};
pub use name::NameInput;
pub use reduce::{ReductionResult, reduce_number};

//! Lookup tables injected into the engine.

use crate::abjad::AbjadTable;
use crate::compatibility::CompatibilityMatrix;
use crate::letters::LetterTable;

/// The read-only tables a [`crate::NumerologyEngine`] works from.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Western letter values.
    pub letters: LetterTable,
    /// Persian Abjad values.
    pub abjad: AbjadTable,
    /// Life-path compatibility matrix.
    pub compatibility: CompatibilityMatrix,
}

impl EngineConfig {
    /// Replace the Western letter table.
    pub fn with_letters(mut self, letters: LetterTable) -> Self {
        self.letters = letters;
        self
    }

    /// Replace the Abjad table.
    pub fn with_abjad(mut self, abjad: AbjadTable) -> Self {
        self.abjad = abjad;
        self
    }

    /// Replace the compatibility matrix.
    pub fn with_compatibility(mut self, compatibility: CompatibilityMatrix) -> Self {
        self.compatibility = compatibility;
        self
    }
}

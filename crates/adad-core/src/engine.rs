//! The numerology engine.
//!
//! [`NumerologyEngine`] bundles the lookup tables with the operations that
//! use them. The free functions at the bottom of this module run against a
//! shared engine built from the default tables.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::abjad::AbjadResult;
use crate::chart::{CompleteNumerologyChart, assemble_chart};
use crate::compatibility::CompatibilityResult;
use crate::config::EngineConfig;
use crate::date::BirthDate;
use crate::error::NumerologyResult;
use crate::name::NameInput;
use crate::reduce::{ReductionResult, reduce_number};

/// Stateless numerology calculator over a fixed set of tables.
#[derive(Debug, Clone, Default)]
pub struct NumerologyEngine {
    config: EngineConfig,
}

impl NumerologyEngine {
    /// Create an engine over the given tables.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The tables this engine uses.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// See [`reduce_number`].
    pub fn reduce(&self, n: u32, track_karmic_debt: bool) -> ReductionResult {
        reduce_number(n, track_karmic_debt)
    }

    /// Build a chart for `name` and `birth`, with personal cycles for `now`.
    pub fn build_chart(
        &self,
        name: &NameInput,
        birth: &BirthDate,
        now: NaiveDate,
    ) -> NumerologyResult<CompleteNumerologyChart> {
        assemble_chart(name, birth, now, &self.config.letters, &self.config.abjad)
    }

    /// Abjad value of `text`.
    pub fn compute_abjad(&self, text: &str) -> AbjadResult {
        self.config.abjad.compute(text)
    }

    /// Compatibility of two life paths. Never fails.
    pub fn score_compatibility(&self, a: u32, b: u32) -> CompatibilityResult {
        self.config.compatibility.score(a, b)
    }
}

static DEFAULT_ENGINE: LazyLock<NumerologyEngine> = LazyLock::new(NumerologyEngine::default);

/// Build a chart with the default tables.
pub fn build_chart(
    name: &NameInput,
    birth: &BirthDate,
    now: NaiveDate,
) -> NumerologyResult<CompleteNumerologyChart> {
    DEFAULT_ENGINE.build_chart(name, birth, now)
}

/// Abjad value of `text` with the standard table.
pub fn compute_abjad(text: &str) -> AbjadResult {
    DEFAULT_ENGINE.compute_abjad(text)
}

/// Compatibility of two life paths with the built-in matrix.
pub fn score_compatibility(a: u32, b: u32) -> CompatibilityResult {
    DEFAULT_ENGINE.score_compatibility(a, b)
}

use std::path::Path;

use colored::Colorize;

use adad_core::{CompatibilityLevel, CompatibilityMatrix, EngineConfig, NumerologyEngine};

pub fn run(a: u32, b: u32, matrix: Option<&Path>, json: bool) -> Result<(), String> {
    let mut config = EngineConfig::default();
    if let Some(path) = matrix {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let loaded = CompatibilityMatrix::from_json(&text)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            pairs = loaded.len(),
            "loaded compatibility matrix"
        );
        config = config.with_compatibility(loaded);
    }

    let result = NumerologyEngine::new(config).score_compatibility(a, b);

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let level = match result.level {
        CompatibilityLevel::Excellent => result.level.to_string().green(),
        CompatibilityLevel::Good => result.level.to_string().cyan(),
        CompatibilityLevel::Moderate => result.level.to_string().yellow(),
        CompatibilityLevel::Challenging => result.level.to_string().red(),
    };

    println!("  {} {a} & {b}", "Life paths".bold());
    println!("  Score: {}/100 ({level})", result.score);
    println!("  {}", result.description);
    if !result.strengths.is_empty() {
        println!("  Strengths:  {}", result.strengths.join(", "));
    }
    if !result.challenges.is_empty() {
        println!("  Challenges: {}", result.challenges.join(", "));
    }
    println!("  Advice: {}", result.advice);

    Ok(())
}

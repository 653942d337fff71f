use adad_core::CompatibilityMatrix;

/// Print the built-in matrix as a template for `compat --matrix`.
pub fn run() -> Result<(), String> {
    let json = CompatibilityMatrix::builtin()
        .to_json()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

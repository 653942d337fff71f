use colored::Colorize;

use adad_core::{karmic_debt_meaning, meaning_for};

pub fn run(number: u32) -> Result<(), String> {
    let meaning = meaning_for(number)
        .or_else(|| karmic_debt_meaning(number))
        .ok_or_else(|| {
            format!("no meaning for {number}: expected 1-9, 11, 22, 33, 13, 14, 16 or 19")
        })?;

    println!(
        "  {} {} ({})",
        meaning.number.to_string().bold(),
        meaning.title.bold(),
        meaning.persian_title
    );
    println!("  {}", meaning.keywords.join(", ").dimmed());
    println!();
    println!("  {}", meaning.description);

    Ok(())
}

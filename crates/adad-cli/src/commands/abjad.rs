use comfy_table::{ContentArrangement, Table};

use adad_core::compute_abjad;

pub fn run(text: &str, json: bool) -> Result<(), String> {
    let result = compute_abjad(text);

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if result.breakdown.is_empty() {
        println!("  No Abjad letters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Letter", "Value"]);
    for entry in &result.breakdown {
        table.add_row(vec![entry.letter.to_string(), entry.value.to_string()]);
    }
    println!("{table}");
    println!();
    println!(
        "  Total: {} → {}",
        result.total_value,
        super::describe_value(result.reduced_value)
    );

    Ok(())
}

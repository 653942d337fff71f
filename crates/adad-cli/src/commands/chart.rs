use chrono::Local;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use adad_core::{BirthDate, NameInput, build_chart, karmic_debt_meaning, meaning_for};

pub fn run(
    name: &str,
    birth: &str,
    persian: Option<&str>,
    today: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let birth = BirthDate::parse(birth).map_err(|e| e.to_string())?;
    let now = match today {
        Some(s) => super::parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut input = NameInput::new(name);
    if let Some(p) = persian {
        input = input.with_persian(p);
    }

    let chart = build_chart(&input, &birth, now).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&chart).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        name.bold(),
        format!("(born {birth}, as of {now})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "Value", "Meaning", "Measures"]);

    for (position, value) in chart.entries() {
        let title = meaning_for(value).map_or("—", |m| m.title);
        table.add_row(vec![
            position.to_string(),
            super::describe_value(value),
            title.to_string(),
            position.description().to_string(),
        ]);
    }
    println!("{table}");

    if chart.karmic_debt_numbers.is_empty() {
        println!("  Karmic debt: none");
    } else {
        for n in &chart.karmic_debt_numbers {
            let title = karmic_debt_meaning(*n).map_or("", |m| m.title);
            println!("  Karmic debt: {} {}", n.to_string().yellow(), title);
        }
    }

    if let Some(abjad) = &chart.abjad {
        println!(
            "  Abjad: {} → {}",
            abjad.total_value,
            super::describe_value(abjad.reduced_value)
        );
    }

    Ok(())
}

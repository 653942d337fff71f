use colored::Colorize;

use adad_core::reduce_number;

pub fn run(number: u32, karmic: bool, json: bool) -> Result<(), String> {
    let result = reduce_number(number, karmic);

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {number} → {}",
        super::describe_value(result.final_value).bold()
    );
    if karmic {
        if result.karmic_debt_numbers.is_empty() {
            println!("  Karmic debt: none");
        } else {
            let nums: Vec<String> = result
                .karmic_debt_numbers
                .iter()
                .map(|n| n.to_string())
                .collect();
            println!("  Karmic debt: {}", nums.join(", "));
        }
    }

    Ok(())
}

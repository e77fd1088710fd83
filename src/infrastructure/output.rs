use anyhow::{Result, anyhow};
use colored::Colorize;
use serde_json::Value;

/// One row of the placeholder catalog
pub struct CatalogRow {
    pub name: String,
    pub pattern: String,
    pub example: String,
}

pub fn print_json(value: &Value) -> Result<()> {
    let pretty =
        serde_json::to_string_pretty(value).map_err(|e| anyhow!("Failed to format JSON: {}", e))?;
    println!("{}", pretty.green());
    Ok(())
}

pub fn print_catalog(rows: &[CatalogRow]) {
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    for row in rows {
        let name = format!("{:width$}", row.name);
        println!("{}  {}", name.cyan(), row.pattern.white());
        println!("{:width$}  {}", "", row.example.green());
    }
}

pub fn print_examples(pattern: &str, examples: &[String]) {
    println!("{} {}", "pattern:".cyan(), pattern.white());
    for example in examples {
        println!("  {}", example.green());
    }
}

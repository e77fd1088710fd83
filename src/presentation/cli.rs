use crate::application::generation::{ExampleGenerator, RegexExampleGenerator};
use crate::domain::value_objects::{Pattern, Placeholder};
use crate::infrastructure::config::Config;
use crate::infrastructure::output::{self, CatalogRow};
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

/// CLI configuration for contract-dsl
#[derive(Parser, Debug)]
#[command(name = "contract-dsl", version)]
#[command(about = "Generate and check example values for request contracts", long_about = None)]
pub struct Cli {
    /// JSON profile with generator and logging settings
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Seed for reproducible examples
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every placeholder with its pattern and an example
    Placeholders,

    /// Generate examples for a named placeholder
    Sample {
        placeholder: Placeholder,

        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Generate examples for an arbitrary regular expression
    Regex {
        pattern: String,

        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Generate an example for a fixed enumeration
    OneOf {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

impl Cli {
    /// Resolves the effective configuration: profile, then environment, then flags
    pub fn config(&self) -> Result<Config> {
        let config = match &self.profile {
            Some(path) => Config::load_profile(path)?,
            None => Config::default(),
        };
        let mut config = config.with_env_overrides()?;
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        Ok(config)
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let mut generator = RegexExampleGenerator::new(config.generator.clone());

        match &self.command {
            Command::Placeholders => self.placeholders(&mut generator),
            Command::Sample { placeholder, count } => {
                let pattern = Pattern::placeholder(*placeholder)?;
                self.samples(&mut generator, &pattern, *count)
            }
            Command::Regex { pattern, count } => {
                let pattern = Pattern::new(pattern)?;
                self.samples(&mut generator, &pattern, *count)
            }
            Command::OneOf { values } => {
                let pattern = Pattern::one_of(values.iter().cloned())?;
                self.samples(&mut generator, &pattern, 1)
            }
        }
    }

    fn placeholders(&self, generator: &mut dyn ExampleGenerator) -> Result<()> {
        let rows = Placeholder::ALL
            .into_iter()
            .map(|placeholder| -> Result<CatalogRow> {
                let pattern = Pattern::placeholder(placeholder)?;
                Ok(CatalogRow {
                    name: placeholder.name().to_string(),
                    example: generator.generate(&pattern)?,
                    pattern: pattern.as_str().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if self.json {
            let catalog = rows
                .iter()
                .map(|row| json!({ "name": row.name, "pattern": row.pattern, "example": row.example }))
                .collect();
            return output::print_json(&serde_json::Value::Array(catalog));
        }
        output::print_catalog(&rows);
        Ok(())
    }

    fn samples(
        &self,
        generator: &mut dyn ExampleGenerator,
        pattern: &Pattern,
        count: usize,
    ) -> Result<()> {
        let examples = generate_checked(generator, pattern, count)?;
        if self.json {
            return output::print_json(&json!({ "pattern": pattern.as_str(), "examples": examples }));
        }
        output::print_examples(pattern.as_str(), &examples);
        Ok(())
    }
}

/// Generates `count` examples, failing if any escapes the pattern
fn generate_checked(
    generator: &mut dyn ExampleGenerator,
    pattern: &Pattern,
    count: usize,
) -> Result<Vec<String>> {
    (0..count)
        .map(|_| -> Result<String> {
            let example = generator.generate(pattern)?;
            if pattern.matches(&example) {
                Ok(example)
            } else {
                Err(anyhow!("Generated '{}' does not match '{}'", example, pattern))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sample_with_placeholder_name() {
        let cli = Cli::try_parse_from(["contract-dsl", "--seed", "4", "sample", "any-uuid", "-n", "3"])
            .unwrap();
        assert_eq!(cli.seed, Some(4));
        match cli.command {
            Command::Sample { placeholder, count } => {
                assert_eq!(placeholder, Placeholder::Uuid);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_placeholder() {
        assert!(Cli::try_parse_from(["contract-dsl", "sample", "any-banana"]).is_err());
    }

    #[test]
    fn one_of_needs_values() {
        assert!(Cli::try_parse_from(["contract-dsl", "one-of"]).is_err());
    }

    #[test]
    fn seed_flag_overrides_profile() {
        let cli = Cli::try_parse_from(["contract-dsl", "--seed", "8", "placeholders"]).unwrap();
        assert_eq!(cli.config().unwrap().generator.seed, Some(8));
    }

    #[test]
    fn checked_generation_yields_matching_examples() {
        let mut generator = RegexExampleGenerator::seeded(12);
        let pattern = Pattern::new("[A-F]{2}-[0-9]{2}").unwrap();
        let examples = generate_checked(&mut generator, &pattern, 10).unwrap();
        assert_eq!(examples.len(), 10);
        assert!(examples.iter().all(|example| pattern.matches(example)));
    }
}

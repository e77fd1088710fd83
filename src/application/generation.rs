//! Example generation for pattern-backed values.
//!
//! [`RegexExampleGenerator`] walks the parsed syntax tree of a pattern and
//! emits one random path through it. Unbounded repetition is capped and
//! character classes prefer printable ASCII, so examples stay readable. Every
//! candidate is re-matched against the anchored pattern before it is
//! returned.

use crate::domain::error::{ContractError, Result};
use crate::domain::value_objects::Pattern;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex_syntax::hir::{Class, ClassBytes, ClassUnicode, ClassUnicodeRange, Hir, HirKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Trait for example generators to enable mocking and alternative strategies
#[cfg_attr(test, mockall::automock)]
pub trait ExampleGenerator {
    /// Produces a value the whole of which matches `pattern`
    fn generate(&mut self, pattern: &Pattern) -> Result<String>;
}

/// Tuning knobs for [`RegexExampleGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Extra repetitions allowed beyond a quantifier's minimum
    pub max_repeat: u32,
    /// Candidates tried before a pattern is reported unsatisfiable
    pub max_attempts: u32,
    /// Longest example, in bytes
    pub max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_repeat: 8,
            max_attempts: 64,
            max_length: 4096,
        }
    }
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

pub struct RegexExampleGenerator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl RegexExampleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneratorConfig::seeded(seed))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn emit(&mut self, hir: &Hir, out: &mut String, pattern: &Pattern) -> Result<()> {
        match hir.kind() {
            HirKind::Empty | HirKind::Look(_) => {}
            HirKind::Literal(literal) => {
                let text = std::str::from_utf8(&literal.0).map_err(|_| {
                    ContractError::unsatisfiable(pattern.as_str(), "literal is not valid UTF-8")
                })?;
                out.push_str(text);
            }
            HirKind::Class(Class::Unicode(class)) => out.push(self.pick_char(class, pattern)?),
            HirKind::Class(Class::Bytes(class)) => out.push(self.pick_byte(class, pattern)?),
            HirKind::Repetition(repetition) => {
                let count = self.repeat_count(repetition.min, repetition.max, pattern)?;
                for _ in 0..count {
                    self.emit(&repetition.sub, out, pattern)?;
                    self.check_length(out, pattern)?;
                }
            }
            HirKind::Capture(capture) => self.emit(&capture.sub, out, pattern)?,
            HirKind::Concat(items) => {
                for item in items {
                    self.emit(item, out, pattern)?;
                }
            }
            HirKind::Alternation(branches) => {
                let branch = self.rng.gen_range(0..branches.len());
                self.emit(&branches[branch], out, pattern)?;
            }
        }
        self.check_length(out, pattern)
    }

    fn repeat_count(&mut self, min: u32, max: Option<u32>, pattern: &Pattern) -> Result<u32> {
        if usize::try_from(min).map_or(true, |min| min > self.config.max_length) {
            return Err(ContractError::unsatisfiable(
                pattern.as_str(),
                format!("repetition of at least {min} exceeds the example length limit"),
            ));
        }
        let capped = min.saturating_add(self.config.max_repeat);
        let upper = max.map_or(capped, |max| max.min(capped));
        Ok(self.rng.gen_range(min..=upper))
    }

    fn check_length(&self, out: &str, pattern: &Pattern) -> Result<()> {
        if out.len() > self.config.max_length {
            return Err(ContractError::unsatisfiable(
                pattern.as_str(),
                format!("example exceeds {} bytes", self.config.max_length),
            ));
        }
        Ok(())
    }

    fn pick_char(&mut self, class: &ClassUnicode, pattern: &Pattern) -> Result<char> {
        let mut printable = ClassUnicode::new([ClassUnicodeRange::new(' ', '~')]);
        printable.intersect(class);
        let candidates = if printable.ranges().is_empty() {
            class
        } else {
            &printable
        };

        let total: u32 = candidates
            .ranges()
            .iter()
            .map(|range| u32::from(range.end()) - u32::from(range.start()) + 1)
            .sum();
        if total == 0 {
            return Err(ContractError::unsatisfiable(
                pattern.as_str(),
                "character class matches nothing",
            ));
        }

        let mut offset = self.rng.gen_range(0..total);
        for range in candidates.ranges() {
            let width = u32::from(range.end()) - u32::from(range.start()) + 1;
            if offset < width {
                // Ranges may straddle the surrogate block.
                return Ok(char::from_u32(u32::from(range.start()) + offset)
                    .unwrap_or(range.start()));
            }
            offset -= width;
        }
        Ok(candidates.ranges()[0].start())
    }

    fn pick_byte(&mut self, class: &ClassBytes, pattern: &Pattern) -> Result<char> {
        let ascii: Vec<u8> = class
            .iter()
            .flat_map(|range| range.start()..=range.end())
            .filter(|byte| byte.is_ascii() && !byte.is_ascii_control())
            .collect();
        if ascii.is_empty() {
            return Err(ContractError::unsatisfiable(
                pattern.as_str(),
                "byte class has no printable ASCII member",
            ));
        }
        Ok(char::from(ascii[self.rng.gen_range(0..ascii.len())]))
    }
}

impl Default for RegexExampleGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl ExampleGenerator for RegexExampleGenerator {
    fn generate(&mut self, pattern: &Pattern) -> Result<String> {
        let hir = regex_syntax::Parser::new()
            .parse(pattern.as_str())
            .map_err(|e| ContractError::invalid_pattern(pattern.as_str(), e))?;

        for attempt in 1..=self.config.max_attempts {
            let mut candidate = String::new();
            self.emit(&hir, &mut candidate, pattern)?;
            if pattern.matches(&candidate) {
                debug!(pattern = %pattern, example = %candidate, attempt, "generated example");
                return Ok(candidate);
            }
            trace!(pattern = %pattern, candidate = %candidate, attempt, "rejected candidate");
        }

        Err(ContractError::unsatisfiable(
            pattern.as_str(),
            format!("no matching example after {} attempts", self.config.max_attempts),
        ))
    }
}

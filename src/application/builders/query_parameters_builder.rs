use crate::application::coercion::Input;
use crate::application::generation::ExampleGenerator;
use crate::application::values::DslValues;
use crate::domain::entities::{Entry, QueryParameters};
use crate::domain::error::Result;

/// Collects query parameters for a URL or URL path
pub struct QueryParametersBuilder<'g> {
    generator: &'g mut dyn ExampleGenerator,
    entries: Vec<Entry>,
}

impl<'g> QueryParametersBuilder<'g> {
    pub fn new(generator: &'g mut dyn ExampleGenerator) -> Self {
        Self {
            generator,
            entries: Vec::new(),
        }
    }

    pub fn parameter(&mut self, name: &str, value: impl Into<Input>) -> Result<&mut Self> {
        let value = self.value(value)?;
        self.entries.push(Entry {
            name: name.to_string(),
            value,
        });
        Ok(self)
    }

    pub fn build(self) -> QueryParameters {
        QueryParameters {
            entries: self.entries,
        }
    }
}

impl DslValues for QueryParametersBuilder<'_> {
    fn generator(&mut self) -> &mut dyn ExampleGenerator {
        &mut *self.generator
    }
}

use crate::application::coercion::Input;
use crate::application::generation::ExampleGenerator;
use crate::application::values::DslValues;
use crate::domain::dsl_property::DslProperty;
use crate::domain::entities::{Cookies, Entry, Headers};
use crate::domain::error::{ContractError, Result};
use http::HeaderName;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use indexmap::IndexMap;

/// Collects request headers, keeping their order and any repeats
pub struct HeadersBuilder<'g> {
    generator: &'g mut dyn ExampleGenerator,
    entries: Vec<Entry>,
}

impl<'g> HeadersBuilder<'g> {
    pub fn new(generator: &'g mut dyn ExampleGenerator) -> Self {
        Self {
            generator,
            entries: Vec::new(),
        }
    }

    /// Appends a header; the name must be a valid HTTP header name
    pub fn header(&mut self, name: &str, value: impl Into<Input>) -> Result<&mut Self> {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ContractError::InvalidHeaderName(name.to_string()))?;
        let value = self.value(value)?;
        self.entries.push(Entry {
            name: name.to_string(),
            value,
        });
        Ok(self)
    }

    /// Sets `Content-Type`, e.g. to [`MULTIPART_FORM_DATA`](crate::domain::media_types::MULTIPART_FORM_DATA)
    pub fn content_type(&mut self, value: impl Into<Input>) -> Result<&mut Self> {
        self.header(CONTENT_TYPE.as_str(), value)
    }

    /// Sets `Accept`, e.g. to [`APPLICATION_JSON`](crate::domain::media_types::APPLICATION_JSON)
    pub fn accept(&mut self, value: impl Into<Input>) -> Result<&mut Self> {
        self.header(ACCEPT.as_str(), value)
    }

    pub fn authorization(&mut self, value: impl Into<Input>) -> Result<&mut Self> {
        self.header(AUTHORIZATION.as_str(), value)
    }

    pub fn build(self) -> Headers {
        Headers {
            entries: self.entries,
        }
    }
}

impl DslValues for HeadersBuilder<'_> {
    fn generator(&mut self) -> &mut dyn ExampleGenerator {
        &mut *self.generator
    }
}

/// Collects cookies; setting a name again replaces its value
pub struct CookiesBuilder<'g> {
    generator: &'g mut dyn ExampleGenerator,
    entries: IndexMap<String, DslProperty>,
}

impl<'g> CookiesBuilder<'g> {
    pub fn new(generator: &'g mut dyn ExampleGenerator) -> Self {
        Self {
            generator,
            entries: IndexMap::new(),
        }
    }

    pub fn cookie(&mut self, name: &str, value: impl Into<Input>) -> Result<&mut Self> {
        let value = self.value(value)?;
        self.entries.insert(name.to_string(), value);
        Ok(self)
    }

    pub fn build(self) -> Cookies {
        Cookies {
            entries: self.entries,
        }
    }
}

impl DslValues for CookiesBuilder<'_> {
    fn generator(&mut self) -> &mut dyn ExampleGenerator {
        &mut *self.generator
    }
}

use crate::application::coercion::{self, Input, Sided};
use crate::application::generation::ExampleGenerator;
use crate::domain::dsl_property::{DslProperty, NamedProperty};
use crate::domain::error::Result;
use crate::domain::value_objects::{Pattern, Placeholder};

/// Value helpers shared by the request builder and its sub-builders
///
/// Implementors only expose their example generator; coercion and the
/// placeholder catalog come for free.
pub trait DslValues {
    fn generator(&mut self) -> &mut dyn ExampleGenerator;

    /// Coerces any supported input into a property
    fn value(&mut self, value: impl Into<Input>) -> Result<DslProperty>
    where
        Self: Sized,
    {
        coercion::coerce(value.into(), self.generator())
    }

    /// Short alias for [`DslValues::value`]
    fn v(&mut self, value: impl Into<Input>) -> Result<DslProperty>
    where
        Self: Sized,
    {
        self.value(value)
    }

    /// Builds an explicit pair from a `client(..)` and a `server(..)` value
    fn pair(&mut self, first: Sided, second: Sided) -> Result<DslProperty> {
        coercion::coerce_pair(first, second, self.generator())
    }

    /// Builds a file-like multipart part
    fn named(
        &mut self,
        name: impl Into<Input>,
        content: impl Into<Input>,
        content_type: Option<Input>,
    ) -> Result<NamedProperty>
    where
        Self: Sized,
    {
        Ok(NamedProperty {
            name: self.value(name)?,
            content: self.value(content)?,
            content_type: content_type.map(|value| self.value(value)).transpose()?,
        })
    }

    fn placeholder(&mut self, placeholder: Placeholder) -> Result<DslProperty> {
        let pattern = Pattern::placeholder(placeholder)?;
        coercion::coerce(pattern.into(), self.generator())
    }

    /// One of a fixed set of literal values
    fn any_of<I, S>(&mut self, values: I) -> Result<DslProperty>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = Pattern::one_of(values)?;
        coercion::coerce(pattern.into(), self.generator())
    }

    fn any_alpha_unicode(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::AlphaUnicode)
    }

    fn any_alpha_numeric(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::AlphaNumeric)
    }

    fn any_number(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Number)
    }

    fn any_integer(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Integer)
    }

    fn any_positive_int(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::PositiveInt)
    }

    fn any_double(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Double)
    }

    fn any_hex(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Hex)
    }

    fn a_boolean(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Boolean)
    }

    fn any_ip_address(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::IpAddress)
    }

    fn any_hostname(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Hostname)
    }

    fn any_email(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Email)
    }

    fn any_url(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Url)
    }

    fn any_https_url(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::HttpsUrl)
    }

    fn any_uuid(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Uuid)
    }

    fn any_date(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Date)
    }

    fn any_date_time(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::DateTime)
    }

    fn any_time(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Time)
    }

    fn any_iso8601_with_offset(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::Iso8601WithOffset)
    }

    fn any_non_blank_string(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::NonBlankString)
    }

    fn any_non_empty_string(&mut self) -> Result<DslProperty> {
        self.placeholder(Placeholder::NonEmptyString)
    }
}

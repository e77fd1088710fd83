//! Turns raw authoring inputs into [`DslProperty`] values.
//!
//! Call sites hand over anything convertible into an [`Input`]; [`coerce`]
//! inspects its shape and builds the matching property. Structured inputs
//! are coerced all the way down, so every list element and map value ends
//! up as a property of its own.

use crate::application::generation::ExampleGenerator;
use crate::domain::dsl_property::{ContractValue, DslProperty, NamedProperty, Side};
use crate::domain::error::{ContractError, Result};
use crate::domain::value_objects::Pattern;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// A raw value waiting to be coerced
#[derive(Debug, Clone)]
pub enum Input {
    /// Content used as-is on both sides
    Scalar(ContractValue),
    Sequence(Vec<Input>),
    Mapping(IndexMap<String, Input>),
    /// Already a property; passed through untouched
    Coerced(DslProperty),
    Pattern(PatternLike),
}

/// The ways a pattern can be supplied
#[derive(Debug, Clone)]
pub enum PatternLike {
    Source(String),
    Compiled(Regex),
    Named(Pattern),
}

impl PatternLike {
    pub fn compile(self) -> Result<Pattern> {
        match self {
            PatternLike::Source(source) => Pattern::new(&source),
            PatternLike::Compiled(regex) => Pattern::from_regex(&regex),
            PatternLike::Named(pattern) => Ok(pattern),
        }
    }
}

impl Input {
    /// A regular expression source, compiled when coerced
    pub fn regex(source: impl Into<String>) -> Self {
        Input::Pattern(PatternLike::Source(source.into()))
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Input>,
    {
        Input::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Input>,
    {
        Input::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Scalar(ContractValue::text(value))
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Scalar(ContractValue::Text(value))
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Scalar(ContractValue::Bool(value))
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Scalar(ContractValue::Number(value.into()))
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64);

/// NaN and the infinities have no JSON number form and become `Null`.
impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::from(Value::from(value))
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Input::Scalar(ContractValue::Null),
            Value::Bool(flag) => Input::Scalar(ContractValue::Bool(flag)),
            Value::Number(number) => Input::Scalar(ContractValue::Number(number)),
            Value::String(text) => Input::Scalar(ContractValue::Text(text)),
            Value::Array(items) => Input::list(items),
            Value::Object(entries) => Input::map(entries),
        }
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::list(items)
    }
}

impl From<DslProperty> for Input {
    fn from(property: DslProperty) -> Self {
        Input::Coerced(property)
    }
}

/// Options given to `regex::RegexBuilder` are dropped; see [`Pattern::from_regex`].
impl From<Regex> for Input {
    fn from(regex: Regex) -> Self {
        Input::Pattern(PatternLike::Compiled(regex))
    }
}

impl From<Pattern> for Input {
    fn from(pattern: Pattern) -> Self {
        Input::Pattern(PatternLike::Named(pattern))
    }
}

impl From<NamedProperty> for Input {
    fn from(file: NamedProperty) -> Self {
        Input::Scalar(ContractValue::File(Box::new(file)))
    }
}

impl From<http::Method> for Input {
    fn from(method: http::Method) -> Self {
        Input::Scalar(ContractValue::text(method.as_str()))
    }
}

/// An input tagged with the side it belongs to
#[derive(Debug, Clone)]
pub enum Sided {
    Client(Input),
    Server(Input),
}

/// Tags `value` as the consumer-side value of a pair
pub fn client(value: impl Into<Input>) -> Sided {
    Sided::Client(value.into())
}

/// Tags `value` as the provider-side value of a pair
pub fn server(value: impl Into<Input>) -> Sided {
    Sided::Server(value.into())
}

/// Coerces `input` into a property.
///
/// Patterns become pattern-backed properties whose client side is an example
/// produced by `generator`.
pub fn coerce(input: Input, generator: &mut dyn ExampleGenerator) -> Result<DslProperty> {
    match input {
        Input::Scalar(value) => Ok(DslProperty::single(value)),
        Input::Sequence(items) => Ok(DslProperty::single(coerce_list(items, generator)?)),
        Input::Mapping(entries) => Ok(DslProperty::single(coerce_map(entries, generator)?)),
        Input::Coerced(property) => Ok(property),
        Input::Pattern(pattern) => {
            let pattern = pattern.compile()?;
            let example = generator.generate(&pattern)?;
            if !pattern.matches(&example) {
                return Err(ContractError::ExampleMismatch {
                    example,
                    pattern: pattern.as_str().to_string(),
                });
            }
            debug!(pattern = %pattern, example = %example, "pattern-backed value");
            Ok(DslProperty::dual(
                ContractValue::Text(example),
                ContractValue::Pattern(pattern),
            ))
        }
    }
}

/// Builds an explicit client/server pair, whichever order the sides come in.
///
/// A scalar on one side paired with a pattern on the other must match it.
pub fn coerce_pair(
    first: Sided,
    second: Sided,
    generator: &mut dyn ExampleGenerator,
) -> Result<DslProperty> {
    let (client, server) = match (first, second) {
        (Sided::Client(client), Sided::Server(server))
        | (Sided::Server(server), Sided::Client(client)) => (client, server),
        (Sided::Client(_), Sided::Client(_)) => {
            return Err(ContractError::AmbiguousSideAssignment(Side::Client));
        }
        (Sided::Server(_), Sided::Server(_)) => {
            return Err(ContractError::AmbiguousSideAssignment(Side::Server));
        }
    };

    let client_value = side_value(client, Side::Client, generator)?;
    let server_value = side_value(server, Side::Server, generator)?;
    check_example(&client_value, &server_value)?;
    check_example(&server_value, &client_value)?;
    Ok(DslProperty::dual(client_value, server_value))
}

fn side_value(
    input: Input,
    side: Side,
    generator: &mut dyn ExampleGenerator,
) -> Result<ContractValue> {
    match input {
        Input::Scalar(value) => Ok(value),
        Input::Sequence(items) => coerce_list(items, generator),
        Input::Mapping(entries) => coerce_map(entries, generator),
        Input::Coerced(property) => Ok(property.value(side).clone()),
        Input::Pattern(pattern) => Ok(ContractValue::Pattern(pattern.compile()?)),
    }
}

fn check_example(example: &ContractValue, pattern: &ContractValue) -> Result<()> {
    if let (Some(example), Some(pattern)) = (example.as_example(), pattern.as_pattern()) {
        if !pattern.matches(&example) {
            return Err(ContractError::ExampleMismatch {
                example,
                pattern: pattern.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn coerce_list(items: Vec<Input>, generator: &mut dyn ExampleGenerator) -> Result<ContractValue> {
    items
        .into_iter()
        .map(|item| coerce(item, generator))
        .collect::<Result<Vec<_>>>()
        .map(ContractValue::List)
}

fn coerce_map(
    entries: IndexMap<String, Input>,
    generator: &mut dyn ExampleGenerator,
) -> Result<ContractValue> {
    entries
        .into_iter()
        .map(|(key, value)| Ok((key, coerce(value, generator)?)))
        .collect::<Result<IndexMap<_, _>>>()
        .map(ContractValue::Map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generation::MockExampleGenerator;

    fn generator_returning(example: &'static str) -> MockExampleGenerator {
        let mut generator = MockExampleGenerator::new();
        generator
            .expect_generate()
            .returning(move |_| Ok(example.to_string()));
        generator
    }

    fn idle_generator() -> MockExampleGenerator {
        let mut generator = MockExampleGenerator::new();
        generator.expect_generate().never();
        generator
    }

    #[test]
    fn scalar_becomes_single_value() {
        let property = coerce("GET".into(), &mut idle_generator()).unwrap();
        assert_eq!(property, DslProperty::single(ContractValue::text("GET")));
    }

    #[test]
    fn regex_source_uses_generated_example() {
        let mut generator = MockExampleGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .withf(|pattern| pattern.as_str() == r"\d+")
            .returning(|_| Ok("123".to_string()));

        let property = coerce(Input::regex(r"\d+"), &mut generator).unwrap();
        assert_eq!(property.client_value(), &ContractValue::text("123"));
        assert_eq!(
            property.server_value().as_pattern().map(Pattern::as_str),
            Some(r"\d+")
        );
        assert!(property.is_pattern_backed());
    }

    #[test]
    fn generator_output_is_rechecked() {
        let err = coerce(Input::regex(r"\d+"), &mut generator_returning("abc")).unwrap_err();
        assert_eq!(
            err,
            ContractError::ExampleMismatch {
                example: "abc".to_string(),
                pattern: r"\d+".to_string(),
            }
        );
    }

    #[test]
    fn malformed_regex_fails_before_generation() {
        let err = coerce(Input::regex("(unclosed"), &mut idle_generator()).unwrap_err();
        assert!(matches!(err, ContractError::InvalidPattern { .. }));
    }

    #[test]
    fn coerced_property_passes_through() {
        let property = DslProperty::dual(ContractValue::text("a"), ContractValue::text("b"));
        let again = coerce(property.clone().into(), &mut idle_generator()).unwrap();
        assert_eq!(again, property);
    }

    #[test]
    fn pair_order_does_not_matter() {
        let forward = coerce_pair(client("c"), server("s"), &mut idle_generator()).unwrap();
        let backward = coerce_pair(server("s"), client("c"), &mut idle_generator()).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.client_value(), &ContractValue::text("c"));
        assert_eq!(forward.server_value(), &ContractValue::text("s"));
    }

    #[test]
    fn pair_with_same_side_is_ambiguous() {
        let err = coerce_pair(client("a"), client("b"), &mut idle_generator()).unwrap_err();
        assert_eq!(err, ContractError::AmbiguousSideAssignment(Side::Client));
        let err = coerce_pair(server("a"), server("b"), &mut idle_generator()).unwrap_err();
        assert_eq!(err, ContractError::AmbiguousSideAssignment(Side::Server));
    }

    #[test]
    fn pair_keeps_pattern_on_its_side() {
        let property =
            coerce_pair(client(Input::regex("[a-z]+")), server("abc"), &mut idle_generator())
                .unwrap();
        assert!(property.client_value().as_pattern().is_some());
        assert_eq!(property.server_value(), &ContractValue::text("abc"));
    }

    #[test]
    fn pair_rejects_example_outside_pattern() {
        let err = coerce_pair(client("12a"), server(Input::regex(r"\d+")), &mut idle_generator())
            .unwrap_err();
        assert!(matches!(err, ContractError::ExampleMismatch { .. }));
    }

    #[test]
    fn pair_checks_numbers_against_patterns() {
        let property =
            coerce_pair(client(42), server(Input::regex(r"\d+")), &mut idle_generator()).unwrap();
        assert!(property.is_pattern_backed());
    }

    #[test]
    fn json_values_are_coerced_recursively() {
        let input = Input::from(serde_json::json!({ "a": [1, "two", null] }));
        let property = coerce(input, &mut idle_generator()).unwrap();
        let ContractValue::Map(entries) = property.client_value() else {
            panic!("expected a map");
        };
        let ContractValue::List(items) = entries["a"].client_value() else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(DslProperty::is_single));
        assert_eq!(items[2].client_value(), &ContractValue::Null);
    }

    #[test]
    fn verbose_regex_with_trailing_comment_is_accepted() {
        let mut generator = crate::RegexExampleGenerator::seeded(4);
        let source = "(?x) [a-z]{3} # three letters";
        assert!(Regex::new(source).is_ok());

        let property = coerce(Input::regex(source), &mut generator).unwrap();
        assert!(property.is_pattern_backed());
        let ContractValue::Text(example) = property.client_value() else {
            panic!("expected a generated example");
        };
        assert_eq!(example.len(), 3);
    }

    #[test]
    fn compiled_regex_keeps_inline_flags() {
        let mut generator = crate::RegexExampleGenerator::seeded(4);
        let property = coerce(Regex::new("(?i)abc").unwrap().into(), &mut generator).unwrap();
        let pattern = property.server_value().as_pattern().unwrap();
        assert!(pattern.matches("ABC"));
        assert!(pattern.matches("aBc"));
    }

    #[test]
    fn non_finite_floats_become_null() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let property = coerce(value.into(), &mut idle_generator()).unwrap();
            assert_eq!(property.client_value(), &ContractValue::Null);
        }
        let property = coerce(1.5_f64.into(), &mut idle_generator()).unwrap();
        assert!(matches!(property.client_value(), ContractValue::Number(_)));
    }

}

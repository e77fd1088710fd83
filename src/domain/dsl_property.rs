//! The dual-value model behind every request field.
//!
//! A [`DslProperty`] holds what the consumer side sends and what the provider
//! side expects. Most properties carry a single value shared by both sides;
//! pattern-backed ones pair a concrete example with the regex it satisfies.

use crate::domain::value_objects::Pattern;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// The two roles a contract is played from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Consumer side, producing example traffic
    Client,
    /// Provider side, validating real traffic
    Server,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Client => f.write_str("client"),
            Side::Server => f.write_str("server"),
        }
    }
}

/// Content held on one side of a property
///
/// Lists and maps hold properties rather than raw content so that a nested
/// leaf can carry its own client/server pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContractValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Pattern(Pattern),
    List(Vec<DslProperty>),
    Map(IndexMap<String, DslProperty>),
    File(Box<NamedProperty>),
}

impl ContractValue {
    pub fn text(value: impl Into<String>) -> Self {
        ContractValue::Text(value.into())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ContractValue::Null
                | ContractValue::Bool(_)
                | ContractValue::Number(_)
                | ContractValue::Text(_)
        )
    }

    /// String form used when a scalar is checked against a pattern.
    pub fn as_example(&self) -> Option<String> {
        match self {
            ContractValue::Text(text) => Some(text.clone()),
            ContractValue::Number(number) => Some(number.to_string()),
            ContractValue::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            ContractValue::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Renders this value as JSON, picking `side` in every nested property.
    /// Patterns render as their source.
    pub fn to_json(&self, side: Side) -> Value {
        match self {
            ContractValue::Null => Value::Null,
            ContractValue::Bool(flag) => Value::Bool(*flag),
            ContractValue::Number(number) => Value::Number(number.clone()),
            ContractValue::Text(text) => Value::String(text.clone()),
            ContractValue::Pattern(pattern) => Value::String(pattern.as_str().to_string()),
            ContractValue::List(items) => {
                Value::Array(items.iter().map(|item| item.to_json(side)).collect())
            }
            ContractValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, property)| (key.clone(), property.to_json(side)))
                    .collect::<Map<String, Value>>(),
            ),
            ContractValue::File(file) => file.to_json(side),
        }
    }
}

/// A value with a client-side and a server-side representation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DslProperty {
    /// Both sides share one value
    Single(ContractValue),
    /// Each side has its own value
    #[serde(rename_all = "camelCase")]
    Dual {
        client_value: ContractValue,
        server_value: ContractValue,
    },
}

impl DslProperty {
    pub fn single(value: ContractValue) -> Self {
        DslProperty::Single(value)
    }

    pub fn dual(client_value: ContractValue, server_value: ContractValue) -> Self {
        DslProperty::Dual {
            client_value,
            server_value,
        }
    }

    pub fn client_value(&self) -> &ContractValue {
        match self {
            DslProperty::Single(value) => value,
            DslProperty::Dual { client_value, .. } => client_value,
        }
    }

    pub fn server_value(&self) -> &ContractValue {
        match self {
            DslProperty::Single(value) => value,
            DslProperty::Dual { server_value, .. } => server_value,
        }
    }

    pub fn value(&self, side: Side) -> &ContractValue {
        match side {
            Side::Client => self.client_value(),
            Side::Server => self.server_value(),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, DslProperty::Single(_))
    }

    /// True for a concrete example on the client side paired with a pattern
    /// on the server side.
    pub fn is_pattern_backed(&self) -> bool {
        matches!(
            self,
            DslProperty::Dual {
                client_value,
                server_value: ContractValue::Pattern(_),
            } if client_value.is_scalar()
        )
    }

    pub fn to_json(&self, side: Side) -> Value {
        self.value(side).to_json(side)
    }
}

/// A file-like multipart part
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedProperty {
    pub name: DslProperty,
    pub content: DslProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<DslProperty>,
}

impl NamedProperty {
    fn to_json(&self, side: Side) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), self.name.to_json(side));
        object.insert("content".to_string(), self.content.to_json(side));
        if let Some(content_type) = &self.content_type {
            object.insert("contentType".to_string(), content_type.to_json(side));
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(value: &str) -> ContractValue {
        ContractValue::text(value)
    }

    #[test]
    fn single_value_is_shared_by_both_sides() {
        let property = DslProperty::single(text("GET"));
        assert_eq!(property.client_value(), &text("GET"));
        assert_eq!(property.server_value(), &text("GET"));
        assert!(property.is_single());
    }

    #[test]
    fn dual_value_keeps_sides_apart() {
        let property = DslProperty::dual(text("client"), text("server"));
        assert_eq!(property.value(Side::Client), &text("client"));
        assert_eq!(property.value(Side::Server), &text("server"));
        assert!(!property.is_pattern_backed());
    }

    #[test]
    fn pattern_backed_detection() {
        let pattern = Pattern::new(r"\d+").unwrap();
        let property = DslProperty::dual(text("12"), ContractValue::Pattern(pattern.clone()));
        assert!(property.is_pattern_backed());

        let reversed = DslProperty::dual(ContractValue::Pattern(pattern), text("12"));
        assert!(!reversed.is_pattern_backed());
    }

    #[test]
    fn to_json_resolves_nested_sides() {
        let id = DslProperty::dual(
            text("42"),
            ContractValue::Pattern(Pattern::new(r"\d+").unwrap()),
        );
        let mut entries = IndexMap::new();
        entries.insert("id".to_string(), id);
        entries.insert("name".to_string(), DslProperty::single(text("foo")));
        let body = DslProperty::single(ContractValue::Map(entries));

        assert_eq!(body.to_json(Side::Client), json!({ "id": "42", "name": "foo" }));
        assert_eq!(body.to_json(Side::Server), json!({ "id": "\\d+", "name": "foo" }));
    }

    #[test]
    fn serializes_single_values_plainly() {
        let property = DslProperty::single(text("GET"));
        assert_eq!(serde_json::to_value(&property).unwrap(), json!("GET"));

        let dual = DslProperty::dual(text("a"), text("b"));
        assert_eq!(
            serde_json::to_value(&dual).unwrap(),
            json!({ "clientValue": "a", "serverValue": "b" })
        );
    }

    #[test]
    fn numbers_and_booleans_have_example_forms() {
        assert_eq!(ContractValue::Number(7.into()).as_example().as_deref(), Some("7"));
        assert_eq!(ContractValue::Bool(true).as_example().as_deref(), Some("true"));
        assert_eq!(ContractValue::Null.as_example(), None);
    }
}

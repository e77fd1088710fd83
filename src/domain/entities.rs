use crate::domain::body_matchers::BodyMatchers;
use crate::domain::dsl_property::{ContractValue, DslProperty};
use indexmap::IndexMap;
use serde::Serialize;

/// Represents the request side of a contract
///
/// Produced by `RequestBuilder::get`. Fields that were never set are `None`,
/// which is not the same as being set to an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) method: Option<DslProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url_path: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<Headers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cookies: Option<Cookies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) multipart: Option<Multipart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body_matchers: Option<BodyMatchers>,
}

impl Request {
    pub fn method(&self) -> Option<&DslProperty> {
        self.method.as_ref()
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn url_path(&self) -> Option<&Url> {
        self.url_path.as_ref()
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    pub fn cookies(&self) -> Option<&Cookies> {
        self.cookies.as_ref()
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn multipart(&self) -> Option<&Multipart> {
        self.multipart.as_ref()
    }

    pub fn body_matchers(&self) -> Option<&BodyMatchers> {
        self.body_matchers.as_ref()
    }
}

/// A URL or URL path, with optional query parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Url {
    pub value: DslProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<QueryParameters>,
}

impl Url {
    pub fn new(value: DslProperty) -> Self {
        Url {
            value,
            query_parameters: None,
        }
    }
}

/// A named entry in an ordered multimap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    pub value: DslProperty,
}

/// Ordered query parameters; a name may repeat
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters {
    pub(crate) entries: Vec<Entry>,
}

impl QueryParameters {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&DslProperty> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }
}

/// Ordered header multimap; lookups ignore ASCII case
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Headers {
    pub(crate) entries: Vec<Entry>,
}

impl Headers {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first value for `name`
    pub fn get<'a>(&'a self, name: &'a str) -> Option<&'a DslProperty> {
        self.get_all(name).next()
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DslProperty> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| &entry.value)
    }
}

/// Cookies keyed by name, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cookies {
    pub(crate) entries: IndexMap<String, DslProperty>,
}

impl Cookies {
    pub fn entries(&self) -> &IndexMap<String, DslProperty> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DslProperty> {
        self.entries.get(name)
    }
}

/// Represents a request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Body(pub DslProperty);

impl Body {
    pub fn property(&self) -> &DslProperty {
        &self.0
    }
}

/// Represents multipart content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Multipart(pub DslProperty);

impl Multipart {
    pub fn property(&self) -> &DslProperty {
        &self.0
    }

    /// Returns the named parts when the multipart content is a mapping
    pub fn parts(&self) -> Option<&IndexMap<String, DslProperty>> {
        match self.0.client_value() {
            ContractValue::Map(parts) => Some(parts),
            _ => None,
        }
    }
}

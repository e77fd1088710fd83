//! Contract DSL: typed builders for the request side of HTTP contracts
//!
//! Every request field is a [`DslProperty`]: one value shared by consumer and
//! provider, or a pair such as a generated example on the client side and the
//! regular expression it satisfies on the server side.
//!
//! ```
//! use contract_dsl::{DslValues, GeneratorConfig, Input, RequestBuilder, client, server};
//! use serde_json::json;
//!
//! # fn main() -> contract_dsl::Result<()> {
//! let mut builder = RequestBuilder::with_config(GeneratorConfig::seeded(7));
//! let id = builder.any_uuid()?;
//! let kind = builder.pair(client("premium"), server(Input::regex("[a-z]+")))?;
//!
//! let request = builder
//!     .method("PUT")?
//!     .url_path("/accounts")?
//!     .headers(|headers| {
//!         headers.content_type("application/json")?;
//!         Ok(())
//!     })?
//!     .body(Input::map([("id", Input::from(id)), ("kind", kind.into()), ("tags", json!(["a"]).into())]))?
//!     .get();
//!
//! assert!(request.cookies().is_none());
//! assert!(request.body().is_some());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::builders::body_matchers_builder::BodyMatchersBuilder;
pub use application::builders::headers_builder::{CookiesBuilder, HeadersBuilder};
pub use application::builders::query_parameters_builder::QueryParametersBuilder;
pub use application::builders::request_builder::RequestBuilder;
pub use application::coercion::{Input, PatternLike, Sided, client, coerce, coerce_pair, server};
pub use application::generation::{ExampleGenerator, GeneratorConfig, RegexExampleGenerator};
pub use application::values::DslValues;
pub use domain::body_matchers::{BodyMatcher, BodyMatchers, MatchingType, PathKind};
pub use domain::dsl_property::{ContractValue, DslProperty, NamedProperty, Side};
pub use domain::entities::{Body, Cookies, Entry, Headers, Multipart, QueryParameters, Request, Url};
pub use domain::error::{ContractError, Result};
pub use domain::value_objects::{Pattern, PatternKind, Placeholder};

use crate::application::builders::body_matchers_builder::BodyMatchersBuilder;
use crate::application::builders::headers_builder::{CookiesBuilder, HeadersBuilder};
use crate::application::builders::query_parameters_builder::QueryParametersBuilder;
use crate::application::coercion::Input;
use crate::application::generation::{ExampleGenerator, GeneratorConfig, RegexExampleGenerator};
use crate::application::values::DslValues;
use crate::domain::body_matchers::BodyMatchers;
use crate::domain::dsl_property::{ContractValue, DslProperty};
use crate::domain::entities::{Body, Cookies, Headers, Multipart, Request, Url};
use crate::domain::error::{ContractError, Result};
use tracing::debug;

/// Fluent builder for the request side of a contract
///
/// Every setter replaces whatever the field held before. `get` snapshots the
/// fields set so far and leaves the builder usable.
pub struct RequestBuilder {
    generator: Box<dyn ExampleGenerator>,
    method: Option<DslProperty>,
    url: Option<Url>,
    url_path: Option<Url>,
    headers: Option<Headers>,
    cookies: Option<Cookies>,
    body: Option<Body>,
    multipart: Option<Multipart>,
    body_matchers: Option<BodyMatchers>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_generator(Box::new(RegexExampleGenerator::new(config)))
    }

    pub fn with_generator(generator: Box<dyn ExampleGenerator>) -> Self {
        Self {
            generator,
            method: None,
            url: None,
            url_path: None,
            headers: None,
            cookies: None,
            body: None,
            multipart: None,
            body_matchers: None,
        }
    }

    /// Sets the HTTP method
    ///
    /// Plain strings are upper-cased and must be valid method tokens.
    pub fn method(mut self, method: impl Into<Input>) -> Result<Self> {
        let input = match method.into() {
            Input::Scalar(ContractValue::Text(raw)) => {
                let normalized = raw.trim().to_uppercase();
                http::Method::from_bytes(normalized.as_bytes())
                    .map_err(|_| ContractError::InvalidMethod(raw.clone()))?;
                Input::Scalar(ContractValue::Text(normalized))
            }
            other => other,
        };
        let method = self.value(input)?;
        replace(&mut self.method, method, "method");
        Ok(self)
    }

    pub fn url(mut self, url: impl Into<Input>) -> Result<Self> {
        let url = Url::new(self.value(url)?);
        replace(&mut self.url, url, "url");
        Ok(self)
    }

    /// Sets the URL along with its query parameters
    pub fn url_with<F>(mut self, url: impl Into<Input>, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut QueryParametersBuilder<'_>) -> Result<()>,
    {
        let url = self.url_value(url, configure)?;
        replace(&mut self.url, url, "url");
        Ok(self)
    }

    pub fn url_path(mut self, url_path: impl Into<Input>) -> Result<Self> {
        let url_path = Url::new(self.value(url_path)?);
        replace(&mut self.url_path, url_path, "url_path");
        Ok(self)
    }

    pub fn url_path_with<F>(mut self, url_path: impl Into<Input>, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut QueryParametersBuilder<'_>) -> Result<()>,
    {
        let url_path = self.url_value(url_path, configure)?;
        replace(&mut self.url_path, url_path, "url_path");
        Ok(self)
    }

    fn url_value<F>(&mut self, url: impl Into<Input>, configure: F) -> Result<Url>
    where
        F: FnOnce(&mut QueryParametersBuilder<'_>) -> Result<()>,
    {
        let value = self.value(url)?;
        let mut builder = QueryParametersBuilder::new(self.generator.as_mut());
        configure(&mut builder)?;
        Ok(Url {
            value,
            query_parameters: Some(builder.build()),
        })
    }

    pub fn headers<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut HeadersBuilder<'_>) -> Result<()>,
    {
        let mut builder = HeadersBuilder::new(self.generator.as_mut());
        configure(&mut builder)?;
        let headers = builder.build();
        replace(&mut self.headers, headers, "headers");
        Ok(self)
    }

    pub fn cookies<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut CookiesBuilder<'_>) -> Result<()>,
    {
        let mut builder = CookiesBuilder::new(self.generator.as_mut());
        configure(&mut builder)?;
        let cookies = builder.build();
        replace(&mut self.cookies, cookies, "cookies");
        Ok(self)
    }

    /// Sets the body from a scalar, a list, a mapping or a property
    pub fn body(mut self, body: impl Into<Input>) -> Result<Self> {
        let body = Body(self.value(body)?);
        replace(&mut self.body, body, "body");
        Ok(self)
    }

    /// Sets the body from key/value pairs
    pub fn body_entries<I, K, V>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Input>,
    {
        self.body(Input::map(entries))
    }

    pub fn multipart(mut self, multipart: impl Into<Input>) -> Result<Self> {
        let multipart = Multipart(self.value(multipart)?);
        replace(&mut self.multipart, multipart, "multipart");
        Ok(self)
    }

    pub fn body_matchers<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut BodyMatchersBuilder) -> Result<()>,
    {
        let mut builder = BodyMatchersBuilder::new();
        configure(&mut builder)?;
        let body_matchers = builder.build();
        replace(&mut self.body_matchers, body_matchers, "body_matchers");
        Ok(self)
    }

    /// Snapshots every field set so far into an independent request
    pub fn get(&self) -> Request {
        Request {
            method: self.method.clone(),
            url: self.url.clone(),
            url_path: self.url_path.clone(),
            headers: self.headers.clone(),
            cookies: self.cookies.clone(),
            body: self.body.clone(),
            multipart: self.multipart.clone(),
            body_matchers: self.body_matchers.clone(),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DslValues for RequestBuilder {
    fn generator(&mut self) -> &mut dyn ExampleGenerator {
        self.generator.as_mut()
    }
}

fn replace<T>(slot: &mut Option<T>, value: T, field: &'static str) {
    let replaced = slot.replace(value).is_some();
    debug!(field, replaced, "request field set");
}

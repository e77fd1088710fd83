pub mod body_matchers_builder;
pub mod headers_builder;
pub mod query_parameters_builder;
pub mod request_builder;

pub mod body_matchers;
pub mod dsl_property;
pub mod entities;
pub mod error;
pub mod media_types;
pub mod value_objects;

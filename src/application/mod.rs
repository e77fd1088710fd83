pub mod builders;
pub mod coercion;
pub mod generation;
pub mod values;

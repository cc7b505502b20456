//! Core value types for the calculator.

mod race;
mod record;
mod results;
mod unit;
mod validation;

pub use race::*;
pub use record::*;
pub use results::*;
pub use unit::*;
pub use validation::*;

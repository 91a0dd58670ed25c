#[macro_use]
pub mod common;
pub mod inference;
pub mod model;
pub mod scenarios;

/// Exports the main types for easy access
pub use common::{HeredityError, Result};
pub use inference::{Inferencer, MarginalTable};
pub use model::{Family, GeneCount, Person, ProbabilityTables};

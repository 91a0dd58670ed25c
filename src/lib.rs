#[macro_use]
pub mod pedigree;

pub use pedigree::{Family, HeredityError, Inferencer, MarginalTable, Person, ProbabilityTables};

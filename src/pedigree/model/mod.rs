pub mod objects;
pub mod creators;
pub mod config;

pub use config::{GeneTable, InferenceConfig, ProbabilityTables};
pub use objects::{Family, GeneCount, Parents, Person};

pub mod hypothesis;
pub mod scorer;
pub mod table;
pub mod engine;

pub use engine::Inferencer;
pub use hypothesis::{Hypothesis, HypothesisEnumerator};
pub use scorer::JointProbabilityScorer;
pub use table::{GeneDistribution, MarginalTable, PersonMarginals, TraitDistribution};

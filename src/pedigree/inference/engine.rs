use super::{
    hypothesis::HypothesisEnumerator,
    scorer::JointProbabilityScorer,
    table::MarginalTable,
};
use crate::pedigree::common::error::{HeredityError, Result};
use crate::pedigree::model::{Family, InferenceConfig, ProbabilityTables};
use log::{debug, info, trace};

/// Exact inference over one family: enumerate, score, accumulate, normalize.
pub struct Inferencer {
    pub family: Family,
    pub tables: ProbabilityTables,
    pub config: InferenceConfig,
}

impl Inferencer {
    pub fn new(family: Family, tables: ProbabilityTables) -> Result<Inferencer> {
        Self::with_config(family, tables, InferenceConfig::default())
    }

    pub fn with_config(
        family: Family,
        tables: ProbabilityTables,
        config: InferenceConfig,
    ) -> Result<Inferencer> {
        tables.validate()?;
        Ok(Inferencer {
            family,
            tables,
            config,
        })
    }

    fn check_population(&self) -> Result<()> {
        let limit = self.config.max_population.min(InferenceConfig::HARD_LIMIT);
        if self.family.len() > limit {
            return Err(HeredityError::PopulationTooLarge {
                size: self.family.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Sums joint probabilities of all evidence-consistent hypotheses into
    /// a fresh, unnormalized table.
    pub fn accumulate_marginals(&self) -> Result<MarginalTable> {
        self.check_population()?;

        let enumerator = HypothesisEnumerator::new(&self.family);
        info!(
            "Enumerating {} hypotheses over {} people",
            enumerator.total(),
            self.family.len()
        );

        let scorer = JointProbabilityScorer::new(&self.family, &self.tables);
        let mut table = MarginalTable::new(&self.family);
        let mut scored: u64 = 0;
        let mut evidence_mass = 0.0;
        for hypothesis in enumerator {
            let probability = scorer.joint_probability(&hypothesis);
            table.accumulate(&hypothesis, probability);
            evidence_mass += probability;
            scored += 1;
        }
        debug!(
            "Scored {} hypotheses, total evidence probability {}",
            scored, evidence_mass
        );
        Ok(table)
    }

    /// Runs the whole pipeline and returns the posterior table.
    pub fn run_inference(&self) -> Result<MarginalTable> {
        let mut table = self.accumulate_marginals()?;
        table.normalize()?;
        for (name, marginals) in table.iter() {
            trace!("posterior {}: {:?}", name, marginals);
        }
        info!("Inference complete for {} people", table.len());
        Ok(table)
    }
}

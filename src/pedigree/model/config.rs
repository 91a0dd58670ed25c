use super::objects::GeneCount;
use crate::pedigree::common::error::{HeredityError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

/// One probability per gene count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeneTable {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneTable {
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn values(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }
}

fn current_version() -> u32 {
    ProbabilityTables::CURRENT_VERSION
}

/// The conditional probability tables of the inheritance network.
///
/// Serialized with the keys `gene-prior`, `trait-given-gene` and
/// `mutation-rate`. `trait-given-gene` holds P(trait = true | count); the
/// false column is its complement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProbabilityTables {
    /// Version for format compatibility
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(rename = "gene-prior")]
    pub gene_prior: GeneTable,
    #[serde(rename = "trait-given-gene")]
    pub trait_given_gene: GeneTable,
    #[serde(rename = "mutation-rate")]
    pub mutation_rate: f64,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        ProbabilityTables {
            version: Self::CURRENT_VERSION,
            gene_prior: GeneTable {
                zero: 0.96,
                one: 0.03,
                two: 0.01,
            },
            trait_given_gene: GeneTable {
                zero: 0.01,
                one: 0.56,
                two: 0.65,
            },
            mutation_rate: 0.01,
        }
    }
}

impl ProbabilityTables {
    pub const CURRENT_VERSION: u32 = 1;
    const PRIOR_TOLERANCE: f64 = 1e-9;

    /// Unconditional gene-count probability for a founder.
    pub fn gene_prior(&self, count: GeneCount) -> f64 {
        self.gene_prior.get(count)
    }

    pub fn trait_probability(&self, count: GeneCount, expressed: bool) -> f64 {
        let present = self.trait_given_gene.get(count);
        if expressed { present } else { 1.0 - present }
    }

    pub fn validate(&self) -> Result<()> {
        let in_unit_interval = |value: f64| (0.0..=1.0).contains(&value);

        for (name, table) in [
            ("gene-prior", &self.gene_prior),
            ("trait-given-gene", &self.trait_given_gene),
        ] {
            for (count, value) in table.values().iter().enumerate() {
                if !in_unit_interval(*value) {
                    return Err(HeredityError::invalid_tables(format!(
                        "{name}[{count}] = {value} is not a probability"
                    )));
                }
            }
        }

        let prior_total: f64 = self.gene_prior.values().iter().sum();
        if (prior_total - 1.0).abs() > Self::PRIOR_TOLERANCE {
            return Err(HeredityError::invalid_tables(format!(
                "gene-prior sums to {prior_total}, expected 1"
            )));
        }

        if !in_unit_interval(self.mutation_rate) {
            return Err(HeredityError::invalid_tables(format!(
                "mutation-rate = {} is not a probability",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Save tables to a file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load tables from a file, rejecting newer format versions and invalid values
    pub fn load_from_file(path: &str) -> Result<Self> {
        info!("Loading probability tables from file: {}", path);
        let json = fs::read_to_string(path)?;
        let tables: ProbabilityTables = serde_json::from_str(&json)?;

        if tables.version > Self::CURRENT_VERSION {
            return Err(HeredityError::invalid_tables(format!(
                "tables file version {} is newer than supported version {}",
                tables.version,
                Self::CURRENT_VERSION
            )));
        }

        tables.validate()?;
        Ok(tables)
    }
}

/// Limits applied to one inference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Largest population the engine agrees to enumerate
    pub max_population: usize,
}

impl InferenceConfig {
    /// Hypotheses are bit sets over the population, so no run can exceed this.
    pub const HARD_LIMIT: usize = 63;
}

impl Default for InferenceConfig {
    fn default() -> Self {
        InferenceConfig { max_population: 12 }
    }
}

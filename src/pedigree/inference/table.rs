use super::hypothesis::Hypothesis;
use crate::pedigree::common::error::{HeredityError, Result};
use crate::pedigree::model::{Family, GeneCount};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Weight per gene count. Unnormalized while accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeneDistribution {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneDistribution {
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn add(&mut self, count: GeneCount, weight: f64) {
        match count {
            GeneCount::Zero => self.zero += weight,
            GeneCount::One => self.one += weight,
            GeneCount::Two => self.two += weight,
        }
    }

    pub fn total(&self) -> f64 {
        self.zero + self.one + self.two
    }

    fn scale(&mut self, total: f64) {
        self.zero /= total;
        self.one /= total;
        self.two /= total;
    }
}

/// Weight per trait value. Unnormalized while accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TraitDistribution {
    #[serde(rename = "true")]
    pub present: f64,
    #[serde(rename = "false")]
    pub absent: f64,
}

impl TraitDistribution {
    pub fn get(&self, expressed: bool) -> f64 {
        if expressed { self.present } else { self.absent }
    }

    pub fn add(&mut self, expressed: bool, weight: f64) {
        if expressed {
            self.present += weight;
        } else {
            self.absent += weight;
        }
    }

    pub fn total(&self) -> f64 {
        self.present + self.absent
    }

    fn scale(&mut self, total: f64) {
        self.present /= total;
        self.absent /= total;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PersonMarginals {
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_expression: TraitDistribution,
}

/// Per-person gene and trait distributions of one run.
///
/// Created zeroed, grown by `accumulate` once per hypothesis, and turned
/// into posteriors by `normalize`. Entries follow family order (sorted by
/// name).
#[derive(Debug, Clone, PartialEq)]
pub struct MarginalTable {
    pub names: Vec<String>,
    pub entries: Vec<PersonMarginals>,
}

impl MarginalTable {
    pub fn new(family: &Family) -> MarginalTable {
        MarginalTable {
            names: family.names().map(str::to_string).collect(),
            entries: vec![PersonMarginals::default(); family.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PersonMarginals> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|position| &self.entries[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonMarginals)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.entries.iter())
    }

    /// Adds `probability` to every person's bucket matching `hypothesis`.
    pub fn accumulate(&mut self, hypothesis: &Hypothesis, probability: f64) {
        for (position, entry) in self.entries.iter_mut().enumerate() {
            entry.gene.add(hypothesis.gene_count(position), probability);
            entry
                .trait_expression
                .add(hypothesis.has_trait(position), probability);
        }
    }

    /// Rescales every distribution to sum to one.
    ///
    /// Fails without touching the table if any person has zero total
    /// weight, which only happens when the evidence is impossible under
    /// the tables.
    pub fn normalize(&mut self) -> Result<()> {
        for (name, entry) in self.names.iter().zip(self.entries.iter()) {
            let gene_total = entry.gene.total();
            let trait_total = entry.trait_expression.total();
            if !(gene_total > 0.0 && trait_total > 0.0) {
                return Err(HeredityError::UnsatisfiableEvidence {
                    person: name.clone(),
                });
            }
        }
        for entry in self.entries.iter_mut() {
            let gene_total = entry.gene.total();
            let trait_total = entry.trait_expression.total();
            entry.gene.scale(gene_total);
            entry.trait_expression.scale(trait_total);
        }
        Ok(())
    }
}

impl Serialize for MarginalTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, marginals) in self.iter() {
            map.serialize_entry(name, marginals)?;
        }
        map.end()
    }
}

use super::hypothesis::Hypothesis;
use crate::pedigree::model::{Family, GeneCount, ProbabilityTables};
use log::trace;

/// Scores complete hypotheses under the inheritance network.
pub struct JointProbabilityScorer<'a> {
    family: &'a Family,
    tables: &'a ProbabilityTables,
}

impl<'a> JointProbabilityScorer<'a> {
    pub fn new(family: &'a Family, tables: &'a ProbabilityTables) -> Self {
        JointProbabilityScorer { family, tables }
    }

    /// Probability that a parent with `count` copies passes a copy on,
    /// mutation included. A parent with one copy passes either allele with
    /// equal chance; mutation is not applied on top of that.
    pub fn transmission(&self, count: GeneCount) -> f64 {
        let mutation = self.tables.mutation_rate;
        match count {
            GeneCount::Zero => mutation,
            GeneCount::One => 0.5,
            GeneCount::Two => 1.0 - mutation,
        }
    }

    /// P(child has `child` copies | parents' copies): one allele from each
    /// parent, independently.
    pub fn inheritance_probability(
        &self,
        child: GeneCount,
        mother: GeneCount,
        father: GeneCount,
    ) -> f64 {
        let from_mother = self.transmission(mother);
        let from_father = self.transmission(father);
        match child {
            GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
            GeneCount::One => {
                from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father
            }
            GeneCount::Two => from_mother * from_father,
        }
    }

    /// P(gene count | parents or prior) * P(trait | gene count) for one person.
    pub fn person_factor(&self, position: usize, hypothesis: &Hypothesis) -> f64 {
        let count = hypothesis.gene_count(position);
        let gene_factor = match self.family.parents_of(position) {
            Some(parents) => self.inheritance_probability(
                count,
                hypothesis.gene_count(parents.mother),
                hypothesis.gene_count(parents.father),
            ),
            None => self.tables.gene_prior(count),
        };
        gene_factor * self.tables.trait_probability(count, hypothesis.has_trait(position))
    }

    /// Every person's factor, in family order.
    pub fn local_factors(&self, hypothesis: &Hypothesis) -> Vec<f64> {
        (0..self.family.len())
            .map(|position| self.person_factor(position, hypothesis))
            .collect()
    }

    pub fn joint_probability(&self, hypothesis: &Hypothesis) -> f64 {
        let probability: f64 = (0..self.family.len())
            .map(|position| self.person_factor(position, hypothesis))
            .product();
        trace!("joint_probability: {:?} -> {}", hypothesis, probability);
        probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::model::creators::{child, founder};
    use crate::pedigree::model::GeneCount::{One, Two, Zero};

    fn family0() -> Family {
        Family::new(vec![
            child("Harry", "Lily", "James", None),
            founder("James", Some(true)),
            founder("Lily", Some(false)),
        ])
        .unwrap()
    }

    #[test]
    fn test_transmission_table() {
        let family = family0();
        let tables = ProbabilityTables::default();
        let scorer = JointProbabilityScorer::new(&family, &tables);
        assert_eq!(scorer.transmission(Zero), 0.01);
        assert_eq!(scorer.transmission(One), 0.5);
        assert_eq!(scorer.transmission(Two), 0.99);
    }

    #[test]
    fn test_inheritance_distribution_sums_to_one() {
        let family = family0();
        let tables = ProbabilityTables::default();
        let scorer = JointProbabilityScorer::new(&family, &tables);
        for mother in GeneCount::ALL {
            for father in GeneCount::ALL {
                let total: f64 = GeneCount::ALL
                    .iter()
                    .map(|c| scorer.inheritance_probability(*c, mother, father))
                    .sum();
                assert!((total - 1.0).abs() < 1e-12);
            }
        }
        assert!((scorer.inheritance_probability(One, Two, Zero) - (0.99 * 0.99 + 0.01 * 0.01)).abs() < 1e-12);
    }

    #[test]
    fn test_joint_probability_textbook_example() {
        // Harry: one copy, no trait; James: two copies, trait; Lily: none, no trait.
        let family = family0();
        let tables = ProbabilityTables::default();
        let scorer = JointProbabilityScorer::new(&family, &tables);
        let hypothesis = Hypothesis::from_assignments(&[(One, false), (Two, true), (Zero, false)]);

        let lily = 0.96 * 0.99;
        let james = 0.01 * 0.65;
        let harry = (0.99 * 0.99 + 0.01 * 0.01) * 0.44;
        let expected = lily * james * harry;
        let actual = scorer.joint_probability(&hypothesis);
        assert!((actual - expected).abs() < 1e-15, "{actual} vs {expected}");
        assert!((actual - 0.0026643247488).abs() < 1e-12);
    }

    #[test]
    fn test_local_factors_multiply_to_joint() {
        let family = family0();
        let tables = ProbabilityTables::default();
        let scorer = JointProbabilityScorer::new(&family, &tables);
        let hypothesis = Hypothesis::from_assignments(&[(Two, true), (One, true), (One, false)]);
        let factors = scorer.local_factors(&hypothesis);
        assert_eq!(factors.len(), 3);
        let product: f64 = factors.iter().product();
        assert_eq!(product, scorer.joint_probability(&hypothesis));
    }
}

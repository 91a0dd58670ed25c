use crate::pedigree::model::{Family, GeneCount};

/// One complete world: a gene count and a trait expression for every
/// person. Bit `i` of each set refers to the person at position `i` of the
/// family. `one_gene` and `two_genes` are disjoint; people in neither carry
/// no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hypothesis {
    pub one_gene: u64,
    pub two_genes: u64,
    pub have_trait: u64,
}

impl Hypothesis {
    pub fn gene_count(&self, position: usize) -> GeneCount {
        let bit = 1u64 << position;
        if self.one_gene & bit != 0 {
            GeneCount::One
        } else if self.two_genes & bit != 0 {
            GeneCount::Two
        } else {
            GeneCount::Zero
        }
    }

    pub fn has_trait(&self, position: usize) -> bool {
        self.have_trait & (1u64 << position) != 0
    }

    /// Builds a hypothesis from per-person assignments, in family order.
    pub fn from_assignments(assignments: &[(GeneCount, bool)]) -> Hypothesis {
        let mut hypothesis = Hypothesis {
            one_gene: 0,
            two_genes: 0,
            have_trait: 0,
        };
        for (position, (count, expressed)) in assignments.iter().enumerate() {
            let bit = 1u64 << position;
            match count {
                GeneCount::Zero => {}
                GeneCount::One => hypothesis.one_gene |= bit,
                GeneCount::Two => hypothesis.two_genes |= bit,
            }
            if *expressed {
                hypothesis.have_trait |= bit;
            }
        }
        hypothesis
    }
}

/// Next submask of `mask` after `current` in ascending order; wraps to 0
/// after `mask` itself.
fn next_submask(current: u64, mask: u64) -> u64 {
    current.wrapping_sub(mask) & mask
}

/// Lazily yields every hypothesis whose trait set agrees with the
/// observed traits of the family.
///
/// Outer loop: trait sets, with the evidence filter. Inner loops: the
/// one-copy set over the whole population, then the two-copy set over
/// everyone left. The order is fixed, so two enumerations of the same
/// family yield the same sequence.
pub struct HypothesisEnumerator {
    everyone: u64,
    known: u64,
    observed_true: u64,
    cursor: Option<Hypothesis>,
}

impl HypothesisEnumerator {
    /// The family must be no larger than `InferenceConfig::HARD_LIMIT`.
    pub fn new(family: &Family) -> HypothesisEnumerator {
        debug_assert!(family.len() < 64);
        let everyone = (1u64 << family.len()) - 1;

        let mut known = 0u64;
        let mut observed_true = 0u64;
        for (position, person) in family.people().iter().enumerate() {
            if let Some(observed) = person.observed_trait {
                known |= 1u64 << position;
                if observed {
                    observed_true |= 1u64 << position;
                }
            }
        }

        let mut enumerator = HypothesisEnumerator {
            everyone,
            known,
            observed_true,
            cursor: None,
        };
        enumerator.cursor = enumerator
            .first_trait_set_from(0)
            .map(|have_trait| Hypothesis {
                one_gene: 0,
                two_genes: 0,
                have_trait,
            });
        enumerator
    }

    /// Whether some person's observed trait disagrees with `have_trait`.
    pub fn fails_evidence(&self, have_trait: u64) -> bool {
        have_trait & self.known != self.observed_true
    }

    fn first_trait_set_from(&self, start: u64) -> Option<u64> {
        (start..=self.everyone).find(|have_trait| !self.fails_evidence(*have_trait))
    }

    /// Number of hypotheses the enumerator yields in total:
    /// 2^(people with unknown trait) * 3^(people), saturating.
    pub fn total(&self) -> u128 {
        let people = self.everyone.count_ones();
        let unknown = people - self.known.count_ones();
        (1u128 << unknown).saturating_mul(3u128.pow(people))
    }

    fn advance(&self, current: Hypothesis) -> Option<Hypothesis> {
        let free = self.everyone & !current.one_gene;
        if current.two_genes != free {
            return Some(Hypothesis {
                two_genes: next_submask(current.two_genes, free),
                ..current
            });
        }
        if current.one_gene != self.everyone {
            return Some(Hypothesis {
                one_gene: current.one_gene + 1,
                two_genes: 0,
                ..current
            });
        }
        if current.have_trait == self.everyone {
            return None;
        }
        self.first_trait_set_from(current.have_trait + 1)
            .map(|have_trait| Hypothesis {
                one_gene: 0,
                two_genes: 0,
                have_trait,
            })
    }
}

impl Iterator for HypothesisEnumerator {
    type Item = Hypothesis;

    fn next(&mut self) -> Option<Hypothesis> {
        let current = self.cursor?;
        self.cursor = self.advance(current);
        Some(current)
    }
}

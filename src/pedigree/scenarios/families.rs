use crate::pedigree::common::error::Result;
use crate::pedigree::common::interface::ScenarioMaker;
use crate::pedigree::model::creators::{child, founder};
use crate::pedigree::model::Family;

/// One founder, nothing observed.
pub struct SingleFounder {}

impl ScenarioMaker for SingleFounder {
    fn name(&self) -> &'static str {
        "single_founder"
    }

    fn setup_scenario(&self) -> Result<Family> {
        Family::new(vec![founder("Alice", None)])
    }
}

/// Harry, child of a trait-positive father and a trait-negative mother.
pub struct FamilyZero {}

impl ScenarioMaker for FamilyZero {
    fn name(&self) -> &'static str {
        "family0"
    }

    fn setup_scenario(&self) -> Result<Family> {
        Family::new(vec![
            child("Harry", "Lily", "James", None),
            founder("James", Some(true)),
            founder("Lily", Some(false)),
        ])
    }
}

/// Two trait-negative founders with four children, one trait-positive.
pub struct FamilyOne {}

impl ScenarioMaker for FamilyOne {
    fn name(&self) -> &'static str {
        "family1"
    }

    fn setup_scenario(&self) -> Result<Family> {
        Family::new(vec![
            founder("Arthur", Some(false)),
            child("Charlie", "Molly", "Arthur", Some(false)),
            child("Fred", "Molly", "Arthur", Some(true)),
            child("Ginny", "Molly", "Arthur", None),
            founder("Molly", Some(false)),
            child("Ron", "Molly", "Arthur", None),
        ])
    }
}

/// Trait-positive child of two trait-negative founders.
pub struct MutationRequired {}

impl ScenarioMaker for MutationRequired {
    fn name(&self) -> &'static str {
        "mutation_required"
    }

    fn setup_scenario(&self) -> Result<Family> {
        Family::new(vec![
            founder("Bob", Some(false)),
            founder("Carol", Some(false)),
            child("Dave", "Carol", "Bob", Some(true)),
        ])
    }
}

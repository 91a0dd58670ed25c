use crate::pedigree::common::error::{HeredityError, Result};
use crate::pedigree::common::interface::ScenarioMaker;

use super::families::{FamilyOne, FamilyZero, MutationRequired, SingleFounder};

pub struct ScenarioMakerFactory;

impl ScenarioMakerFactory {
    pub const NAMES: [&'static str; 4] = ["single_founder", "family0", "family1", "mutation_required"];

    pub fn new_shared(name: &str) -> Result<Box<dyn ScenarioMaker>> {
        match name {
            "single_founder" => Ok(Box::new(SingleFounder {})),
            "family0" => Ok(Box::new(FamilyZero {})),
            "family1" => Ok(Box::new(FamilyOne {})),
            "mutation_required" => Ok(Box::new(MutationRequired {})),
            _ => Err(HeredityError::UnknownScenario {
                name: name.to_string(),
            }),
        }
    }
}

use std::io::Write;

use super::error::Result;
use crate::pedigree::inference::MarginalTable;
use crate::pedigree::model::Family;

/// Source of a validated family record.
pub trait FamilyLoader {
    fn load_family(&self) -> Result<Family>;
}

/// A built-in family used for demos and tests.
pub trait ScenarioMaker {
    fn name(&self) -> &'static str;

    fn setup_scenario(&self) -> Result<Family>;
}

/// Writes a normalized posterior table somewhere.
pub trait Reporter {
    fn report(&self, table: &MarginalTable, out: &mut dyn Write) -> Result<()>;
}

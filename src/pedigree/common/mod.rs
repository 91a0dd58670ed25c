pub mod error;
pub mod family_loader;
pub mod interface;
#[macro_use]
pub mod logging;
pub mod report;
pub mod setup;

pub use error::{HeredityError, Result};
pub use family_loader::CsvFamilyLoader;
pub use interface::{FamilyLoader, Reporter, ScenarioMaker};
pub use report::{JsonReporter, TextReporter};

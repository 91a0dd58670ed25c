pub mod factory;
pub mod families;

pub use factory::ScenarioMakerFactory;

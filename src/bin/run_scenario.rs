use anyhow::Result;
use heredity::pedigree::common::report::TextReporter;
use heredity::pedigree::common::setup::init_logging;
use heredity::pedigree::model::ProbabilityTables;
use heredity::pedigree::scenarios::ScenarioMakerFactory;
use heredity::{print_blue, print_yellow, Inferencer};

fn main() -> Result<()> {
    init_logging();
    print_yellow!("Running {} built-in scenarios", ScenarioMakerFactory::NAMES.len());

    let reporter = TextReporter {
        precision: 4,
        colorize: true,
    };
    for name in ScenarioMakerFactory::NAMES {
        let family = ScenarioMakerFactory::new_shared(name)?.setup_scenario()?;
        print_blue!("===== {} ({} people) =====", name, family.len());

        let inferencer = Inferencer::new(family, ProbabilityTables::default())?;
        let table = inferencer.run_inference()?;
        print!("{}", reporter.render(&table));
    }
    Ok(())
}

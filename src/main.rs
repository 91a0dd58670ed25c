use anyhow::{Context, Result};
use heredity::pedigree::common::{
    family_loader::CsvFamilyLoader,
    interface::FamilyLoader,
    report::reporter_for,
    setup::{parse_configuration_options, CommandLineOptions},
};
use heredity::pedigree::model::{Family, ProbabilityTables};
use heredity::pedigree::scenarios::ScenarioMakerFactory;
use heredity::{print_green, print_red, Inferencer};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn load_family(config: &CommandLineOptions) -> Result<Family> {
    if let Some(path) = &config.data_file {
        let loader = CsvFamilyLoader::new(path);
        return loader
            .load_family()
            .with_context(|| format!("Failed to load family from {}", path));
    }
    let name = config.scenario_name.as_deref().unwrap_or_default();
    let scenario = ScenarioMakerFactory::new_shared(name)?;
    scenario
        .setup_scenario()
        .with_context(|| format!("Failed to set up scenario {}", name))
}

fn load_tables(config: &CommandLineOptions) -> Result<ProbabilityTables> {
    match &config.tables_file {
        Some(path) => ProbabilityTables::load_from_file(path)
            .with_context(|| format!("Failed to load probability tables from {}", path)),
        None => Ok(ProbabilityTables::default()),
    }
}

fn run(config: &CommandLineOptions) -> Result<()> {
    let family = load_family(config)?;
    let tables = load_tables(config)?;

    let inferencer = Inferencer::with_config(family, tables, config.inference_config())?;
    let table = inferencer.run_inference().context("Inference failed")?;

    match &config.output_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
            let mut writer = BufWriter::new(file);
            reporter_for(config.output_format, config.precision, false).report(&table, &mut writer)?;
            writer.flush()?;
            print_green!("Posteriors for {} people written to {}", table.len(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            reporter_for(config.output_format, config.precision, config.colorize)
                .report(&table, &mut handle)?;
        }
    }
    Ok(())
}

fn main() {
    let config = parse_configuration_options();
    if let Err(e) = run(&config) {
        print_red!("Error: {:#}", e);
        std::process::exit(1);
    }
}

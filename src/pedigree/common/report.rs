use colored::Colorize;
use std::io::Write;

use super::error::Result;
use super::interface::Reporter;
use super::setup::OutputFormat;
use crate::pedigree::inference::MarginalTable;
use crate::pedigree::model::GeneCount;

/// The classic per-person listing:
///
/// ```text
/// Harry:
///   Gene:
///     2: 0.0092
///     1: 0.4557
///     0: 0.5351
///   Trait:
///     True: 0.2665
///     False: 0.7335
/// ```
pub struct TextReporter {
    pub precision: usize,
    pub colorize: bool,
}

impl TextReporter {
    pub fn render(&self, table: &MarginalTable) -> String {
        let precision = self.precision;
        let mut out = String::new();
        for (name, marginals) in table.iter() {
            let header = format!("{name}:");
            if self.colorize {
                out.push_str(&header.bold().to_string());
            } else {
                out.push_str(&header);
            }
            out.push('\n');

            out.push_str("  Gene:\n");
            for count in GeneCount::ALL.iter().rev() {
                let p = marginals.gene.get(*count);
                out.push_str(&format!("    {count}: {p:.precision$}\n"));
            }
            out.push_str("  Trait:\n");
            for (label, expressed) in [("True", true), ("False", false)] {
                let p = marginals.trait_expression.get(expressed);
                out.push_str(&format!("    {label}: {p:.precision$}\n"));
            }
        }
        out
    }
}

impl Reporter for TextReporter {
    fn report(&self, table: &MarginalTable, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.render(table).as_bytes())?;
        Ok(())
    }
}

/// Full-precision JSON: `{ name: { "gene": {...}, "trait": {...} } }`.
pub struct JsonReporter {
    pub pretty: bool,
}

impl Reporter for JsonReporter {
    fn report(&self, table: &MarginalTable, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, table)?;
        } else {
            serde_json::to_writer(&mut *out, table)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

pub fn reporter_for(format: OutputFormat, precision: usize, colorize: bool) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter {
            precision,
            colorize,
        }),
        OutputFormat::Json => Box::new(JsonReporter { pretty: true }),
    }
}

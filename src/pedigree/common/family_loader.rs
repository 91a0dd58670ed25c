use super::error::{HeredityError, Result};
use super::interface::FamilyLoader;
use crate::pedigree::model::{Family, Person};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Raw CSV row; every cell is text until validated.
#[derive(Debug, Deserialize)]
struct FamilyRow {
    name: String,
    #[serde(default)]
    mother: String,
    #[serde(default)]
    father: String,
    #[serde(default, rename = "trait")]
    observed_trait: String,
}

fn non_blank(cell: String) -> Option<String> {
    if cell.is_empty() { None } else { Some(cell) }
}

/// `1` is an observed trait, `0` an observed absence, blank is unknown.
pub fn parse_trait_marker(marker: &str) -> Option<Option<bool>> {
    match marker {
        "1" => Some(Some(true)),
        "0" => Some(Some(false)),
        "" => Some(None),
        _ => None,
    }
}

/// Reads families from headered `name,mother,father,trait` CSV files.
pub struct CsvFamilyLoader {
    path: PathBuf,
}

impl CsvFamilyLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CsvFamilyLoader {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<Family> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut people = Vec::new();
        for (row_index, row) in csv_reader.deserialize::<FamilyRow>().enumerate() {
            // Header is line 1.
            let line = row_index + 2;
            let row = row?;
            let observed_trait = parse_trait_marker(&row.observed_trait).ok_or_else(|| {
                HeredityError::malformed(format!(
                    "line {}: trait '{}' for '{}' must be 1, 0 or blank",
                    line, row.observed_trait, row.name
                ))
            })?;
            debug!("line {}: {} (trait {:?})", line, row.name, observed_trait);
            people.push(Person {
                name: row.name,
                mother: non_blank(row.mother),
                father: non_blank(row.father),
                observed_trait,
            });
        }

        Family::new(people)
    }
}

impl FamilyLoader for CsvFamilyLoader {
    fn load_family(&self) -> Result<Family> {
        info!("Loading family from {}", self.path.display());
        let file = File::open(&self.path)?;
        let family = Self::load_from_reader(file)?;
        info!("Loaded {} people", family.len());
        Ok(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_textbook_family() {
        let data = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n";
        let family = CsvFamilyLoader::load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(family.len(), 3);

        let harry = family.get("Harry").unwrap();
        assert_eq!(harry.mother.as_deref(), Some("Lily"));
        assert_eq!(harry.father.as_deref(), Some("James"));
        assert_eq!(harry.observed_trait, None);
        assert_eq!(family.get("James").unwrap().observed_trait, Some(true));
        assert_eq!(family.get("Lily").unwrap().observed_trait, Some(false));
        assert!(family.get("Lily").unwrap().is_founder());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let data = "name, mother, father, trait\n Harry , Lily , James , 1 \nJames,,,\nLily,,,\n";
        let family = CsvFamilyLoader::load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(family.get("Harry").unwrap().observed_trait, Some(true));
        assert!(family.parents_of(family.position_of("Harry").unwrap()).is_some());
    }

    #[test]
    fn test_bad_trait_marker_reports_line() {
        let data = "name,mother,father,trait\nJames,,,1\nLily,,,yes\n";
        let err = CsvFamilyLoader::load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, HeredityError::MalformedInput { .. }));
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let data = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\n";
        let err = CsvFamilyLoader::load_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'Lily'"), "{err}");
    }

    #[test]
    fn test_trait_markers() {
        assert_eq!(parse_trait_marker("1"), Some(Some(true)));
        assert_eq!(parse_trait_marker("0"), Some(Some(false)));
        assert_eq!(parse_trait_marker(""), Some(None));
        assert_eq!(parse_trait_marker("2"), None);
    }
}

use crate::pedigree::common::error::{HeredityError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of copies of the gene a person carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn as_index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<GeneCount> {
        match index {
            0 => Some(GeneCount::Zero),
            1 => Some(GeneCount::One),
            2 => Some(GeneCount::Two),
            _ => None,
        }
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_index())
    }
}

/// One member of the family as recorded in the input.
///
/// `observed_trait` is `None` when nothing is known about the trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub observed_trait: Option<bool>,
}

impl Person {
    pub fn is_founder(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// Parent indices of a person whose parents are both recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

/// The population of one run.
///
/// People are kept sorted by name so that enumeration, accumulation and
/// reporting all visit them in the same order on every run. Parent names
/// are resolved to indices once, here.
#[derive(Debug, Clone)]
pub struct Family {
    people: Vec<Person>,
    parents: Vec<Option<Parents>>,
    index: HashMap<String, usize>,
}

impl Family {
    pub fn new(mut people: Vec<Person>) -> Result<Family> {
        people.sort_by(|a, b| a.name.cmp(&b.name));

        let mut index = HashMap::with_capacity(people.len());
        for (position, person) in people.iter().enumerate() {
            if person.name.is_empty() {
                return Err(HeredityError::malformed("person with an empty name"));
            }
            if index.insert(person.name.clone(), position).is_some() {
                return Err(HeredityError::malformed(format!(
                    "duplicate person '{}'",
                    person.name
                )));
            }
        }

        let mut parents = Vec::with_capacity(people.len());
        for person in &people {
            let resolved = match (&person.mother, &person.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => {
                    let mother = Self::resolve_parent(&index, person, mother, "mother")?;
                    let father = Self::resolve_parent(&index, person, father, "father")?;
                    Some(Parents { mother, father })
                }
                _ => {
                    return Err(HeredityError::malformed(format!(
                        "'{}' has only one recorded parent; record both or neither",
                        person.name
                    )));
                }
            };
            parents.push(resolved);
        }

        Ok(Family {
            people,
            parents,
            index,
        })
    }

    fn resolve_parent(
        index: &HashMap<String, usize>,
        person: &Person,
        parent: &str,
        role: &str,
    ) -> Result<usize> {
        if parent == person.name {
            return Err(HeredityError::malformed(format!(
                "'{}' is recorded as their own {}",
                person.name, role
            )));
        }
        index.get(parent).copied().ok_or_else(|| {
            HeredityError::malformed(format!(
                "{} '{}' of '{}' is not in the family",
                role, parent, person.name
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, position: usize) -> &Person {
        &self.people[position]
    }

    pub fn parents_of(&self, position: usize) -> Option<Parents> {
        self.parents[position]
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.position_of(name).map(|position| &self.people[position])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.people.iter().map(|person| person.name.as_str())
    }
}

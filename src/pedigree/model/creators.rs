use super::objects::Person;

pub fn founder(name: &str, observed_trait: Option<bool>) -> Person {
    Person {
        name: name.to_string(),
        mother: None,
        father: None,
        observed_trait,
    }
}

pub fn child(name: &str, mother: &str, father: &str, observed_trait: Option<bool>) -> Person {
    Person {
        name: name.to_string(),
        mother: Some(mother.to_string()),
        father: Some(father.to_string()),
        observed_trait,
    }
}

//! Parent Resolution
//!
//! Mother and father are stored by name. A name is shown as a link when a
//! person with exactly that name is in the list, otherwise as plain text.

use std::collections::HashMap;

use crate::Person;

/// Shown in a parent cell when no name is recorded
pub const NO_PARENT_PLACEHOLDER: &str = "-";

/// What a mother/father cell should display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentCell<'a> {
    Placeholder,
    Link(&'a Person),
    Unresolved(&'a str),
}

/// Linear scan; the first person with a matching name wins.
pub fn resolve_parent<'a>(people: &'a [Person], parent_name: Option<&'a str>) -> ParentCell<'a> {
    match parent_name {
        None | Some("") => ParentCell::Placeholder,
        Some(name) => match people.iter().find(|p| p.name == name) {
            Some(parent) => ParentCell::Link(parent),
            None => ParentCell::Unresolved(name),
        },
    }
}

/// Name lookup built once per render pass. Keeps the first occurrence of
/// duplicate names so it agrees with `resolve_parent`.
#[derive(Debug, Default)]
pub struct NameIndex<'a> {
    by_name: HashMap<&'a str, &'a Person>,
}

impl<'a> NameIndex<'a> {
    pub fn new(people: &'a [Person]) -> Self {
        let mut by_name = HashMap::with_capacity(people.len());
        for person in people {
            by_name.entry(person.name.as_str()).or_insert(person);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Person> {
        self.by_name.get(name).copied()
    }

    pub fn resolve<'p>(&self, parent_name: Option<&'p str>) -> ParentCell<'p>
    where
        'a: 'p,
    {
        match parent_name {
            None | Some("") => ParentCell::Placeholder,
            Some(name) => match self.get(name) {
                Some(parent) => ParentCell::Link(parent),
                None => ParentCell::Unresolved(name),
            },
        }
    }

    pub fn mother_of<'p>(&self, person: &'p Person) -> ParentCell<'p>
    where
        'a: 'p,
    {
        self.resolve(person.mother_name.as_deref())
    }

    pub fn father_of<'p>(&self, person: &'p Person) -> ParentCell<'p>
    where
        'a: 'p,
    {
        self.resolve(person.father_name.as_deref())
    }
}

/// Row highlight check against the slug from the route
pub fn is_selected(person: &Person, selected_slug: Option<&str>) -> bool {
    selected_slug == Some(person.slug.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_person;
    use crate::Sex;

    fn family() -> Vec<Person> {
        let mut jane = make_person("Jane", Sex::Female, 1800);
        jane.slug = "jane-1".to_string();
        let mut child = make_person("Kid", Sex::Male, 1830);
        child.mother_name = Some("Jane".to_string());
        child.father_name = Some("Ghost".to_string());
        let orphan = make_person("Orphan", Sex::Female, 1840);
        vec![jane, child, orphan]
    }

    #[test]
    fn test_mother_present_links() {
        let people = family();
        let cell = resolve_parent(&people, people[1].mother_name.as_deref());
        match cell {
            ParentCell::Link(parent) => assert_eq!(parent.slug, "jane-1"),
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_parent_is_plain_text() {
        let people = family();
        assert_eq!(
            resolve_parent(&people, people[1].father_name.as_deref()),
            ParentCell::Unresolved("Ghost")
        );
    }

    #[test]
    fn test_no_parent_is_placeholder() {
        let people = family();
        assert_eq!(resolve_parent(&people, people[2].mother_name.as_deref()), ParentCell::Placeholder);
        assert_eq!(NO_PARENT_PLACEHOLDER, "-");
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let mut first = make_person("Twin", Sex::Female, 1700);
        first.slug = "twin-a".to_string();
        let mut second = make_person("Twin", Sex::Female, 1750);
        second.slug = "twin-b".to_string();
        let people = vec![first, second];

        let index = NameIndex::new(&people);
        for cell in [resolve_parent(&people, Some("Twin")), index.resolve(Some("Twin"))] {
            match cell {
                ParentCell::Link(parent) => assert_eq!(parent.slug, "twin-a"),
                other => panic!("expected link, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_index_agrees_with_scan() {
        let people = family();
        let index = NameIndex::new(&people);
        for person in &people {
            assert_eq!(index.mother_of(person), resolve_parent(&people, person.mother_name.as_deref()));
            assert_eq!(index.father_of(person), resolve_parent(&people, person.father_name.as_deref()));
        }
    }

    #[test]
    fn test_selection_marks_single_row() {
        let people = family();
        let selected: Vec<&str> = people
            .iter()
            .filter(|p| is_selected(p, Some("jane-1")))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(selected, vec!["Jane"]);
        assert!(people.iter().all(|p| !is_selected(p, None)));
    }
}

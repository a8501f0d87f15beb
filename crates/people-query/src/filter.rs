//! Filters
//!
//! `sex`, `query` and `centuries` narrow the rows before sorting. Like the
//! sort state they are read from the URL on every pass.

use crate::{ParamUpdate, Person, QueryError, QueryParams, Sex};

pub(crate) const SEX_KEY: &str = "sex";
pub(crate) const QUERY_KEY: &str = "query";
pub(crate) const CENTURIES_KEY: &str = "centuries";

/// Centuries offered as filter buttons
pub const CENTURIES: [u32; 5] = [16, 17, 18, 19, 20];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub sex: Option<Sex>,
    pub query: Option<String>,
    pub centuries: Vec<u32>,
}

fn parse_century(raw: &str) -> Result<u32, QueryError> {
    raw.parse::<u32>()
        .ok()
        .filter(|c| *c > 0)
        .ok_or_else(|| QueryError::InvalidCentury(raw.to_string()))
}

impl Filters {
    /// Unknown values are dropped rather than rejected.
    pub fn from_query(params: &QueryParams) -> Self {
        let sex = params.get(SEX_KEY).and_then(|raw| raw.parse::<Sex>().ok());

        let query = params
            .get(QUERY_KEY)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let centuries = params
            .get_all(CENTURIES_KEY)
            .filter_map(|raw| match parse_century(raw) {
                Ok(century) => Some(century),
                Err(e) => {
                    log::debug!("ignoring centuries parameter: {}", e);
                    None
                }
            })
            .collect();

        Self { sex, query, centuries }
    }

    pub fn is_empty(&self) -> bool {
        self.sex.is_none() && self.query.is_none() && self.centuries.is_empty()
    }

    pub fn matches(&self, person: &Person) -> bool {
        if let Some(sex) = self.sex {
            if person.sex != sex {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = [Some(&person.name), person.mother_name.as_ref(), person.father_name.as_ref()]
                .into_iter()
                .flatten()
                .any(|text| text.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        self.centuries.is_empty() || self.centuries.contains(&person.birth_century())
    }

    pub fn apply<'a>(&self, people: &'a [Person]) -> Vec<&'a Person> {
        people.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn has_century(&self, century: u32) -> bool {
        self.centuries.contains(&century)
    }

    /// Untrimmed contents of the name box
    pub fn query_text(params: &QueryParams) -> String {
        params.get(QUERY_KEY).unwrap_or_default().to_string()
    }

    /// Search string for the sex tabs; `None` is the "All" tab
    pub fn sex_search(params: &QueryParams, sex: Option<Sex>) -> String {
        let update = match sex {
            Some(sex) => ParamUpdate::set(sex.as_str()),
            None => ParamUpdate::Remove,
        };
        params.search_with(&[(SEX_KEY, update)])
    }

    /// Search string after typing into the name box
    pub fn query_search(params: &QueryParams, text: &str) -> String {
        let update = if text.is_empty() {
            ParamUpdate::Remove
        } else {
            ParamUpdate::set(text)
        };
        params.search_with(&[(QUERY_KEY, update)])
    }

    /// Search string that adds `century` when absent and removes it when present
    pub fn century_toggle_search(params: &QueryParams, century: u32) -> String {
        let mut centuries = Self::from_query(params).centuries;

        if centuries.contains(&century) {
            centuries.retain(|c| *c != century);
        } else {
            centuries.push(century);
        }
        let values = centuries.iter().map(u32::to_string).collect();
        params.search_with(&[(CENTURIES_KEY, ParamUpdate::SetMany(values))])
    }

    /// Search string for the "All" century button
    pub fn all_centuries_search(params: &QueryParams) -> String {
        params.search_with(&[(CENTURIES_KEY, ParamUpdate::Remove)])
    }

    /// Search string for "Reset all filters"; sorting is kept
    pub fn reset_search(params: &QueryParams) -> String {
        params.search_with(&[
            (SEX_KEY, ParamUpdate::Remove),
            (QUERY_KEY, ParamUpdate::Remove),
            (CENTURIES_KEY, ParamUpdate::Remove),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_person;

    fn people() -> Vec<Person> {
        let mut anna = make_person("Anna Haverbeke", Sex::Female, 1766);
        anna.father_name = Some("Pieter Haverbeke".to_string());
        vec![
            make_person("Pieter Haverbeke", Sex::Male, 1602),
            anna,
            make_person("Emile Haverbeke", Sex::Male, 1877),
            make_person("Maria de Rycke", Sex::Female, 1683),
        ]
    }

    fn names(rows: Vec<&Person>) -> Vec<&str> {
        rows.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let people = people();
        let filters = Filters::from_query(&QueryParams::default());
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&people).len(), people.len());
    }

    #[test]
    fn test_sex_filter() {
        let people = people();
        let filters = Filters::from_query(&QueryParams::parse("sex=f"));
        assert_eq!(names(filters.apply(&people)), vec!["Anna Haverbeke", "Maria de Rycke"]);
    }

    #[test]
    fn test_query_matches_parents_case_insensitive() {
        let people = people();
        let filters = Filters::from_query(&QueryParams::parse("query=PIETER"));
        assert_eq!(names(filters.apply(&people)), vec!["Pieter Haverbeke", "Anna Haverbeke"]);
    }

    #[test]
    fn test_blank_query_ignored() {
        let filters = Filters::from_query(&QueryParams::parse("query=+++"));
        assert!(filters.query.is_none());
    }

    #[test]
    fn test_centuries_filter() {
        let people = people();
        let filters = Filters::from_query(&QueryParams::parse("centuries=17&centuries=19"));
        assert_eq!(names(filters.apply(&people)), vec!["Pieter Haverbeke", "Emile Haverbeke", "Maria de Rycke"]);
    }

    #[test]
    fn test_garbage_values_ignored() {
        let filters = Filters::from_query(&QueryParams::parse("sex=x&centuries=abc&centuries=0&centuries=18"));
        assert_eq!(filters.sex, None);
        assert_eq!(filters.centuries, vec![18]);
    }

    #[test]
    fn test_century_toggle() {
        let params = QueryParams::parse("sort=name&centuries=17");
        assert_eq!(Filters::century_toggle_search(&params, 18), "sort=name&centuries=17&centuries=18");
        assert_eq!(Filters::century_toggle_search(&params, 17), "sort=name");
    }

    #[test]
    fn test_century_toggle_matches_parsed_value() {
        let params = QueryParams::parse("centuries=%2B18&sort=name");
        assert!(Filters::from_query(&params).has_century(18));
        assert_eq!(Filters::century_toggle_search(&params, 18), "sort=name");

        let params = QueryParams::parse("centuries=018&centuries=junk");
        assert_eq!(Filters::century_toggle_search(&params, 17), "centuries=18&centuries=17");
    }

    #[test]
    fn test_sex_and_query_search() {
        let params = QueryParams::parse("sex=m&sort=born");
        assert_eq!(Filters::sex_search(&params, Some(Sex::Female)), "sex=f&sort=born");
        assert_eq!(Filters::sex_search(&params, None), "sort=born");
        assert_eq!(Filters::query_search(&params, "van der"), "sex=m&sort=born&query=van+der");
        assert_eq!(Filters::query_search(&QueryParams::parse("query=a"), ""), "");
        assert_eq!(Filters::query_text(&QueryParams::parse("query=van+")), "van ");
    }

    #[test]
    fn test_reset_keeps_sort() {
        let params = QueryParams::parse("sex=m&sort=born&order=desc&query=a&centuries=16");
        assert_eq!(Filters::reset_search(&params), "sort=born&order=desc");
        assert_eq!(Filters::all_centuries_search(&params), "sex=m&sort=born&order=desc&query=a");
    }
}

//! People Query
//!
//! Pure rules behind the people table: query-string state, sort cycling,
//! filters, parent resolution and route parsing. Nothing in here touches
//! the DOM or `window.location`; callers pass the URL state in explicitly.

mod error;
mod filter;
mod lineage;
mod person;
mod query;
mod route;
mod sort;
mod table;

pub use error::QueryError;
pub use filter::{Filters, CENTURIES};
pub use lineage::{is_selected, resolve_parent, NameIndex, ParentCell, NO_PARENT_PLACEHOLDER};
pub use person::{Person, Sex};
pub use query::{ParamUpdate, QueryParams};
pub use route::{person_href, Route};
pub use sort::{sort_people, SortDirection, SortField, SortIcon, SortState};
pub use table::{table_rows, TableRow, PARENT_COLUMNS};

/// Rows to display for the given URL state: filtered first, then ordered.
pub fn visible_people<'a>(people: &'a [Person], params: &QueryParams) -> Vec<&'a Person> {
    let filtered = Filters::from_query(params).apply(people);
    sort_people(filtered, SortState::from_query(params))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_person;

    #[test]
    fn test_visible_people_filters_then_sorts() {
        let people = vec![
            make_person("Carl", Sex::Male, 1820),
            make_person("Anna", Sex::Female, 1790),
            make_person("Bert", Sex::Male, 1700),
        ];
        let params = QueryParams::parse("?sex=m&sort=born&order=desc");

        let names: Vec<&str> = visible_people(&people, &params)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Carl", "Bert"]);
    }

    #[test]
    fn test_empty_list_has_no_rows_but_all_columns() {
        let rows = visible_people(&[], &QueryParams::parse("sort=name&order"));
        assert!(rows.is_empty());

        let labels: Vec<&str> = SortField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Name", "Sex", "Born", "Died"]);
    }

    #[test]
    fn test_visible_people_without_params_keeps_source_order() {
        let people = vec![
            make_person("Carl", Sex::Male, 1820),
            make_person("Anna", Sex::Female, 1790),
        ];
        let rows = visible_people(&people, &QueryParams::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Carl");
    }
}

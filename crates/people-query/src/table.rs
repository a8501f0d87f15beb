//! Table Rows
//!
//! Everything a table row displays, derived in one pass from the loaded
//! list and the URL state.

use crate::{is_selected, visible_people, NameIndex, ParentCell, Person, QueryParams};

/// Headers after the sortable columns
pub const PARENT_COLUMNS: [&str; 2] = ["Mother", "Father"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    pub person: &'a Person,
    pub mother: ParentCell<'a>,
    pub father: ParentCell<'a>,
    pub selected: bool,
}

/// Visible rows with parents resolved against the whole of `people`
pub fn table_rows<'a>(
    people: &'a [Person],
    params: &QueryParams,
    selected_slug: Option<&str>,
) -> Vec<TableRow<'a>> {
    let index = NameIndex::new(people);

    visible_people(people, params)
        .into_iter()
        .map(|person| TableRow {
            person,
            mother: index.mother_of(person),
            father: index.father_of(person),
            selected: is_selected(person, selected_slug),
        })
        .collect()
}

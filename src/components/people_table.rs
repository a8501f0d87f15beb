//! People Table Component
//!
//! Sortable table of people. Every value here is derived from the inputs
//! on each render; the component keeps no state of its own.

use leptos::prelude::*;
use people_query::{
    person_href, table_rows, ParentCell, QueryParams, SortField, SortState, NO_PARENT_PLACEHOLDER,
    PARENT_COLUMNS,
};

use crate::components::{Link, PersonLink};
use crate::context::use_app_context;
use crate::models::Person;

/// Row class when the route selects this person
const SELECTED_ROW_CLASS: &str = "has-background-warning";

/// Table of `people` after applying the filters and sort in `params`.
/// Parent names resolve against the whole of `people`.
#[component]
pub fn PeopleTable(
    people: Vec<Person>,
    params: QueryParams,
    selected: Option<String>,
) -> impl IntoView {
    let body = table_rows(&people, &params, selected.as_deref())
        .into_iter()
        .map(|row| {
            let person = row.person;
            let mother = parent_cell(row.mother);
            let father = parent_cell(row.father);
            let row_class = if row.selected { SELECTED_ROW_CLASS } else { "" };

            view! {
                <tr data-cy="person" class=row_class>
                    <td><PersonLink person=person.clone() /></td>
                    <td>{person.sex.as_str()}</td>
                    <td>{person.born}</td>
                    <td>{person.died}</td>
                    <td>{mother}</td>
                    <td>{father}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table data-cy="peopleTable" class="table is-striped is-hoverable is-narrow is-fullwidth">
            <thead>
                <tr>
                    {SortField::ALL
                        .into_iter()
                        .map(|field| view! { <SortHeader field=field params=params.clone() /> })
                        .collect_view()}
                    {PARENT_COLUMNS
                        .into_iter()
                        .map(|label| view! { <th>{label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

/// Column header cycling its own sort state on click
#[component]
fn SortHeader(field: SortField, params: QueryParams) -> impl IntoView {
    let ctx = use_app_context();
    let icon = SortState::from_query(&params).icon(field);
    let href = person_href(&ctx.base_path(), None, &SortState::next_search(&params, field));
    let link_class = String::new();

    view! {
        <th>
            <span class="is-flex is-flex-wrap-nowrap">
                {field.label()}
                <Link href=href class=link_class>
                    <span class="icon">
                        <i class=icon.class_name() />
                    </span>
                </Link>
            </span>
        </th>
    }
}

fn parent_cell(cell: ParentCell<'_>) -> AnyView {
    match cell {
        ParentCell::Placeholder => NO_PARENT_PLACEHOLDER.into_any(),
        ParentCell::Link(parent) => view! { <PersonLink person=parent.clone() /> }.into_any(),
        ParentCell::Unresolved(name) => name.to_string().into_any(),
    }
}

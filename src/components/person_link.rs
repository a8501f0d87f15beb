//! Person Link Component
//!
//! Name of a person linking to their row, keeping the current filters.

use leptos::prelude::*;
use people_query::person_href;

use crate::components::Link;
use crate::context::use_app_context;
use crate::models::{Person, Sex};

#[component]
pub fn PersonLink(person: Person) -> impl IntoView {
    let ctx = use_app_context();
    let slug = person.slug.clone();

    let href = Signal::derive(move || {
        let search = ctx.params().to_search_string();
        person_href(&ctx.base_path(), Some(&slug), &search)
    });
    let class = if person.sex == Sex::Female { "has-text-danger" } else { "" }.to_string();

    view! {
        <Link href=href class=class>
            {person.name}
        </Link>
    }
}

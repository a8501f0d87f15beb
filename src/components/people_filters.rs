//! People Filters Component
//!
//! Filter panel next to the table. All state is read from and written to
//! the URL, so filters survive reloads and back/forward navigation.

use leptos::prelude::*;
use people_query::{person_href, Filters, QueryParams, Sex, CENTURIES};

use crate::components::Link;
use crate::context::{use_app_context, AppContext};

/// Href on the current page with the search replaced
fn href_with(ctx: AppContext, search: impl FnOnce(&QueryParams) -> String) -> String {
    let route = ctx.route();
    let search = search(&ctx.params());
    person_href(&ctx.base_path(), route.selected_slug(), &search)
}

#[component]
fn SexTab(label: &'static str, sex: Option<Sex>) -> impl IntoView {
    let ctx = use_app_context();
    let href = Signal::derive(move || href_with(ctx, |params| Filters::sex_search(params, sex)));
    let class = Signal::derive(move || {
        let active = Filters::from_query(&ctx.params()).sex == sex;
        if active { "is-active".to_string() } else { String::new() }
    });

    view! { <Link href=href class=class>{label}</Link> }
}

#[component]
fn CenturyButton(century: u32) -> impl IntoView {
    let ctx = use_app_context();
    let href = Signal::derive(move || href_with(ctx, |params| Filters::century_toggle_search(params, century)));
    let class = Signal::derive(move || {
        if Filters::from_query(&ctx.params()).has_century(century) {
            "button mr-1 is-info".to_string()
        } else {
            "button mr-1".to_string()
        }
    });

    view! {
        <span data-cy="century">
            <Link href=href class=class>{century}</Link>
        </span>
    }
}

#[component]
pub fn PeopleFilters() -> impl IntoView {
    let ctx = use_app_context();

    let all_centuries_href = Signal::derive(move || href_with(ctx, Filters::all_centuries_search));
    let all_centuries_class = Signal::derive(move || {
        if Filters::from_query(&ctx.params()).centuries.is_empty() {
            "button is-success".to_string()
        } else {
            "button is-success is-outlined".to_string()
        }
    });
    let reset_href = Signal::derive(move || href_with(ctx, Filters::reset_search));
    let reset_class = "button is-link is-outlined is-fullwidth".to_string();

    // Typing replaces the history entry so Back skips per-keystroke states
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        let href = href_with(ctx, |params| Filters::query_search(params, &text));
        ctx.replace(&href);
    };

    view! {
        <nav class="panel">
            <p class="panel-heading">"Filters"</p>

            <p class="panel-tabs" data-cy="SexFilter">
                <SexTab label="All" sex=None />
                <SexTab label="Male" sex=Some(Sex::Male) />
                <SexTab label="Female" sex=Some(Sex::Female) />
            </p>

            <div class="panel-block">
                <p class="control has-icons-left">
                    <input
                        data-cy="NameFilter"
                        type="search"
                        class="input"
                        placeholder="Search"
                        prop:value=move || Filters::query_text(&ctx.params())
                        on:input=on_input
                    />
                    <span class="icon is-left">
                        <i class="fas fa-search" aria-hidden="true" />
                    </span>
                </p>
            </div>

            <div class="panel-block">
                <div class="level is-flex-grow-1 is-mobile" data-cy="CenturyFilter">
                    <div class="level-left">
                        {CENTURIES
                            .into_iter()
                            .map(|century| view! { <CenturyButton century=century /> })
                            .collect_view()}
                    </div>
                    <div class="level-right ml-4">
                        <span data-cy="centuryALL">
                            <Link href=all_centuries_href class=all_centuries_class>"All"</Link>
                        </span>
                    </div>
                </div>
            </div>

            <div class="panel-block">
                <Link href=reset_href class=reset_class>
                    "Reset all filters"
                </Link>
            </div>
        </nav>
    }
}

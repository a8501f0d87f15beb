//! People Page Component
//!
//! Loads the person list once and lays out filters and table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use people_query::{visible_people, Filters};

use crate::commands;
use crate::components::{Loader, PeopleFilters, PeopleTable};
use crate::context::use_app_context;
use crate::models::LoadStatus;
use crate::store::{store_set_failed, store_set_people, use_people_store, PeopleStateStoreFields};

#[component]
pub fn PeoplePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_people_store();

    // Load on mount
    Effect::new(move |_| {
        let url = ctx.people_url();
        spawn_local(async move {
            match commands::list_people(&url).await {
                Ok(people) => {
                    log::info!("Loaded {} people", people.len());
                    store_set_people(&store, people);
                }
                Err(e) => {
                    log::error!("Failed to load people from {}: {}", url, e);
                    store_set_failed(&store, e.to_string());
                }
            }
        });
    });

    // Re-derived on every navigation
    let table = move || {
        let people = store.people().get();
        let params = ctx.params();
        let selected = ctx.route().selected_slug().map(str::to_string);
        let no_matches = !Filters::from_query(&params).is_empty()
            && visible_people(&people, &params).is_empty();

        view! {
            {no_matches.then(|| view! {
                <p>"There are no people matching the current search criteria"</p>
            })}
            <PeopleTable people=people params=params selected=selected />
        }
    };

    let content = move || match store.status().get() {
        LoadStatus::Loading => view! { <Loader /> }.into_any(),
        LoadStatus::Failed(reason) => view! {
            <p data-cy="peopleLoadingError" class="has-text-danger" title=reason>
                "Something went wrong"
            </p>
        }
        .into_any(),
        LoadStatus::Loaded if store.people().with(|people| people.is_empty()) => view! {
            <p data-cy="noPeopleMessage">"There are no people on the server"</p>
        }
        .into_any(),
        LoadStatus::Loaded => view! {
            <div class="columns is-desktop is-flex-direction-row-reverse">
                <div class="column is-7-tablet is-narrow-desktop">
                    <PeopleFilters />
                </div>
                <div class="column">
                    <div class="box table-container">{table}</div>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <h1 class="title">"People Page"</h1>
        <div class="block">{content}</div>
    }
}

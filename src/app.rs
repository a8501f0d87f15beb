//! People Table App
//!
//! Provides context and picks the page for the current path.

use leptos::prelude::*;
use people_query::Route;
use reactive_stores::Store;

use crate::components::PeoplePage;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PeopleState;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Home,
    People,
    NotFound,
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::People { .. } => Page::People,
            Route::NotFound => Page::NotFound,
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    ctx.bind_popstate();

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(PeopleState::default()));

    // Only a change of page remounts; slug and query changes stay inside it
    let page = Memo::new(move |_| Page::from(&ctx.route()));

    let content = move || {
        let page = page.get();
        log::debug!("rendering {:?}", page);
        match page {
            Page::Home => view! { <h1 class="title">"Home Page"</h1> }.into_any(),
            Page::People => view! { <PeoplePage /> }.into_any(),
            Page::NotFound => view! { <h1 class="title">"Page not found"</h1> }.into_any(),
        }
    };

    view! {
        <div data-cy="app">
            <main class="section">
                <div class="container">{content}</div>
            </main>
        </div>
    }
}

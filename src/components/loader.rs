use leptos::prelude::*;

/// Spinner shown while the person list is loading
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="Loader" data-cy="loader">
            <div class="Loader__content" />
        </div>
    }
}

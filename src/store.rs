//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list is
//! written once by the loader and only read afterwards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LoadStatus, Person};

/// Loaded people plus request status
#[derive(Clone, Debug, Default, Store)]
pub struct PeopleState {
    /// Every person returned by the API, in server order
    pub people: Vec<Person>,
    pub status: LoadStatus,
}

/// Type alias for the store
pub type PeopleStore = Store<PeopleState>;

/// Get the people store from context
pub fn use_people_store() -> PeopleStore {
    expect_context::<PeopleStore>()
}

/// Record a finished load
pub fn store_set_people(store: &PeopleStore, people: Vec<Person>) {
    *store.people().write() = people;
    *store.status().write() = LoadStatus::Loaded;
}

/// Record a failed load
pub fn store_set_failed(store: &PeopleStore, message: String) {
    *store.status().write() = LoadStatus::Failed(message);
}

//! UI Components
//!
//! Reusable Leptos components.

mod link;
mod loader;
mod people_filters;
mod people_page;
mod people_table;
mod person_link;

pub use link::Link;
pub use loader::Loader;
pub use people_filters::PeopleFilters;
pub use people_page::PeoplePage;
pub use people_table::PeopleTable;
pub use person_link::PersonLink;

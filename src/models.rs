//! Frontend Models
//!
//! Person records come from `people-query`; this adds UI-only state.

pub use people_query::{Person, Sex};

/// Progress of the person list request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

//! Sort-State Controller
//!
//! The active sort lives in the URL: `sort=<field>` plus an `order` flag
//! whose mere presence means descending. Clicking a column header cycles
//! that column through unsorted → ascending → descending → unsorted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{ParamUpdate, Person, QueryError, QueryParams};

pub(crate) const SORT_KEY: &str = "sort";
pub(crate) const ORDER_KEY: &str = "order";
const ORDER_DESC: &str = "desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Sex,
    Born,
    Died,
}

impl SortField {
    /// Sortable columns in display order
    pub const ALL: [SortField; 4] = [SortField::Name, SortField::Sex, SortField::Born, SortField::Died];

    /// Value carried by the `sort` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Sex => "sex",
            SortField::Born => "born",
            SortField::Died => "died",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Sex => "Sex",
            SortField::Born => "Born",
            SortField::Died => "Died",
        }
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Sex => a.sex.as_str().cmp(b.sex.as_str()),
            SortField::Born => a.born.cmp(&b.born),
            SortField::Died => a.died.cmp(&b.died),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Neutral = 0,
    Ascending = 1,
    Descending = 2,
}

/// Font Awesome classes, indexed by `SortIcon` discriminant
const SORT_ICON_CLASSES: [&str; 3] = ["fas fa-sort", "fas fa-sort-up", "fas fa-sort-down"];

impl SortIcon {
    pub fn class_name(self) -> &'static str {
        SORT_ICON_CLASSES[self as usize]
    }
}

/// Sort state derived from the URL; never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    field: Option<SortField>,
    direction: Option<SortDirection>,
}

impl SortState {
    /// Read `sort` / `order`. An unknown field means no active sort,
    /// whatever `order` says.
    pub fn from_query(params: &QueryParams) -> Self {
        let field = params.get(SORT_KEY).and_then(|raw| match raw.parse::<SortField>() {
            Ok(field) => Some(field),
            Err(e) => {
                log::debug!("ignoring sort parameter: {}", e);
                None
            }
        });

        let direction = field.map(|_| {
            if params.has(ORDER_KEY) {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            }
        });

        Self { field, direction }
    }

    pub fn field(&self) -> Option<SortField> {
        self.field
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    pub fn is_active(&self, field: SortField) -> bool {
        self.field == Some(field)
    }

    pub fn icon(&self, field: SortField) -> SortIcon {
        if !self.is_active(field) {
            return SortIcon::Neutral;
        }
        match self.direction {
            Some(SortDirection::Descending) => SortIcon::Descending,
            _ => SortIcon::Ascending,
        }
    }

    /// Search string to navigate to when the header of `clicked` is pressed.
    /// Keys other than `sort` / `order` are carried over untouched.
    pub fn next_search(params: &QueryParams, clicked: SortField) -> String {
        let state = Self::from_query(params);

        let updates = match (state.is_active(clicked), state.direction) {
            (true, Some(SortDirection::Ascending)) => {
                vec![(ORDER_KEY, ParamUpdate::set(ORDER_DESC))]
            }
            (true, _) => vec![(SORT_KEY, ParamUpdate::Remove), (ORDER_KEY, ParamUpdate::Remove)],
            (false, _) => vec![
                (SORT_KEY, ParamUpdate::set(clicked.as_str())),
                (ORDER_KEY, ParamUpdate::Remove),
            ],
        };

        params.search_with(&updates)
    }
}

/// Order rows by the active field. Stable: ties keep their incoming order
/// in both directions. With no active sort the rows are returned as-is.
pub fn sort_people(mut rows: Vec<&Person>, state: SortState) -> Vec<&Person> {
    let Some(field) = state.field else {
        return rows;
    };
    let descending = state.direction == Some(SortDirection::Descending);

    rows.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}

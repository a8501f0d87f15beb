//! Person record as published by the people API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Token used both in the JSON payload and in the `sex` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(QueryError::UnknownSex(other.to_string())),
        }
    }
}

/// One individual with lineage references by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub slug: String,
    pub sex: Sex,
    pub born: u32,
    #[serde(default)]
    pub died: Option<u32>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
}

impl Person {
    /// Century of birth, 1-based (1801..=1900 is the 19th)
    pub fn birth_century(&self) -> u32 {
        self.born.div_ceil(100)
    }
}

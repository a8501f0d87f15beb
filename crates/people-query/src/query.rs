//! Query Parameters
//!
//! Immutable view of a URL search string. Pairs keep their original order
//! so rewriting one key leaves the rest of the URL untouched.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in `application/x-www-form-urlencoded` components
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// How `search_with` rewrites a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamUpdate {
    /// Drop every occurrence of the key
    Remove,
    /// Keep exactly one occurrence with this value
    Set(String),
    /// Replace every occurrence with one pair per value
    SetMany(Vec<String>),
}

impl ParamUpdate {
    pub fn set(value: impl Into<String>) -> Self {
        ParamUpdate::Set(value.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a search string, with or without the leading `?`
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = search
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in URL order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply updates and return the resulting params.
    ///
    /// `Set` overwrites the first occurrence in place and drops the rest,
    /// appending when the key is new. `SetMany` removes the key and appends
    /// one pair per value.
    pub fn with(&self, updates: &[(&str, ParamUpdate)]) -> Self {
        let mut pairs = self.pairs.clone();

        for (key, update) in updates {
            match update {
                ParamUpdate::Remove => pairs.retain(|(k, _)| k != key),
                ParamUpdate::Set(value) => {
                    match pairs.iter().position(|(k, _)| k == key) {
                        Some(first) => {
                            pairs[first].1 = value.clone();
                            let mut index = 0;
                            pairs.retain(|(k, _)| {
                                let keep = k != key || index == first;
                                index += 1;
                                keep
                            });
                        }
                        None => pairs.push((key.to_string(), value.clone())),
                    }
                }
                ParamUpdate::SetMany(values) => {
                    pairs.retain(|(k, _)| k != key);
                    pairs.extend(values.iter().map(|v| (key.to_string(), v.clone())));
                }
            }
        }

        Self { pairs }
    }

    /// Apply updates and serialize, without the leading `?`
    pub fn search_with(&self, updates: &[(&str, ParamUpdate)]) -> String {
        self.with(updates).to_search_string()
    }

    /// Serialize without the leading `?`
    pub fn to_search_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, FORM_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

//! Route
//!
//! `/` is the home page, `/people` the table and `/people/:slug` the table
//! with one row selected.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

const PEOPLE_SEGMENT: &str = "people";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    People { selected: Option<String> },
    NotFound,
}

impl Route {
    /// Match a pathname after stripping `base_path` (e.g. `/app`).
    pub fn parse(pathname: &str, base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        let path = match pathname.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => return Route::NotFound,
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            [PEOPLE_SEGMENT] => Route::People { selected: None },
            [PEOPLE_SEGMENT, slug] => Route::People {
                selected: Some(percent_decode_str(slug).decode_utf8_lossy().into_owned()),
            },
            _ => Route::NotFound,
        }
    }

    pub fn selected_slug(&self) -> Option<&str> {
        match self {
            Route::People { selected } => selected.as_deref(),
            _ => None,
        }
    }
}

/// Path (plus search) of the table page, optionally with a row selected.
/// `search` is given without the leading `?` and may be empty.
pub fn person_href(base_path: &str, slug: Option<&str>, search: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let mut href = format!("{}/{}", base, PEOPLE_SEGMENT);
    if let Some(slug) = slug {
        href.push('/');
        href.extend(utf8_percent_encode(slug, PATH_SEGMENT));
    }
    if !search.is_empty() {
        href.push('?');
        href.push_str(search);
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("/people", ""), Route::People { selected: None });
        assert_eq!(Route::parse("/people/", ""), Route::People { selected: None });
        assert_eq!(
            Route::parse("/people/jane-1", "").selected_slug(),
            Some("jane-1")
        );
        assert_eq!(Route::parse("/people/a/b", ""), Route::NotFound);
        assert_eq!(Route::parse("/elsewhere", ""), Route::NotFound);
    }

    #[test]
    fn test_parse_with_base_path() {
        assert_eq!(
            Route::parse("/app/people/x", "/app/").selected_slug(),
            Some("x")
        );
        assert_eq!(Route::parse("/app", "/app"), Route::Home);
        assert_eq!(Route::parse("/apppeople", "/app"), Route::NotFound);
        assert_eq!(Route::parse("/people/x", "/app"), Route::NotFound);
    }

    #[test]
    fn test_parse_decodes_slug() {
        assert_eq!(
            Route::parse("/people/jan%20z", "").selected_slug(),
            Some("jan z")
        );
    }

    #[test]
    fn test_person_href() {
        assert_eq!(person_href("", None, ""), "/people");
        assert_eq!(person_href("/", Some("jane-1"), "sort=name"), "/people/jane-1?sort=name");
        assert_eq!(person_href("/app", Some("a b"), ""), "/app/people/a%20b");
    }
}

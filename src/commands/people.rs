//! People Commands
//!
//! Fetches the person list over HTTP.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{js_message, LoadError};
use crate::models::Person;

pub async fn list_people(url: &str) -> Result<Vec<Person>, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Network(js_message(&e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Network(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| LoadError::Network(js_message(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response.text().map_err(|e| LoadError::Body(js_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(js_message(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".to_string()))?;

    parse_people(&body)
}

/// Decode the API payload: a JSON array of person records
pub fn parse_people(body: &str) -> Result<Vec<Person>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    #[test]
    fn test_parse_people() {
        let body = r#"[
            {"name": "Carolus Haverbeke", "sex": "m", "born": 1832, "died": 1905,
             "fatherName": "Carel Haverbeke", "motherName": "Maria van Brussel",
             "slug": "carolus-haverbeke-1832"},
            {"name": "Emma de Milliano", "sex": "f", "born": 1876, "died": 1956,
             "fatherName": null, "motherName": null, "slug": "emma-de-milliano-1876"}
        ]"#;
        let people = parse_people(body).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].sex, Sex::Female);
        assert!(people[1].father_name.is_none());
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_people("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(matches!(parse_people(r#"{"error": "nope"}"#), Err(LoadError::Decode(_))));
        assert!(matches!(parse_people("<html>"), Err(LoadError::Decode(_))));
    }
}

//! Content records and their JSON parsing

use crate::error::ContentError;
use folio_common::{non_empty, Locale};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A value given per locale, either side optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized<T> {
    /// English value
    pub en: Option<T>,
    /// Spanish value
    pub es: Option<T>,
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self { en: None, es: None }
    }
}

impl<T> Localized<T> {
    /// Creates a mapping from both sides.
    pub const fn new(en: Option<T>, es: Option<T>) -> Self {
        Self { en, es }
    }

    /// Value for `locale`.
    pub const fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::En => self.en.as_ref(),
            Locale::Es => self.es.as_ref(),
        }
    }
}

impl Localized<String> {
    /// Non-empty text for `locale`.
    pub fn text(&self, locale: Locale) -> Option<&str> {
        non_empty(self.get(locale).map(String::as_str))
    }

    /// Non-empty text for `locale`, else the other locale's.
    pub fn text_or_other(&self, locale: Locale) -> Option<&str> {
        self.text(locale).or_else(|| self.text(locale.other()))
    }
}

/// Contents of `about.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Paragraphs per locale
    pub paragraphs: Localized<Vec<String>>,
}

impl AboutContent {
    /// Paragraphs for `locale`, `None` when absent or empty.
    pub fn paragraphs_for(&self, locale: Locale) -> Option<&[String]> {
        self.paragraphs
            .get(locale)
            .map(Vec::as_slice)
            .filter(|paragraphs| !paragraphs.is_empty())
    }
}

/// Contents of `<projectId>.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectContent {
    /// Card title
    pub title: Localized<String>,
    /// Card genre line
    pub genre: Localized<String>,
    /// Card description
    pub description: Localized<String>,
    /// Call-to-action URL
    pub link: Localized<String>,
}

/// Parses a content file, tagging failures with its path.
pub fn parse_record<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|source| ContentError::Malformed {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::test_utils::content_fixtures;

    #[test]
    fn test_about_paragraphs_per_locale() {
        let about: AboutContent = parse_record("about.json", content_fixtures::about_json()).unwrap();
        assert_eq!(about.paragraphs_for(Locale::En).unwrap(), ["A", "B"]);
        assert_eq!(about.paragraphs_for(Locale::Es).unwrap(), ["C", "D"]);
    }

    #[test]
    fn test_empty_paragraph_list_is_absent() {
        let about: AboutContent =
            parse_record("about.json", r#"{"paragraphs":{"en":[],"es":null}}"#).unwrap();
        assert!(about.paragraphs_for(Locale::En).is_none());
        assert!(about.paragraphs_for(Locale::Es).is_none());
    }

    #[test]
    fn test_link_falls_back_to_other_locale() {
        let project: ProjectContent =
            parse_record("drift.json", content_fixtures::project_json_english_link_only()).unwrap();
        assert_eq!(project.link.text_or_other(Locale::Es), Some("x"));
        assert_eq!(project.link.text(Locale::Es), None);
        assert_eq!(project.title.text(Locale::Es), Some("Deriva"));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let project: ProjectContent =
            parse_record("p.json", r#"{"title":{"en":"","es":"Hola"}}"#).unwrap();
        assert_eq!(project.title.text(Locale::En), None);
        assert_eq!(project.title.text_or_other(Locale::En), Some("Hola"));
        assert_eq!(project.genre, Localized::default());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let result = parse_record::<ProjectContent>("p.json", r#"{"title": 5}"#);
        assert!(matches!(result, Err(ContentError::Malformed { ref path, .. }) if path == "p.json"));

        let result = parse_record::<AboutContent>("about.json", "not json");
        assert!(result.is_err());
    }
}

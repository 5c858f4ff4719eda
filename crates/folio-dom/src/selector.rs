//! A closed selector language covering what the page contract needs.

use std::fmt::Write as _;

/// Element selector.
///
/// Renders to CSS for the browser and is matched directly by the
/// in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `.class`
    Class(String),
    /// `[name]`
    HasAttribute(String),
    /// `[name="value"]`
    AttributeEquals {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// Compound selector; every part must match the same element.
    All(Vec<Selector>),
    /// Selector group; any part may match.
    Any(Vec<Selector>),
}

/// What a selector needs to know about an element.
pub trait Matchable {
    /// Whether the element carries `class`.
    fn has_class(&self, class: &str) -> bool;
    /// Attribute value, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl Selector {
    /// `.class`
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// `[name]`
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::HasAttribute(name.into())
    }

    /// `[name="value"]`
    pub fn attribute_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AttributeEquals {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Elements matching any of the given classes.
    pub fn any_class<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Any(classes.into_iter().map(Self::class).collect())
    }

    /// Compound of `self` and `other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::All(mut parts) => {
                parts.push(other);
                Self::All(parts)
            }
            first => Self::All(vec![first, other]),
        }
    }

    /// Whether `element` matches.
    pub fn matches<M: Matchable + ?Sized>(&self, element: &M) -> bool {
        match self {
            Self::Class(class) => element.has_class(class),
            Self::HasAttribute(name) => element.attribute(name).is_some(),
            Self::AttributeEquals { name, value } => element.attribute(name) == Some(value.as_str()),
            Self::All(parts) => parts.iter().all(|part| part.matches(element)),
            Self::Any(parts) => parts.iter().any(|part| part.matches(element)),
        }
    }

    /// CSS rendering for `querySelectorAll`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        self.write_css(&mut css);
        css
    }

    fn write_css(&self, out: &mut String) {
        match self {
            Self::Class(class) => {
                let _ = write!(out, ".{class}");
            }
            Self::HasAttribute(name) => {
                let _ = write!(out, "[{name}]");
            }
            Self::AttributeEquals { name, value } => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                let _ = write!(out, "[{name}=\"{escaped}\"]");
            }
            Self::All(parts) => {
                for part in parts {
                    part.write_css(out);
                }
            }
            Self::Any(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    part.write_css(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Fake {
        classes: Vec<&'static str>,
        attributes: HashMap<&'static str, &'static str>,
    }

    impl Matchable for Fake {
        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attributes.get(name).copied()
        }
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(Selector::class("nav-tab").to_css(), ".nav-tab");
        assert_eq!(
            Selector::attribute("data-en")
                .and(Selector::attribute("data-es"))
                .to_css(),
            "[data-en][data-es]"
        );
        assert_eq!(
            Selector::class("nav-tab")
                .and(Selector::attribute_eq("data-section", "about"))
                .to_css(),
            ".nav-tab[data-section=\"about\"]"
        );
        assert_eq!(
            Selector::any_class(["project-card", "about-content"]).to_css(),
            ".project-card, .about-content"
        );
    }

    #[test]
    fn test_attribute_value_is_escaped() {
        let css = Selector::attribute_eq("data-section", "a\"b").to_css();
        assert_eq!(css, "[data-section=\"a\\\"b\"]");
    }

    #[test]
    fn test_matching() {
        let tab = Fake {
            classes: vec!["nav-tab", "active"],
            attributes: HashMap::from([("data-section", "games")]),
        };

        assert!(Selector::class("nav-tab").matches(&tab));
        assert!(Selector::class("nav-tab")
            .and(Selector::attribute_eq("data-section", "games"))
            .matches(&tab));
        assert!(!Selector::attribute_eq("data-section", "about").matches(&tab));
        assert!(Selector::any_class(["x", "active"]).matches(&tab));
        assert!(!Selector::attribute("data-en").matches(&tab));
    }
}

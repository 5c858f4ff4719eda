//! Configuration schema definitions using serde.

use folio_common::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Content file location.
    pub content: ContentConfig,
    /// Localization behavior.
    pub localization: LocalizationConfig,
    /// Tab navigation behavior.
    pub navigation: NavigationConfig,
    /// Class and attribute names the page exposes.
    pub dom: DomContract,
    /// Decorative page-load and hover behavior.
    pub decor: DecorConfig,
    /// Logging configuration.
    pub logging: LogConfig,
}

/// Where content files are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base path or URL content files are resolved against.
    pub base_url: String,
    /// Append a cache-busting token and no-cache headers to fetches.
    pub bypass_cache: bool,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Locale used when no preference has been stored.
    pub default_locale: Locale,
    /// Key of the persisted language preference.
    pub storage_key: String,
    /// Element ids of the about-section paragraph slots, in order.
    pub about_paragraph_ids: Vec<String>,
}

/// Tab navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Section shown when the page opens without a fragment.
    pub default_section: String,
    /// Delay before a startup fragment is applied, in milliseconds.
    pub deep_link_delay_ms: u64,
    /// Highest digit key that jumps straight to a tab.
    pub max_digit_shortcut: u8,
}

impl NavigationConfig {
    /// Deep link delay as a [`Duration`].
    pub const fn deep_link_delay(&self) -> Duration {
        Duration::from_millis(self.deep_link_delay_ms)
    }
}

/// Class and attribute names of the page's DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomContract {
    /// Class marking the active language control, tab and section.
    pub active_class: String,
    /// Class of language selector controls.
    pub language_button_class: String,
    /// Id prefix of language selector controls (`lang-` + locale code).
    pub language_button_prefix: String,
    /// Class of navigation tabs.
    pub tab_class: String,
    /// Class of content sections.
    pub section_class: String,
    /// Attribute on a tab naming the section it opens.
    pub section_attribute: String,
    /// Attribute identifying a project card.
    pub project_attribute: String,
    /// Class of a card's title element.
    pub project_title_class: String,
    /// Class of a card's genre element.
    pub project_genre_class: String,
    /// Class of a card's description element.
    pub project_description_class: String,
    /// Class of a card's generic call-to-action anchor.
    pub project_link_class: String,
    /// Class prefix of per-locale anchors (`project-link-` + locale code).
    pub project_link_locale_prefix: String,
}

impl DomContract {
    /// Id of the language control for `locale`.
    pub fn language_button_id(&self, locale: Locale) -> String {
        format!("{}{}", self.language_button_prefix, locale.code())
    }

    /// Class of the per-locale anchor for `locale`.
    pub fn project_link_class_for(&self, locale: Locale) -> String {
        format!("{}{}", self.project_link_locale_prefix, locale.code())
    }
}

/// Decorative behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    /// Class added to `<body>` once the page has fully loaded.
    pub body_loaded_class: String,
    /// Classes of elements that fade in after load.
    pub fade_in_targets: Vec<String>,
    /// Class that triggers the fade-in transition.
    pub fade_in_class: String,
    /// Delay between consecutive fade-ins, in milliseconds.
    pub fade_in_stagger_ms: u64,
    /// Classes of icons whose image swaps on hover.
    pub hover_icon_classes: Vec<String>,
    /// Image shown while hovered.
    pub hover_icon_src: String,
    /// Image shown otherwise.
    pub rest_icon_src: String,
}

impl DecorConfig {
    /// Fade-in delay for the element at `index`.
    pub fn fade_in_delay(&self, index: usize) -> Duration {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        Duration::from_millis(self.fade_in_stagger_ms.saturating_mul(index))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `folio_i18n=debug`.
    pub level: String,
}

//! Default values matching the published page.

use crate::schema::*;
use folio_common::Locale;

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: "content/".to_string(),
            bypass_cache: true,
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            storage_key: "preferred-language".to_string(),
            about_paragraph_ids: vec![
                "about-paragraph-1".to_string(),
                "about-paragraph-2".to_string(),
            ],
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_section: "interactive-fictions".to_string(),
            deep_link_delay_ms: 100,
            max_digit_shortcut: 5,
        }
    }
}

impl Default for DomContract {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            language_button_class: "lang-btn".to_string(),
            language_button_prefix: "lang-".to_string(),
            tab_class: "nav-tab".to_string(),
            section_class: "section".to_string(),
            section_attribute: "data-section".to_string(),
            project_attribute: "data-project".to_string(),
            project_title_class: "project-title".to_string(),
            project_genre_class: "project-genre".to_string(),
            project_description_class: "project-description".to_string(),
            project_link_class: "project-link".to_string(),
            project_link_locale_prefix: "project-link-".to_string(),
        }
    }
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            body_loaded_class: "fully-loaded".to_string(),
            fade_in_targets: vec![
                "project-card".to_string(),
                "about-content".to_string(),
                "contact-content".to_string(),
            ],
            fade_in_class: "fade-in".to_string(),
            fade_in_stagger_ms: 100,
            hover_icon_classes: vec![
                "fiverr-icon".to_string(),
                "fiverr-contact-icon".to_string(),
            ],
            hover_icon_src: "icons/fiverr-white.svg".to_string(),
            rest_icon_src: "icons/fiverr-black.svg".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

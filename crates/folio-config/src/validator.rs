//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::SiteConfig;
use tracing::warn;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem found.
    pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if config.content.base_url.trim().is_empty() {
            problems.push("content.base_url cannot be empty".to_string());
        }
        if config.localization.storage_key.trim().is_empty() {
            problems.push("localization.storage_key cannot be empty".to_string());
        }
        if config.localization.about_paragraph_ids.is_empty() {
            problems.push("localization.about_paragraph_ids needs at least one id".to_string());
        }
        if config.navigation.default_section.trim().is_empty() {
            problems.push("navigation.default_section cannot be empty".to_string());
        }
        if !(1..=9).contains(&config.navigation.max_digit_shortcut) {
            problems.push("navigation.max_digit_shortcut must be between 1 and 9".to_string());
        }

        let dom = &config.dom;
        for (field, value) in [
            ("dom.active_class", &dom.active_class),
            ("dom.language_button_class", &dom.language_button_class),
            ("dom.tab_class", &dom.tab_class),
            ("dom.section_class", &dom.section_class),
            ("dom.section_attribute", &dom.section_attribute),
            ("dom.project_attribute", &dom.project_attribute),
        ] {
            if value.trim().is_empty() {
                problems.push(format!("{field} cannot be empty"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            for problem in &problems {
                warn!("Invalid configuration: {}", problem);
            }
            Err(ConfigError::ValidationError(problems))
        }
    }
}

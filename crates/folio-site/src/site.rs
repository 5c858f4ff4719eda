//! Page lifecycle glue.

use crate::decor::Decor;
use folio_common::Scheduler;
use folio_config::{ConfigLoader, SiteConfig};
use folio_dom::{Dom, PreferenceStore};
use folio_i18n::{ContentSource, LocalizationManager};
use folio_nav::{KeyInput, SectionNavigator};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Configuration compiled into the browser build.
pub const EMBEDDED_CONFIG: &str = include_str!("../folio.yaml");

/// Parses [`EMBEDDED_CONFIG`], falling back to defaults when it is invalid.
pub fn embedded_config() -> SiteConfig {
    ConfigLoader::from_yaml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        warn!("Embedded configuration rejected, using defaults: {}", e);
        SiteConfig::default()
    })
}

/// The portfolio page's behavior.
pub struct Site<D: Dom> {
    dom: D,
    config: SiteConfig,
    scheduler: Rc<dyn Scheduler>,
    localization: LocalizationManager<D>,
    navigator: SectionNavigator<D>,
    decor: Decor<D>,
}

impl<D: Dom + Clone + 'static> Site<D> {
    /// Assembles the site over `dom`.
    pub fn new(
        dom: D,
        config: SiteConfig,
        source: Rc<dyn ContentSource>,
        store: Rc<dyn PreferenceStore>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let localization =
            LocalizationManager::new(dom.clone(), &config, source, store, Rc::clone(&scheduler));
        let navigator = SectionNavigator::new(dom.clone(), &config);
        let decor = Decor::new(dom.clone(), config.decor.clone(), Rc::clone(&scheduler));

        Self {
            dom,
            config,
            scheduler,
            localization,
            navigator,
            decor,
        }
    }

    /// Runs once the document is parsed.
    ///
    /// Applies the preferred language, activates the default section and
    /// defers any startup deep link by the configured delay.
    pub fn start(&self) {
        info!("Starting portfolio site");
        self.localization.initialize();

        if let Some(section) = self.navigator.initialize() {
            let navigator = self.navigator.clone();
            let delay = self.scheduler.sleep(self.config.navigation.deep_link_delay());
            self.scheduler.spawn(Box::pin(async move {
                delay.await;
                if !navigator.switch_to_section(section.as_str()) {
                    debug!("Deep link '{}' names no section", section);
                }
            }));
        }
    }

    /// Runs once every resource has loaded.
    pub fn on_load(&self) {
        self.decor.on_load();
    }

    /// Routes a click on a language control or a tab.
    ///
    /// Returns whether the host should suppress the default action.
    pub fn handle_click(&self, target: &D::Node) -> bool {
        let contract = &self.config.dom;
        if self.dom.has_class(target, &contract.language_button_class) {
            self.localization.handle_selector_click(target);
            false
        } else if self.dom.has_class(target, &contract.tab_class) {
            self.navigator.handle_tab_click(target);
            true
        } else {
            false
        }
    }

    /// Routes a key press. Returns whether the default action should be suppressed.
    pub fn handle_key(&self, input: &KeyInput) -> bool {
        self.navigator.handle_key(input)
    }

    /// Pointer entered a link holding a hover icon.
    pub fn hover_enter(&self, link: &D::Node) {
        self.decor.hover_enter(link);
    }

    /// Pointer left a link holding a hover icon.
    pub fn hover_leave(&self, link: &D::Node) {
        self.decor.hover_leave(link);
    }

    /// The localization manager.
    pub const fn localization(&self) -> &LocalizationManager<D> {
        &self.localization
    }

    /// The section navigator.
    pub const fn navigator(&self) -> &SectionNavigator<D> {
        &self.navigator
    }

    /// The active configuration.
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }
}

//! Section navigator

use crate::keyboard::{target_tab_index, KeyAction, KeyInput};
use folio_common::{parse_fragment, SectionId};
use folio_config::schema::{DomContract, NavigationConfig, SiteConfig};
use folio_dom::{Dom, Selector};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Keeps one tab and its section active and mirrors it into the URL fragment.
///
/// Handles are cheap clones of one shared state.
pub struct SectionNavigator<D: Dom> {
    inner: Rc<Inner<D>>,
}

impl<D: Dom> Clone for SectionNavigator<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<D: Dom> {
    dom: D,
    contract: DomContract,
    settings: NavigationConfig,
    current: RefCell<Option<SectionId>>,
}

impl<D: Dom> SectionNavigator<D> {
    /// Creates a navigator; nothing is activated until [`initialize`](Self::initialize).
    pub fn new(dom: D, config: &SiteConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                dom,
                contract: config.dom.clone(),
                settings: config.navigation.clone(),
                current: RefCell::new(None),
            }),
        }
    }

    /// Activates the default section.
    ///
    /// Returns the section named by the fragment the page was opened with,
    /// read before the default replaces it. The caller applies it later with
    /// [`switch_to_section`](Self::switch_to_section).
    pub fn initialize(&self) -> Option<SectionId> {
        let deep_link = self.startup_fragment();
        let default_section = self.inner.settings.default_section.clone();

        if self.switch_to_section(&default_section) {
            info!("Navigation initialized on section: {}", default_section);
        } else {
            info!("Default section '{}' not on page", default_section);
        }

        if let Some(section) = &deep_link {
            debug!("Deep link to '{}' pending", section);
        }
        deep_link
    }

    /// Section named by the current location fragment.
    pub fn startup_fragment(&self) -> Option<SectionId> {
        parse_fragment(&self.inner.dom.fragment()).map(SectionId::new)
    }

    /// The active section, once one has been activated.
    pub fn current_section(&self) -> Option<SectionId> {
        self.inner.current.borrow().clone()
    }

    /// Activates the tab and section for `id`.
    ///
    /// Unknown ids change nothing and return `false`.
    pub fn switch_to_section(&self, id: &str) -> bool {
        let dom = &self.inner.dom;
        let contract = &self.inner.contract;

        if id.is_empty() {
            return false;
        }

        let tab = dom.query_first(
            &Selector::class(&contract.tab_class)
                .and(Selector::attribute_eq(&contract.section_attribute, id)),
        );
        let (Some(tab), Some(section)) = (tab, dom.element_by_id(id)) else {
            debug!("No tab and section pair for '{}'", id);
            return false;
        };

        for node in dom.query_all(&Selector::any_class([
            contract.tab_class.as_str(),
            contract.section_class.as_str(),
        ])) {
            dom.remove_class(&node, &contract.active_class);
        }
        dom.add_class(&tab, &contract.active_class);
        dom.add_class(&section, &contract.active_class);
        dom.replace_fragment(id);

        *self.inner.current.borrow_mut() = Some(SectionId::new(id));
        debug!("Switched to section: {}", id);
        true
    }

    /// Activates the section named by a tab's section attribute.
    pub fn handle_tab_click(&self, tab: &D::Node) -> bool {
        self.inner
            .dom
            .attribute(tab, &self.inner.contract.section_attribute)
            .is_some_and(|section| self.switch_to_section(&section))
    }

    /// All tabs in page order.
    pub fn tabs(&self) -> Vec<D::Node> {
        self.inner
            .dom
            .query_all(&Selector::class(&self.inner.contract.tab_class))
    }

    /// Index of the tab carrying the active class.
    pub fn active_tab_index(&self) -> Option<usize> {
        let dom = &self.inner.dom;
        self.tabs()
            .iter()
            .position(|tab| dom.has_class(tab, &self.inner.contract.active_class))
    }

    /// Applies a keyboard shortcut.
    ///
    /// Returns whether the key was consumed, in which case the host should
    /// suppress its default action.
    pub fn handle_key(&self, input: &KeyInput) -> bool {
        if input.has_modifier() {
            return false;
        }

        let tabs = self.tabs();
        let action = target_tab_index(
            self.active_tab_index(),
            tabs.len(),
            input.key,
            self.inner.settings.max_digit_shortcut,
        );

        match action {
            KeyAction::Ignored => false,
            KeyAction::Consumed => true,
            KeyAction::Activate(index) => {
                if let Some(tab) = tabs.get(index) {
                    self.handle_tab_click(tab);
                }
                true
            }
        }
    }
}

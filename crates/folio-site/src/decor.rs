//! Decorative effects: load-time fade-in and hover icon swap.

use folio_common::Scheduler;
use folio_config::schema::DecorConfig;
use folio_dom::{Dom, Selector};
use std::rc::Rc;
use tracing::debug;

/// Applies the page's decorative effects.
pub struct Decor<D: Dom> {
    dom: D,
    config: DecorConfig,
    scheduler: Rc<dyn Scheduler>,
}

impl<D: Dom + Clone + 'static> Decor<D> {
    /// Creates the effects for `dom`.
    pub fn new(dom: D, config: DecorConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            dom,
            config,
            scheduler,
        }
    }

    /// Marks the body loaded and schedules the staggered fade-in.
    ///
    /// Returns the number of elements scheduled.
    pub fn on_load(&self) -> usize {
        if let Some(body) = self.dom.body() {
            self.dom.add_class(&body, &self.config.body_loaded_class);
        }

        let targets = self
            .dom
            .query_all(&Selector::any_class(self.config.fade_in_targets.iter().map(String::as_str)));
        for (index, element) in targets.iter().enumerate() {
            let dom = self.dom.clone();
            let element = element.clone();
            let class = self.config.fade_in_class.clone();
            let delay = self.scheduler.sleep(self.config.fade_in_delay(index));
            self.scheduler.spawn(Box::pin(async move {
                delay.await;
                dom.add_class(&element, &class);
            }));
        }

        debug!("Scheduled fade-in for {} elements", targets.len());
        targets.len()
    }

    /// Icons swapped while hovering: `link` itself or its descendants.
    pub fn hover_icons(&self, link: &D::Node) -> Vec<D::Node> {
        let selector = Selector::any_class(self.config.hover_icon_classes.iter().map(String::as_str));
        let mut icons = Vec::new();
        if self.config.hover_icon_classes.iter().any(|class| self.dom.has_class(link, class)) {
            icons.push(link.clone());
        }
        icons.extend(self.dom.query_within(link, &selector));
        icons
    }

    /// Shows the hover image.
    pub fn hover_enter(&self, link: &D::Node) {
        self.set_icon_src(link, &self.config.hover_icon_src);
    }

    /// Restores the resting image.
    pub fn hover_leave(&self, link: &D::Node) {
        self.set_icon_src(link, &self.config.rest_icon_src);
    }

    fn set_icon_src(&self, link: &D::Node, src: &str) {
        for icon in self.hover_icons(link) {
            self.dom.set_attribute(&icon, "src", src);
        }
    }
}

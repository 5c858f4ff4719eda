//! Localization manager

use crate::cache::ContentCache;
use crate::fallback;
use crate::resource::ProjectContent;
use crate::source::ContentSource;
use folio_common::{non_empty, suffix_after, Locale, ProjectId, Scheduler};
use folio_config::schema::{DomContract, LocalizationConfig, SiteConfig};
use folio_dom::{Dom, PreferenceStore, Selector};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Owns the current language and keeps the page's text in step with it.
///
/// Handles are cheap clones of one shared state. Content population runs as
/// a spawned task; every [`set_language`](Self::set_language) call starts a
/// new generation and tasks of an older generation drop their results, so the
/// most recently selected language always wins.
pub struct LocalizationManager<D: Dom> {
    inner: Rc<Inner<D>>,
}

impl<D: Dom> Clone for LocalizationManager<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<D: Dom> {
    dom: D,
    contract: DomContract,
    settings: LocalizationConfig,
    content: ContentCache,
    store: Rc<dyn PreferenceStore>,
    scheduler: Rc<dyn Scheduler>,
    current: Cell<Locale>,
    generation: Cell<u64>,
}

impl<D: Dom + 'static> LocalizationManager<D> {
    /// Creates a manager; nothing touches the page until [`initialize`](Self::initialize).
    pub fn new(
        dom: D,
        config: &SiteConfig,
        source: Rc<dyn ContentSource>,
        store: Rc<dyn PreferenceStore>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                dom,
                contract: config.dom.clone(),
                settings: config.localization.clone(),
                content: ContentCache::new(source),
                store,
                scheduler,
                current: Cell::new(config.localization.default_locale),
                generation: Cell::new(0),
            }),
        }
    }

    /// Applies the stored preference, or the default language when none is stored.
    pub fn initialize(&self) {
        let locale = self
            .preferred_language()
            .unwrap_or(self.inner.settings.default_locale);
        info!("Initializing localization with locale: {}", locale);
        self.set_language(locale);
    }

    /// The language currently applied.
    pub fn current_language(&self) -> Locale {
        self.inner.current.get()
    }

    /// Cached content records.
    pub fn content(&self) -> &ContentCache {
        &self.inner.content
    }

    /// The persisted preference; unreadable or unknown values count as none.
    pub fn preferred_language(&self) -> Option<Locale> {
        let key = &self.inner.settings.storage_key;
        match self.inner.store.get(key) {
            Ok(Some(code)) => {
                let locale = Locale::from_code(&code);
                if locale.is_none() {
                    warn!("Ignoring unknown stored language: '{}'", code);
                }
                locale
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read language preference: {}", e);
                None
            }
        }
    }

    /// Switches to the language named by a selector control's id (`lang-<code>`).
    ///
    /// Returns whether the control named a known language.
    pub fn handle_selector_click(&self, control: &D::Node) -> bool {
        let Some(id) = self.inner.dom.id(control) else {
            return false;
        };
        let locale = suffix_after(&id, &self.inner.contract.language_button_prefix)
            .and_then(Locale::from_code);

        match locale {
            Some(locale) => {
                self.set_language(locale);
                true
            }
            None => {
                debug!("Control '{}' does not name a language", id);
                false
            }
        }
    }

    /// Switches the page to `locale`.
    ///
    /// Marks the selector control, rewrites bilingual text, schedules content
    /// population and persists the choice. Failures are logged.
    pub fn set_language(&self, locale: Locale) {
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        self.inner.current.set(locale);
        debug!("Switching to {} (generation {})", locale, generation);

        self.mark_active_control(locale);
        let updated = self.apply_static_translations(locale);
        debug!("Updated {} localized elements", updated);

        let manager = self.clone();
        self.inner.scheduler.spawn(Box::pin(async move {
            manager.populate_content(locale, generation).await;
        }));

        if let Err(e) = self
            .inner
            .store
            .set(&self.inner.settings.storage_key, locale.code())
        {
            warn!("Failed to persist language preference: {}", e);
        }
    }

    /// Loads about content and writes the paragraphs for `locale`.
    pub async fn populate_about_section(&self, locale: Locale) {
        self.populate_about(locale, self.inner.generation.get()).await;
    }

    /// Loads project content and fills every card for `locale`.
    pub async fn populate_project_cards(&self, locale: Locale) {
        self.populate_projects(locale, self.inner.generation.get()).await;
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.generation.get() == generation
    }

    fn mark_active_control(&self, locale: Locale) {
        let dom = &self.inner.dom;
        let contract = &self.inner.contract;
        let target = contract.language_button_id(locale);

        for control in dom.query_all(&Selector::class(&contract.language_button_class)) {
            if dom.id(&control).as_deref() == Some(target.as_str()) {
                dom.add_class(&control, &contract.active_class);
            } else {
                dom.remove_class(&control, &contract.active_class);
            }
        }
    }

    fn apply_static_translations(&self, locale: Locale) -> usize {
        let dom = &self.inner.dom;
        let selector = Locale::ALL
            .iter()
            .map(|l| Selector::attribute(l.data_attribute()))
            .reduce(Selector::and)
            .unwrap_or_else(|| Selector::attribute(locale.data_attribute()));

        let mut updated = 0;
        for element in dom.query_all(&selector) {
            let value = dom.attribute(&element, locale.data_attribute());
            if let Some(text) = non_empty(value.as_deref()) {
                dom.set_text(&element, text);
                updated += 1;
            }
        }
        updated
    }

    async fn populate_content(&self, locale: Locale, generation: u64) {
        futures::join!(
            self.populate_about(locale, generation),
            self.populate_projects(locale, generation)
        );
    }

    #[instrument(skip(self))]
    async fn populate_about(&self, locale: Locale, generation: u64) {
        let paragraphs: Vec<String> = match self.inner.content.about().await {
            Ok(about) => match about.paragraphs_for(locale) {
                Some(paragraphs) => paragraphs.to_vec(),
                None => {
                    warn!("About content has no paragraphs for {}, using built-in text", locale);
                    fallback_paragraphs(locale)
                }
            },
            Err(e) => {
                warn!("About content unavailable, using built-in text: {}", e);
                fallback_paragraphs(locale)
            }
        };

        if !self.is_current(generation) {
            debug!("Discarding stale about content for {}", locale);
            return;
        }

        let dom = &self.inner.dom;
        for (slot, text) in self.inner.settings.about_paragraph_ids.iter().zip(&paragraphs) {
            let Some(text) = non_empty(Some(text.as_str())) else {
                debug!("About paragraph for slot '{}' is empty, leaving it", slot);
                continue;
            };
            match dom.element_by_id(slot) {
                Some(node) => dom.set_text(&node, text),
                None => debug!("About paragraph slot '{}' not on page", slot),
            }
        }
    }

    #[instrument(skip(self))]
    async fn populate_projects(&self, locale: Locale, generation: u64) {
        let dom = &self.inner.dom;
        let cards = dom.query_all(&Selector::attribute(&self.inner.contract.project_attribute));

        for card in cards {
            let Some(id) = dom
                .attribute(&card, &self.inner.contract.project_attribute)
                .filter(|id| !id.is_empty())
            else {
                continue;
            };
            let id = ProjectId::new(id);

            match self.inner.content.project(&id).await {
                Ok(project) => {
                    if !self.is_current(generation) {
                        debug!("Discarding stale project content for {}", locale);
                        return;
                    }
                    self.render_card(&card, &project, locale);
                }
                Err(e) => warn!("Failed to load content for project {}: {}", id, e),
            }
        }
    }

    fn render_card(&self, card: &D::Node, project: &ProjectContent, locale: Locale) {
        let dom = &self.inner.dom;
        let contract = &self.inner.contract;

        let fields = [
            (&contract.project_title_class, &project.title),
            (&contract.project_genre_class, &project.genre),
            (&contract.project_description_class, &project.description),
        ];
        for (class, value) in fields {
            if let Some(text) = value.text(locale) {
                for node in self.card_nodes(card, class) {
                    dom.set_text(&node, text);
                }
            }
        }

        if let Some(href) = project.link.text_or_other(locale) {
            for anchor in self.card_nodes(card, &contract.project_link_class) {
                dom.set_attribute(&anchor, "href", href);
            }
        }

        for link_locale in Locale::ALL {
            if let Some(href) = project.link.text_or_other(link_locale) {
                let class = contract.project_link_class_for(link_locale);
                for anchor in self.card_nodes(card, &class) {
                    dom.set_attribute(&anchor, "href", href);
                }
            }
        }
    }

    /// The card itself when it carries `class`, then matching descendants.
    fn card_nodes(&self, card: &D::Node, class: &str) -> Vec<D::Node> {
        let dom = &self.inner.dom;
        let mut nodes = Vec::new();
        if dom.has_class(card, class) {
            nodes.push(card.clone());
        }
        nodes.extend(dom.query_within(card, &Selector::class(class)));
        nodes
    }
}

fn fallback_paragraphs(locale: Locale) -> Vec<String> {
    fallback::about_paragraphs(locale)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::source::{MemoryContentSource, MockContentSource};
    use folio_common::test_utils::{content_fixtures, init_test_logging, ManualScheduler};
    use folio_common::{FolioError, FolioResult};
    use folio_dom::fixtures::{portfolio_page, LOADING};
    use folio_dom::{MemoryDocument, MemoryPreferenceStore};
    use mockall::predicate::eq;

    struct Harness {
        doc: MemoryDocument,
        store: MemoryPreferenceStore,
        scheduler: ManualScheduler,
        manager: LocalizationManager<MemoryDocument>,
    }

    fn harness(source: Rc<dyn ContentSource>) -> Harness {
        init_test_logging();
        let doc = portfolio_page();
        let store = MemoryPreferenceStore::new();
        let scheduler = ManualScheduler::new();
        let manager = LocalizationManager::new(
            doc.clone(),
            &SiteConfig::default(),
            source,
            Rc::new(store.clone()),
            Rc::new(scheduler.clone()),
        );
        Harness {
            doc,
            store,
            scheduler,
            manager,
        }
    }

    fn full_content() -> MemoryContentSource {
        MemoryContentSource::new()
            .with_file("about.json", content_fixtures::about_json())
            .with_file("echoes.json", content_fixtures::project_json())
            .with_file("drift.json", content_fixtures::project_json_english_link_only())
    }

    fn href_of(doc: &MemoryDocument, card: &str, class: &str) -> Option<String> {
        let card = doc.query_first(&Selector::attribute_eq("data-project", card))?;
        let anchor = doc.query_within(&card, &Selector::class(class)).into_iter().next()?;
        doc.attribute(&anchor, "href")
    }

    fn text_in_card(doc: &MemoryDocument, card: &str, class: &str) -> Option<String> {
        let card = doc.query_first(&Selector::attribute_eq("data-project", card))?;
        let node = doc.query_within(&card, &Selector::class(class)).into_iter().next()?;
        Some(doc.text(&node))
    }

    #[test]
    fn test_set_language_rewrites_bilingual_text() {
        let h = harness(Rc::new(MemoryContentSource::new()));

        h.manager.set_language(Locale::Es);

        assert_eq!(h.doc.text_of("title").as_deref(), Some("Portafolio"));
        assert_eq!(h.doc.text_of("tagline").as_deref(), Some("Diseñador de Juegos y Narrativa"));
        // Empty Spanish value and English-only element keep their text.
        assert_eq!(h.doc.text_of("games-note").as_deref(), Some("More games soon"));
        assert_eq!(h.doc.text_of("english-only").as_deref(), Some("Available for freelance work"));
        assert_eq!(h.manager.current_language(), Locale::Es);
        // Population is deferred.
        assert_eq!(h.scheduler.pending(), 1);
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some(LOADING));
    }

    #[test]
    fn test_only_selected_control_is_active() {
        let h = harness(Rc::new(MemoryContentSource::new()));

        h.manager.set_language(Locale::Es);
        h.manager.set_language(Locale::En);

        let active = h.doc.query_all(&Selector::class("lang-btn").and(Selector::class("active")));
        assert_eq!(active.len(), 1);
        assert_eq!(h.doc.id(&active[0]).as_deref(), Some("lang-en"));
    }

    #[tokio::test]
    async fn test_about_paragraphs_follow_locale() {
        let h = harness(Rc::new(full_content()));

        h.manager.set_language(Locale::Es);
        h.scheduler.run_until_idle().await;
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("C"));
        assert_eq!(h.doc.text_of("about-paragraph-2").as_deref(), Some("D"));

        h.manager.set_language(Locale::En);
        h.scheduler.run_until_idle().await;
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("A"));
        assert_eq!(h.doc.text_of("about-paragraph-2").as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_unreachable_about_uses_fallback() {
        let mut source = MockContentSource::new();
        source.expect_fetch().returning(|path| {
            Err(ContentError::Fetch {
                path: path.to_string(),
                message: "connection refused".to_string(),
            })
        });
        let h = harness(Rc::new(source));

        h.manager.populate_about_section(Locale::Es).await;

        let [first, second] = fallback::about_paragraphs(Locale::Es);
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some(first));
        assert_eq!(h.doc.text_of("about-paragraph-2").as_deref(), Some(second));
    }

    #[tokio::test]
    async fn test_missing_locale_paragraphs_use_fallback() {
        let source = MemoryContentSource::new()
            .with_file("about.json", r#"{"paragraphs":{"en":["Only English"]}}"#);
        let h = harness(Rc::new(source));

        h.manager.populate_about_section(Locale::Es).await;
        assert_eq!(
            h.doc.text_of("about-paragraph-1").as_deref(),
            Some(fallback::about_paragraphs(Locale::Es)[0])
        );

        // A single English paragraph fills only the first slot.
        h.manager.populate_about_section(Locale::En).await;
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("Only English"));
        assert_eq!(
            h.doc.text_of("about-paragraph-2").as_deref(),
            Some(fallback::about_paragraphs(Locale::Es)[1])
        );
    }

    #[tokio::test]
    async fn test_empty_about_paragraph_keeps_slot() {
        let source = MemoryContentSource::new()
            .with_file("about.json", r#"{"paragraphs":{"en":["","B"],"es":["C","D"]}}"#);
        let h = harness(Rc::new(source));

        h.manager.populate_about_section(Locale::En).await;
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some(LOADING));
        assert_eq!(h.doc.text_of("about-paragraph-2").as_deref(), Some("B"));

        h.manager.populate_about_section(Locale::Es).await;
        h.manager.populate_about_section(Locale::En).await;
        // The Spanish text stays in place when the English entry is empty.
        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("C"));
        assert_eq!(h.doc.text_of("about-paragraph-2").as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_project_requested_once_across_switches() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .with(eq("echoes.json"))
            .times(1)
            .returning(|_| Ok(content_fixtures::project_json().to_string()));
        source
            .expect_fetch()
            .with(eq("drift.json"))
            .times(1)
            .returning(|_| Ok(content_fixtures::project_json_english_link_only().to_string()));
        let h = harness(Rc::new(source));

        h.manager.populate_project_cards(Locale::En).await;
        assert_eq!(text_in_card(&h.doc, "echoes", "project-title").as_deref(), Some("Echoes"));

        h.manager.populate_project_cards(Locale::Es).await;
        assert_eq!(text_in_card(&h.doc, "echoes", "project-title").as_deref(), Some("Ecos"));
        assert_eq!(
            text_in_card(&h.doc, "echoes", "project-genre").as_deref(),
            Some("Ficción interactiva")
        );
        assert_eq!(h.manager.content().cached_projects(), 2);
    }

    #[tokio::test]
    async fn test_links_fall_back_across_locales() {
        let h = harness(Rc::new(full_content()));

        h.manager.populate_project_cards(Locale::Es).await;

        assert_eq!(href_of(&h.doc, "drift", "project-link-en").as_deref(), Some("x"));
        assert_eq!(href_of(&h.doc, "drift", "project-link-es").as_deref(), Some("x"));
        assert_eq!(
            href_of(&h.doc, "echoes", "project-link").as_deref(),
            Some("https://example.com/ecos")
        );
    }

    #[tokio::test]
    async fn test_locale_anchors_keep_their_own_links() {
        let source = MemoryContentSource::new()
            .with_file("echoes.json", content_fixtures::project_json())
            .with_file("drift.json", content_fixtures::project_json());
        let h = harness(Rc::new(source));

        h.manager.populate_project_cards(Locale::En).await;
        assert_eq!(
            href_of(&h.doc, "drift", "project-link-en").as_deref(),
            Some("https://example.com/echoes")
        );
        assert_eq!(
            href_of(&h.doc, "drift", "project-link-es").as_deref(),
            Some("https://example.com/ecos")
        );

        h.manager.populate_project_cards(Locale::Es).await;
        assert_eq!(
            href_of(&h.doc, "drift", "project-link-en").as_deref(),
            Some("https://example.com/echoes")
        );
        assert_eq!(
            href_of(&h.doc, "drift", "project-link-es").as_deref(),
            Some("https://example.com/ecos")
        );
    }

    #[tokio::test]
    async fn test_unavailable_project_leaves_card_untouched() {
        let source = MemoryContentSource::new()
            .with_file("echoes.json", content_fixtures::project_json());
        let h = harness(Rc::new(source.clone()));

        h.manager.populate_project_cards(Locale::En).await;

        assert_eq!(text_in_card(&h.doc, "drift", "project-title").as_deref(), Some(LOADING));
        assert_eq!(href_of(&h.doc, "drift", "project-link-en").as_deref(), Some("#"));
        assert_eq!(text_in_card(&h.doc, "echoes", "project-title").as_deref(), Some("Echoes"));
        assert_eq!(source.request_count("drift.json"), 1);
    }

    #[tokio::test]
    async fn test_latest_language_wins_regardless_of_completion_order() {
        let h = harness(Rc::new(full_content()));

        h.manager.set_language(Locale::En);
        h.manager.set_language(Locale::Es);
        assert_eq!(h.scheduler.pending(), 2);
        h.scheduler.run_newest_first().await;

        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("C"));
        assert_eq!(text_in_card(&h.doc, "echoes", "project-title").as_deref(), Some("Ecos"));

        let h = harness(Rc::new(full_content()));
        h.manager.set_language(Locale::Es);
        h.manager.set_language(Locale::En);
        h.scheduler.run_until_idle().await;

        assert_eq!(h.doc.text_of("about-paragraph-1").as_deref(), Some("A"));
        assert_eq!(text_in_card(&h.doc, "echoes", "project-title").as_deref(), Some("Echoes"));
    }

    #[test]
    fn test_preference_persists_across_reload() {
        let h = harness(Rc::new(MemoryContentSource::new()));
        h.manager.initialize();
        assert_eq!(h.manager.current_language(), Locale::En);

        h.manager.set_language(Locale::Es);
        assert_eq!(h.store.get("preferred-language").unwrap().as_deref(), Some("es"));

        let reloaded = portfolio_page();
        let manager = LocalizationManager::new(
            reloaded.clone(),
            &SiteConfig::default(),
            Rc::new(MemoryContentSource::new()),
            Rc::new(h.store.clone()),
            Rc::new(ManualScheduler::new()),
        );
        manager.initialize();

        assert_eq!(manager.current_language(), Locale::Es);
        assert_eq!(reloaded.text_of("title").as_deref(), Some("Portafolio"));
    }

    #[test]
    fn test_unknown_stored_language_is_ignored() {
        let h = harness(Rc::new(MemoryContentSource::new()));
        h.store.set("preferred-language", "fr").unwrap();

        assert_eq!(h.manager.preferred_language(), None);
        h.manager.initialize();
        assert_eq!(h.manager.current_language(), Locale::En);
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, key: &str) -> FolioResult<Option<String>> {
            Err(FolioError::storage("storage disabled", key))
        }

        fn set(&self, key: &str, _value: &str) -> FolioResult<()> {
            Err(FolioError::storage("quota exceeded", key))
        }
    }

    #[test]
    fn test_storage_failures_are_not_fatal() {
        init_test_logging();
        let doc = portfolio_page();
        let manager = LocalizationManager::new(
            doc.clone(),
            &SiteConfig::default(),
            Rc::new(MemoryContentSource::new()),
            Rc::new(BrokenStore),
            Rc::new(ManualScheduler::new()),
        );

        manager.initialize();
        manager.set_language(Locale::Es);

        assert_eq!(manager.current_language(), Locale::Es);
        assert_eq!(doc.text_of("title").as_deref(), Some("Portafolio"));
    }

    #[test]
    fn test_selector_click_parses_control_id() {
        let h = harness(Rc::new(MemoryContentSource::new()));
        let es = h.doc.element_by_id("lang-es").unwrap();
        let title = h.doc.element_by_id("title").unwrap();

        assert!(h.manager.handle_selector_click(&es));
        assert_eq!(h.manager.current_language(), Locale::Es);

        assert!(!h.manager.handle_selector_click(&title));
        assert_eq!(h.manager.current_language(), Locale::Es);
    }
}

//! Integration tests for folio-site

use folio_common::test_utils::{content_fixtures, init_test_logging, ManualScheduler};
use folio_common::{Locale, TokioScheduler};
use folio_config::SiteConfig;
use folio_dom::fixtures::portfolio_page;
use folio_dom::{Dom, MemoryDocument, MemoryPreferenceStore, Selector};
use folio_i18n::MemoryContentSource;
use folio_nav::{Key, KeyInput};
use folio_site::{embedded_config, Site};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;

fn content() -> MemoryContentSource {
    MemoryContentSource::new()
        .with_file("about.json", content_fixtures::about_json())
        .with_file("echoes.json", content_fixtures::project_json())
        .with_file("drift.json", content_fixtures::project_json_english_link_only())
}

fn card_text(doc: &MemoryDocument, card: &str, class: &str) -> String {
    let card = doc
        .query_first(&Selector::attribute_eq("data-project", card))
        .unwrap();
    let node = doc.query_within(&card, &Selector::class(class)).remove(0);
    doc.text(&node)
}

#[tokio::test]
async fn test_full_page_session() {
    init_test_logging();
    let source = content();
    let store = MemoryPreferenceStore::new();

    let local = LocalSet::new();
    local
        .run_until(async {
            let doc = portfolio_page();
            let site = Site::new(
                doc.clone(),
                embedded_config(),
                Rc::new(source.clone()),
                Rc::new(store.clone()),
                Rc::new(TokioScheduler),
            );

            site.start();
            site.on_load();
            tokio::time::sleep(Duration::from_millis(400)).await;

            assert_eq!(doc.text_of("about-paragraph-1").as_deref(), Some("A"));
            assert_eq!(card_text(&doc, "echoes", "project-title"), "Echoes");
            assert_eq!(doc.query_all(&Selector::class("fade-in")).len(), 4);

            let es = doc.element_by_id("lang-es").unwrap();
            site.handle_click(&es);
            tokio::time::sleep(Duration::from_millis(20)).await;

            assert_eq!(doc.text_of("title").as_deref(), Some("Portafolio"));
            assert_eq!(doc.text_of("about-paragraph-2").as_deref(), Some("D"));
            assert_eq!(card_text(&doc, "drift", "project-genre"), "Rompecabezas");

            assert!(site.handle_key(&KeyInput::plain(Key::Digit(4))));
            assert_eq!(doc.fragment(), "contact");
        })
        .await;

    assert_eq!(source.request_count("about.json"), 1);
    assert_eq!(source.request_count("echoes.json"), 1);
}

#[tokio::test]
async fn test_reload_keeps_language_and_deep_link() {
    init_test_logging();
    let store = MemoryPreferenceStore::new();

    let first = portfolio_page();
    let scheduler = ManualScheduler::new();
    let site = Site::new(
        first.clone(),
        SiteConfig::default(),
        Rc::new(content()),
        Rc::new(store.clone()),
        Rc::new(scheduler.clone()),
    );
    site.start();
    site.localization().set_language(Locale::Es);
    scheduler.run_until_idle().await;

    // Reload: fresh page and scheduler, same store, opened on #games.
    let reloaded = portfolio_page();
    reloaded.set_initial_fragment("#games");
    let scheduler = ManualScheduler::new();
    let site = Site::new(
        reloaded.clone(),
        SiteConfig::default(),
        Rc::new(content()),
        Rc::new(store),
        Rc::new(scheduler.clone()),
    );
    site.start();

    assert_eq!(site.localization().current_language(), Locale::Es);
    assert_eq!(reloaded.text_of("title").as_deref(), Some("Portafolio"));
    assert_eq!(site.navigator().current_section().unwrap().as_str(), "interactive-fictions");

    scheduler.run_until_idle().await;

    assert_eq!(site.navigator().current_section().unwrap().as_str(), "games");
    assert_eq!(reloaded.text_of("about-paragraph-1").as_deref(), Some("C"));
    assert_eq!(scheduler.requested_sleeps(), vec![Duration::from_millis(100)]);
}

#[tokio::test]
async fn test_unknown_deep_link_keeps_default() {
    init_test_logging();
    let doc = portfolio_page();
    doc.set_initial_fragment("#nowhere");
    let scheduler = ManualScheduler::new();
    let site = Site::new(
        doc.clone(),
        SiteConfig::default(),
        Rc::new(MemoryContentSource::new()),
        Rc::new(MemoryPreferenceStore::new()),
        Rc::new(scheduler.clone()),
    );

    site.start();
    scheduler.run_until_idle().await;

    assert_eq!(site.navigator().current_section().unwrap().as_str(), "interactive-fictions");
    assert_eq!(doc.fragment(), "interactive-fictions");
}

#[test]
fn test_hover_round_trip() {
    init_test_logging();
    let doc = portfolio_page();
    let site = Site::new(
        doc.clone(),
        SiteConfig::default(),
        Rc::new(MemoryContentSource::new()),
        Rc::new(MemoryPreferenceStore::new()),
        Rc::new(ManualScheduler::new()),
    );
    let icon = doc.element_by_id("fiverr-icon").unwrap();
    let link = doc
        .query_first(&Selector::attribute_eq("href", "https://www.fiverr.com/"))
        .unwrap();

    site.hover_enter(&link);
    assert_eq!(doc.attribute(&icon, "src").as_deref(), Some("icons/fiverr-white.svg"));
    site.hover_leave(&link);
    assert_eq!(doc.attribute(&icon, "src").as_deref(), Some("icons/fiverr-black.svg"));
}

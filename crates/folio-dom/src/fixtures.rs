//! A portfolio page shaped like the published site.

use crate::memory::{ElementBuilder, MemoryDocument};

/// Sections in tab order.
pub const SECTIONS: [&str; 4] = ["interactive-fictions", "games", "about", "contact"];

/// Placeholder text shown before content loads.
pub const LOADING: &str = "Loading...";

/// Builds the portfolio page.
///
/// - two language controls (`#lang-en`, `#lang-es`);
/// - a bilingual heading and a bilingual tagline;
/// - four tabs and sections (see [`SECTIONS`]);
/// - card `echoes` with a generic `.project-link`;
/// - card `drift` with per-locale `.project-link-en` / `.project-link-es`;
/// - about paragraphs `#about-paragraph-1` / `#about-paragraph-2`;
/// - an element with an empty Spanish value and one with only `data-en`;
/// - a Fiverr contact icon inside a link.
pub fn portfolio_page() -> MemoryDocument {
    let doc = MemoryDocument::new();
    let body = doc.body_id();

    let header = doc.append(body, ElementBuilder::new());
    doc.append(
        header,
        ElementBuilder::new()
            .id("lang-en")
            .class("lang-btn")
            .text("EN"),
    );
    doc.append(
        header,
        ElementBuilder::new()
            .id("lang-es")
            .class("lang-btn")
            .text("ES"),
    );
    doc.append(
        header,
        ElementBuilder::new()
            .id("title")
            .attr("data-en", "Portfolio")
            .attr("data-es", "Portafolio")
            .text("Portfolio"),
    );
    doc.append(
        header,
        ElementBuilder::new()
            .id("tagline")
            .attr("data-en", "Game & Narrative Designer")
            .attr("data-es", "Diseñador de Juegos y Narrativa")
            .text("Game & Narrative Designer"),
    );

    let nav = doc.append(body, ElementBuilder::new());
    let labels = [
        ("Interactive Fictions", "Ficciones Interactivas"),
        ("Games", "Juegos"),
        ("About", "Sobre mí"),
        ("Contact", "Contacto"),
    ];
    for (section, (en, es)) in SECTIONS.iter().zip(labels) {
        doc.append(
            nav,
            ElementBuilder::new()
                .class("nav-tab")
                .attr("data-section", *section)
                .attr("data-en", en)
                .attr("data-es", es)
                .text(en),
        );
    }

    let fictions = doc.append(
        body,
        ElementBuilder::new()
            .id("interactive-fictions")
            .class("section"),
    );
    let echoes = doc.append(
        fictions,
        ElementBuilder::new()
            .class("project-card")
            .attr("data-project", "echoes"),
    );
    doc.append(echoes, ElementBuilder::new().class("project-title").text(LOADING));
    doc.append(echoes, ElementBuilder::new().class("project-genre").text(LOADING));
    doc.append(
        echoes,
        ElementBuilder::new().class("project-description").text(LOADING),
    );
    doc.append(
        echoes,
        ElementBuilder::new()
            .class("project-link")
            .attr("href", "#")
            .text("Play"),
    );

    let drift = doc.append(
        fictions,
        ElementBuilder::new()
            .class("project-card")
            .attr("data-project", "drift"),
    );
    doc.append(drift, ElementBuilder::new().class("project-title").text(LOADING));
    doc.append(drift, ElementBuilder::new().class("project-genre").text(LOADING));
    doc.append(
        drift,
        ElementBuilder::new().class("project-description").text(LOADING),
    );
    doc.append(
        drift,
        ElementBuilder::new()
            .class("project-link-en")
            .attr("href", "#")
            .text("Play (EN)"),
    );
    doc.append(
        drift,
        ElementBuilder::new()
            .class("project-link-es")
            .attr("href", "#")
            .text("Jugar (ES)"),
    );

    let games = doc.append(body, ElementBuilder::new().id("games").class("section"));
    doc.append(
        games,
        ElementBuilder::new()
            .id("games-note")
            .attr("data-en", "More games soon")
            .attr("data-es", "")
            .text("More games soon"),
    );

    let about = doc.append(body, ElementBuilder::new().id("about").class("section"));
    let about_content = doc.append(about, ElementBuilder::new().class("about-content"));
    doc.append(
        about_content,
        ElementBuilder::new().id("about-paragraph-1").text(LOADING),
    );
    doc.append(
        about_content,
        ElementBuilder::new().id("about-paragraph-2").text(LOADING),
    );

    let contact = doc.append(body, ElementBuilder::new().id("contact").class("section"));
    let contact_content = doc.append(contact, ElementBuilder::new().class("contact-content"));
    let fiverr = doc.append(
        contact_content,
        ElementBuilder::new().attr("href", "https://www.fiverr.com/"),
    );
    doc.append(
        fiverr,
        ElementBuilder::new()
            .id("fiverr-icon")
            .class("fiverr-contact-icon")
            .attr("src", "icons/fiverr-black.svg"),
    );
    doc.append(
        contact_content,
        ElementBuilder::new()
            .id("english-only")
            .attr("data-en", "Available for freelance work")
            .text("Available for freelance work"),
    );

    doc
}

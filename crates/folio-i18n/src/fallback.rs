//! Built-in about text used when `about.json` is unavailable.

use folio_common::Locale;

const ABOUT_EN: [&str; 2] = [
    "Jr. Game & Narrative Designer focused on creating meaningful player experiences through story, structure, and emotion.",
    "I've worked on small independent projects exploring different genres, always with the goal of making players feel something real.",
];

const ABOUT_ES: [&str; 2] = [
    "Jr. Game & Narrative Designer enfocado en crear experiencias significativas para los jugadores a través de la historia, la estructura y la emoción.",
    "He trabajado en pequeños proyectos independientes explorando diferentes géneros, siempre con el objetivo de hacer sentir algo real a quien juega.",
];

/// The two fallback paragraphs for `locale`.
pub const fn about_paragraphs(locale: Locale) -> [&'static str; 2] {
    match locale {
        Locale::En => ABOUT_EN,
        Locale::Es => ABOUT_ES,
    }
}

//! Integration tests for folio-common crate.

use folio_common::{parse_fragment, FolioError, Locale, ProjectId, SectionId};

#[test]
fn test_section_id_display() {
    let section = SectionId::new("interactive-fictions");
    assert_eq!(format!("{}", section), "interactive-fictions");
    assert_eq!(section, SectionId::from("interactive-fictions"));
}

#[test]
fn test_project_id_display() {
    let project = ProjectId::from("echoes");
    assert_eq!(format!("{}", project), "echoes");
    assert_eq!(project.content_file(), "echoes.json");
}

#[test]
fn test_locale_roundtrip_through_code() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
        assert_eq!(locale.to_string(), locale.code());
    }
}

#[test]
fn test_fragment_to_section() {
    let section = parse_fragment("#about").map(SectionId::new);
    assert_eq!(section, Some(SectionId::new("about")));
}

#[test]
fn test_unknown_locale_is_validation_error() {
    let err = "pt".parse::<Locale>().unwrap_err();
    assert!(matches!(err, FolioError::Validation { .. }));
}

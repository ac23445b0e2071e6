//! Installing the process-wide catalog with custom labels.
//!
//! Lives in its own test binary so the global catalog starts out empty.

use drawattr_core::{CatalogError, EnglishLocale, StringTable, catalog, text_attributes};

#[test]
fn test_init_installs_custom_labels() {
    let table = StringTable::new()
        .with("attrFont", "Schrift")
        .with("paintFill", "Nur Füllung");
    let installed = catalog::init(&table).unwrap();

    assert!(std::ptr::eq(installed, catalog::get()));
    assert_eq!(catalog::get().font.label(), "Schrift");
    assert_eq!(catalog::get().paint_fill.label(), "Nur Füllung");
    assert_eq!(catalog::get().alignment.label(), "Alignment");

    let text = text_attributes();
    assert_eq!(text.get(0).map(|a| a.label()), Some("Schrift"));
    assert!(text.contains(&installed.font));

    assert_eq!(
        catalog::init(&EnglishLocale).err(),
        Some(CatalogError::AlreadyInitialized)
    );
    assert_eq!(catalog::get().font.label(), "Schrift");
}

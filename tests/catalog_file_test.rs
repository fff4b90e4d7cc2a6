use plant_cart::{CartError, CatalogFile, CatalogSource, ShopSession};
use std::io::Write;
use tempfile::NamedTempFile;

fn catalog_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_session_from_catalog_file() {
    let file = catalog_file(
        r#"
[[items]]
name = "Pothos"
cost = "$8.99"
description = "Trailing vine"
image = "pothos.jpg"

[[items]]
name = "Aloe"
cost = "$6"
description = "Soothing succulent"
image = "aloe.jpg"
"#,
    );

    let mut session = ShopSession::from_source(&CatalogFile::new(file.path())).unwrap();
    assert_eq!(session.catalog().len(), 2);

    session.add_to_cart("Pothos").unwrap();
    session.add_to_cart("Pothos").unwrap();
    session.add_to_cart("Aloe").unwrap();

    assert_eq!(session.subtotal("Pothos").as_deref(), Some("17.98"));
    assert_eq!(session.total(), "23.98");
    assert!(session.add_to_cart("Cactus").is_err());
}

#[test]
fn test_duplicate_names_rejected() {
    let file = catalog_file(
        r#"
[[items]]
name = "Aloe"
cost = "$6"
description = ""
image = "aloe.jpg"

[[items]]
name = "Aloe"
cost = "$7"
description = ""
image = "aloe2.jpg"
"#,
    );

    let result = CatalogFile::new(file.path()).load_catalog();
    assert!(matches!(result, Err(CartError::DuplicateItem { .. })));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CatalogFile::new(dir.path().join("nope.toml")).load_catalog();
    assert!(matches!(result, Err(CartError::IoError(_))));
}

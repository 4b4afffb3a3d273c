use masthead_core::{Catalog, CatalogError, ValidationError};

#[test]
fn constructors_reject_invalid_fields() {
    let mut catalog = Catalog::new();

    assert_eq!(
        catalog.create_author("").unwrap_err(),
        CatalogError::Validation(ValidationError::EmptyAuthorName)
    );
    assert_eq!(
        catalog.create_magazine("V", "Fashion").unwrap_err(),
        CatalogError::Validation(ValidationError::MagazineNameLength { len: 1 })
    );
    assert_eq!(
        catalog
            .create_magazine("Seventeen Letters", "Teen")
            .unwrap_err(),
        CatalogError::Validation(ValidationError::MagazineNameLength { len: 17 })
    );
    assert_eq!(
        catalog.create_magazine("Vogue", "").unwrap_err(),
        CatalogError::Validation(ValidationError::EmptyCategory)
    );

    assert!(catalog.authors().is_empty());
    assert!(catalog.magazines().is_empty());
}

#[test]
fn author_name_is_write_once() {
    let mut catalog = Catalog::new();
    let id = catalog.create_author("Carry Bradshaw").unwrap();

    let author = catalog.author_mut(id).unwrap();
    assert!(!author.set_name("ActuallyTopher"));
    assert!(!author.set_name(""));

    assert_eq!(catalog.author(id).unwrap().name(), "Carry Bradshaw");
}

#[test]
fn article_title_is_write_once() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let article = catalog
        .create_article(author, magazine, "How to wear a tuxedo")
        .unwrap();

    let entry = catalog.article_mut(article).unwrap();
    assert!(!entry.set_title("A perfectly valid replacement"));
    assert!(!entry.set_title("500"));

    assert_eq!(catalog.article(article).unwrap().title(), "How to wear a tuxedo");
}

#[test]
fn magazine_name_updates_only_within_bounds() {
    let mut catalog = Catalog::new();
    let id = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let magazine = catalog.magazine_mut(id).unwrap();

    assert!(magazine.set_name("New Yorker"));
    assert_eq!(magazine.name(), "New Yorker");

    assert!(!magazine.set_name("N"));
    assert!(!magazine.set_name("New Yorker and Times"));
    assert_eq!(magazine.name(), "New Yorker");
}

#[test]
fn magazine_category_updates_only_when_non_empty() {
    let mut catalog = Catalog::new();
    let id = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let magazine = catalog.magazine_mut(id).unwrap();

    assert!(magazine.set_category("Life Style"));
    assert!(!magazine.set_category(""));
    assert_eq!(catalog.magazine(id).unwrap().category(), "Life Style");
}

#[test]
fn snapshot_serializes_expected_fields() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let article = catalog
        .create_article(author, magazine, "How to wear a tuxedo")
        .unwrap();

    let json = serde_json::to_value(catalog.snapshot()).unwrap();
    assert_eq!(json["authors"][0]["id"], author.to_string());
    assert_eq!(json["authors"][0]["name"], "Carry Bradshaw");
    assert_eq!(json["magazines"][0]["category"], "Fashion");
    assert_eq!(json["articles"][0]["id"], article.to_string());
    assert_eq!(json["articles"][0]["title"], "How to wear a tuxedo");
    assert_eq!(json["articles"][0]["author_id"], author.to_string());
    assert_eq!(json["articles"][0]["magazine_id"], magazine.to_string());
}

//! Catalog 端到端场景

use pressroom::domain::{Catalog, CatalogError, Field, MagazineId, ValidationError};

#[test]
fn test_sue_writes_for_vogue() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();

    let id = catalog.add_article(sue, vogue, "Autumn Styles 2024").unwrap();
    let article = catalog.article(id).unwrap();

    let author = catalog.article_author(id).unwrap();
    let magazine = catalog.article_magazine(id).unwrap();
    assert_eq!(author.name().as_str(), "Sue");
    assert_eq!(magazine.name().as_str(), "Vogue");
    assert_eq!(article.title().as_str(), "Autumn Styles 2024");

    let magazines: Vec<MagazineId> = author.magazines(&catalog).iter().map(|m| m.id()).collect();
    assert_eq!(magazines, vec![vogue]);

    let topics: Vec<&str> = author
        .topic_areas(&catalog)
        .iter()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(topics, vec!["Fashion"]);
}

#[test]
fn test_one_character_magazine_name_rejected() {
    let mut catalog = Catalog::new();
    let err = catalog.add_magazine("A", "Tech").unwrap_err();
    assert_eq!(err.field(), Field::MagazineName);
    assert!(catalog.magazines().is_empty());
}

#[test]
fn test_new_magazine_has_no_articles() {
    let mut catalog = Catalog::new();
    for name in ["AB", "Wired", "Sixteen chars!!!"] {
        let id = catalog.add_magazine(name, "Tech").unwrap();
        assert!(catalog.magazine(id).unwrap().articles().is_empty());
        assert!(catalog.magazine_articles(id).unwrap().is_empty());
    }
}

#[test]
fn test_short_title_leaves_registry_unchanged() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    catalog.add_article(sue, vogue, "Autumn Styles 2024").unwrap();
    let before = catalog.article_count();

    let err = catalog.create_article(sue, vogue, "Hi").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::Length {
            field: Field::ArticleTitle,
            actual: 2,
            ..
        })
    ));
    assert_eq!(catalog.article_count(), before);
    assert_eq!(catalog.magazine(vogue).unwrap().articles().len(), before);
}

#[test]
fn test_title_round_trips_at_bounds() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();

    for title in ["Short".to_string(), "t".repeat(50), "Écrit à Paris".to_string()] {
        let id = catalog.create_article(sue, vogue, title.clone()).unwrap();
        assert_eq!(catalog.article(id).unwrap().title().as_str(), title);
    }
    assert!(catalog.create_article(sue, vogue, "t".repeat(51)).is_err());
    assert!(catalog.create_article(sue, vogue, "four").is_err());
    assert_eq!(catalog.article_count(), 3);
}

#[test]
fn test_same_category_topics_deduplicated() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let wired = catalog.add_magazine("Wired", "Tech").unwrap();
    let verge = catalog.add_magazine("The Verge", "Tech").unwrap();
    catalog.add_article(sue, wired, "Rust in Production").unwrap();
    catalog.add_article(sue, verge, "Foldable Phones").unwrap();

    assert_eq!(catalog.author_magazines(sue).unwrap().len(), 2);
    assert_eq!(catalog.author_topic_areas(sue).unwrap().len(), 1);
}

#[test]
fn test_article_registered_exactly_once() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    let id = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

    let in_registry = catalog.articles().iter().filter(|a| a.id() == id).count();
    let in_magazine = catalog
        .magazine(vogue)
        .unwrap()
        .articles()
        .iter()
        .filter(|a| **a == id)
        .count();
    assert_eq!(in_registry, 1);
    assert_eq!(in_magazine, 1);
}

#[test]
fn test_author_articles_reads_are_stable() {
    let mut catalog = Catalog::new();
    let sue = catalog.add_author("Sue").unwrap();
    let bob = catalog.add_author("Bob").unwrap();
    let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
    catalog.add_article(sue, vogue, "Autumn Styles 2024").unwrap();
    catalog.add_article(bob, vogue, "Winter Coats").unwrap();
    catalog.add_article(sue, vogue, "Spring Colors").unwrap();

    let first = catalog.author_articles(sue).unwrap();
    let second = catalog.author_articles(sue).unwrap();
    assert_eq!(first, second);

    let titles: Vec<&str> = first.iter().map(|a| a.title().as_str()).collect();
    assert_eq!(titles, vec!["Autumn Styles 2024", "Spring Colors"]);
}

//! End-to-end: configuration → catalog load → landing page.

use std::path::PathBuf;

use storefront_catalog::{CatalogViewModel, HomePage, home::PLACEHOLDER_IMAGE};
use storefront_core::{CatalogError, EntityId};
use storefront_home::{Config, LoadError, load_catalog, render_home};

fn write_catalog(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("storefront-{}-{name}.json", std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

fn card_ids(cards: &[storefront_catalog::ProductCard]) -> Vec<EntityId> {
    cards.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn bundled_catalog_renders_all_sections() {
    let page = render_home(&Config::default()).unwrap();

    assert_eq!(page.hero.badge, "New arrivals");
    assert_eq!(
        card_ids(&page.featured.items),
        vec![EntityId::Int(1), EntityId::Int(2), EntityId::Int(3), EntityId::Int(4)]
    );

    let categories: Vec<&str> = page.categories.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        categories,
        vec!["Clothes", "Electronics", "Furniture", "Shoes", "Miscellaneous"]
    );

    // Products 4 and 6 share a timestamp; catalog order breaks the tie.
    assert_eq!(
        card_ids(&page.latest.items),
        vec![EntityId::Int(4), EntityId::Int(6), EntityId::Int(9), EntityId::Int(2)]
    );
}

#[test]
fn bundled_catalog_page_serializes_to_json() {
    let page = render_home(&Config::default()).unwrap();
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["featured"]["title"], "Featured products");
    assert_eq!(json["featured"]["view_all"]["href"], "/products");
    assert_eq!(json["latest"]["items"][0]["href"], "/products/4");
    assert!(json["categories"].get("view_all").is_none());
}

#[test]
fn catalog_file_is_loaded_from_config() {
    let path = write_catalog(
        "scenario-a",
        r#"[
            {"id": "p1", "title": "One", "price": 1, "images": [], "creationAt": "2023-01-01",
             "category": {"id": 1, "name": "Shoes", "image": "s.png"}},
            {"id": "p2", "title": "Two", "price": 2, "images": [], "creationAt": "2023-06-01",
             "category": {"id": 2, "name": "Hats", "image": "h.png"}},
            {"id": "p3", "title": "Three", "price": 3, "images": [], "creationAt": "2023-03-01",
             "category": {"id": 1, "name": "Shoes-dup", "image": "s.png"}}
        ]"#,
    );
    let config = Config {
        catalog_path: Some(path.clone()),
        view: CatalogViewModel::new(4, 2),
    };

    let page = render_home(&config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(page.featured.items.len(), 3);
    assert_eq!(
        card_ids(&page.latest.items),
        vec![EntityId::from("p2"), EntityId::from("p3")]
    );
    let categories: Vec<&str> = page.categories.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(categories, vec!["Shoes", "Hats"]);
    assert!(page.featured.items.iter().all(|c| c.image == PLACEHOLDER_IMAGE));
}

#[test]
fn malformed_timestamp_surfaces_as_catalog_error() {
    let path = write_catalog(
        "bad-timestamp",
        r#"[{"id": 5, "title": "Bad", "price": 1, "creationAt": "someday",
             "category": {"id": 1, "name": "Shoes", "image": "s.png"}}]"#,
    );
    let config = Config {
        catalog_path: Some(path.clone()),
        ..Config::default()
    };

    let err = render_home(&config).unwrap_err();
    std::fs::remove_file(&path).ok();

    match err {
        LoadError::Catalog(CatalogError::DataValidation { product_id, .. }) => {
            assert_eq!(product_id, EntityId::Int(5));
        }
        other => panic!("Expected DataValidation error, got {other:?}"),
    }
}

#[test]
fn zero_sized_sections_still_list_categories() {
    let catalog = load_catalog(None).unwrap();
    let page = HomePage::build(&catalog, &CatalogViewModel::new(0, 0)).unwrap();

    assert!(page.featured.items.is_empty());
    assert!(page.latest.items.is_empty());
    assert_eq!(page.categories.items.len(), 5);
}

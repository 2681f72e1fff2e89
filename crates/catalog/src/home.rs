//! Landing page data: hero banner plus the three catalog sections.
//!
//! The page is plain data (serializable); laying it out is up to whatever
//! renders it.

use serde::Serialize;

use storefront_core::{CatalogResult, EntityId};

use crate::product::{Category, Product};
use crate::view::{CatalogViewModel, category_conflicts};

/// Image shown for products that have none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// Listing page every section links to.
pub const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn view_all() -> Self {
        Self::new("View all", PRODUCTS_PATH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroBanner {
    pub badge: String,
    pub heading: String,
    pub subtitle: String,
    pub call_to_action: Link,
}

impl Default for HeroBanner {
    fn default() -> Self {
        Self {
            badge: "New arrivals".to_string(),
            heading: "Discover products you’ll love".to_string(),
            subtitle: "Browse categories, view latest items, and manage products & users in one simple app."
                .to_string(),
            call_to_action: Link::new("Explore products", PRODUCTS_PATH),
        }
    }
}

/// Card for a single product, linking to its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: EntityId,
    pub title: String,
    pub price: String,
    pub category_name: String,
    pub description: String,
    pub image: String,
    pub href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: format!("${}", product.price),
            category_name: product
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            description: product.description.clone(),
            image: product.primary_image().unwrap_or(PLACEHOLDER_IMAGE).to_string(),
            href: format!("{PRODUCTS_PATH}/{}", product.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub id: EntityId,
    pub name: String,
    pub image: String,
    pub hint: String,
    pub href: String,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            image: category.image.clone(),
            hint: "Tap to browse".to_string(),
            href: PRODUCTS_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all: Option<Link>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub hero: HeroBanner,
    pub featured: Section<ProductCard>,
    pub categories: Section<CategoryCard>,
    pub latest: Section<ProductCard>,
}

impl HomePage {
    /// Derive every section from the catalog.
    ///
    /// Divergent duplicate categories are logged, not fatal; the first record
    /// seen for an id is the one displayed.
    pub fn build(catalog: &[Product], view: &CatalogViewModel) -> CatalogResult<Self> {
        for conflict in category_conflicts(catalog) {
            tracing::warn!(
                product_id = %conflict.product_id,
                category_id = %conflict.kept.id,
                kept = %conflict.kept.name,
                discarded = %conflict.discarded.name,
                "conflicting category records; keeping the first one seen"
            );
        }

        let featured = view.featured(catalog);
        let categories = view.unique_categories(catalog)?;
        let latest = view.latest(catalog)?;

        Ok(Self {
            hero: HeroBanner::default(),
            featured: Section {
                title: "Featured products".to_string(),
                view_all: Some(Link::view_all()),
                items: featured.into_iter().map(ProductCard::from).collect(),
            },
            categories: Section {
                title: "Categories".to_string(),
                view_all: None,
                items: categories.into_iter().map(CategoryCard::from).collect(),
            },
            latest: Section {
                title: "Latest products".to_string(),
                view_all: Some(Link::view_all()),
                items: latest.into_iter().map(ProductCard::from).collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::CatalogError;

    fn catalog() -> Vec<Product> {
        let shoes = Category::new(1, "Shoes", "https://img.example/shoes.png");
        let hats = Category::new(2, "Hats", "https://img.example/hats.png");
        vec![
            Product::new(1, "Runner", 49.5, "2023-01-01T00:00:00.000Z")
                .with_category(shoes.clone())
                .with_images(["https://img.example/runner.png", "https://img.example/runner-2.png"])
                .with_description("Light running shoe"),
            Product::new(2, "Cap", 15.0, "2023-06-01T00:00:00.000Z").with_category(hats),
            Product::new(3, "Boot", 120.0, "2023-03-01T00:00:00.000Z").with_category(shoes),
        ]
    }

    #[test]
    fn product_card_uses_first_image_and_formats_price() {
        let catalog = catalog();
        let card = ProductCard::from(&catalog[0]);
        assert_eq!(card.image, "https://img.example/runner.png");
        assert_eq!(card.price, "$49.5");
        assert_eq!(card.category_name, "Shoes");
        assert_eq!(card.href, "/products/1");
    }

    #[test]
    fn product_card_falls_back_to_placeholder_image() {
        let catalog = catalog();
        let card = ProductCard::from(&catalog[1]);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.price, "$15");
    }

    #[test]
    fn build_fills_every_section() {
        let page = HomePage::build(&catalog(), &CatalogViewModel::new(2, 2)).unwrap();

        assert_eq!(page.hero.call_to_action.href, PRODUCTS_PATH);
        let featured: Vec<&str> = page.featured.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(featured, vec!["Runner", "Cap"]);
        let categories: Vec<&str> = page.categories.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(categories, vec!["Shoes", "Hats"]);
        let latest: Vec<&str> = page.latest.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(latest, vec!["Cap", "Boot"]);
        assert!(page.categories.view_all.is_none());
    }

    #[test]
    fn build_propagates_timestamp_errors() {
        let mut broken = catalog();
        broken[2].creation_at = "later".to_string();

        let err = HomePage::build(&broken, &CatalogViewModel::default()).unwrap_err();
        assert_eq!(err.product_id(), &EntityId::Int(3));
        assert!(err.to_string().contains("creationAt"));
    }

    #[test]
    fn build_propagates_missing_category() {
        let mut broken = catalog();
        broken[1].category = None;

        match HomePage::build(&broken, &CatalogViewModel::default()) {
            Err(CatalogError::DataValidation { product_id, reason }) => {
                assert_eq!(product_id, EntityId::Int(2));
                assert_eq!(reason, "missing category");
            }
            other => panic!("Expected DataValidation error, got {other:?}"),
        }
    }

    #[test]
    fn build_of_empty_catalog_has_empty_sections() {
        let page = HomePage::build(&[], &CatalogViewModel::default()).unwrap();
        assert!(page.featured.items.is_empty());
        assert!(page.categories.items.is_empty());
        assert!(page.latest.items.is_empty());
    }
}

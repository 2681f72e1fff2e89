use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, CatalogResult, EntityId};

/// Category embedded in every product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            slug: None,
        }
    }

    /// Same id, different display fields.
    pub fn diverges_from(&self, other: &Category) -> bool {
        self.id == other.id && (self.name != other.name || self.image != other.image)
    }
}

/// A catalog entry as delivered by the catalog feed.
///
/// `creation_at` is kept as the raw feed string; it is only parsed when
/// recency ordering is requested (see [`Product::created_at`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
    pub creation_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        price: f64,
        creation_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            images: Vec::new(),
            category: None,
            creation_at: creation_at.into(),
            slug: None,
            updated_at: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The embedded category, or a validation error naming this product.
    pub fn require_category(&self) -> CatalogResult<&Category> {
        self.category
            .as_ref()
            .ok_or_else(|| CatalogError::data_validation(&self.id, "missing category"))
    }

    /// Creation instant, or a validation error naming this product.
    pub fn created_at(&self) -> CatalogResult<DateTime<Utc>> {
        parse_timestamp(&self.creation_at).map_err(|e| {
            CatalogError::data_validation(
                &self.id,
                format!("unparsable creationAt {:?}: {e}", self.creation_at),
            )
        })
    }
}

/// ISO 8601 shapes with an explicit offset (`Z`, `+02:00`, `+0200`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// ISO 8601 shapes without an offset, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a feed timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2023-01-01T10:00:00.000Z`), ISO 8601 date-times with
/// second or minute precision, with or without an offset (`2023-01-01T10:00Z`,
/// `2023-01-01T10:00:00+0200`, `2023-01-01T10:00`; no offset means UTC), and a
/// bare date (`2023-01-01`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(rfc3339_err)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductStatus {
    /// Available for sale
    #[default]
    Active,
    Inactive,
    OutOfStock,
    Discontinued,
    Draft,
}

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    #[default]
    General,
    Electronics,
    Clothing,
    Food,
    Books,
    HomeGarden,
    Sports,
    Toys,
    Health,
    Automotive,
    Other,
}

/// A catalog product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on insert
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price: i64,
    /// `price` in currency units
    pub display_price: f64,
    pub stock: i32,
    pub category: ProductCategory,
    pub status: ProductStatus,
    /// Stock Keeping Unit, unique when present
    pub sku: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new product from a creation payload with a fresh UUIDv7.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        let price = input.price.unwrap_or_default();
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            description: input.description,
            price,
            display_price: cents_to_display(price),
            stock: input.stock,
            category: input.category,
            status: input.status,
            sku: input.sku,
            brand: input.brand,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

fn cents_to_display(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Payload for `POST /products`.
///
/// `name` and `price` are optional at the serde level so that a missing field
/// is reported by `validate()` together with every other violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(required, length(min = 1, max = 200))]
    #[schema(required = true, example = "Mechanical keyboard")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Price in cents
    #[validate(required, range(min = 0))]
    #[schema(required = true, example = 12999)]
    pub price: Option<i64>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub status: ProductStatus,
    #[validate(length(max = 50))]
    pub sku: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateProduct {
    /// Minimal valid payload; used by seeding and tests.
    pub fn named(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }
}

//! In-process product store.
//!
//! Products are kept in insertion order, which is also the listing order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(existing: &[Product], input: &CreateProduct) -> ProductResult<()> {
    if let Some(name) = input.name.as_deref() {
        let lowered = name.to_lowercase();
        if existing.iter().any(|p| p.name.to_lowercase() == lowered) {
            return Err(ProductError::DuplicateName(name.to_string()));
        }
    }

    if let Some(sku) = input.sku.as_deref() {
        if existing.iter().any(|p| p.sku.as_deref() == Some(sku)) {
            return Err(ProductError::DuplicateSku(sku.to_string()));
        }
    }

    Ok(())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn slice(&self, offset: u64, limit: u64) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(products.iter().skip(start).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        // Uniqueness check and push share one write lock.
        let mut products = self.products.write().await;
        check_unique(&products, &input)?;

        let product = Product::new(input);
        products.push(product.clone());
        tracing::debug!(product_id = %product.id, "Product stored");
        Ok(product)
    }
}

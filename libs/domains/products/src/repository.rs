use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// Implementations own ordering, uniqueness and timeouts. `slice` must return
/// products in a stable order so that consecutive pages do not overlap.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Total number of stored products
    async fn count(&self) -> ProductResult<u64>;

    /// At most `limit` products starting at `offset`
    async fn slice(&self, offset: u64, limit: u64) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Stores a new product, assigning its id and timestamps.
    ///
    /// Fails with `DuplicateName` (case-insensitive) or `DuplicateSku`.
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;
}

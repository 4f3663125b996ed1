//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::pagination::{PageQuery, PageRequest, PageResult};
use crate::repository::ProductRepository;

/// Product listing, lookup and creation on top of a [`ProductRepository`].
///
/// Payloads reaching [`ProductService::create_product`] are expected to have
/// passed the request validator already.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    pagination: PaginationConfig,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            pagination: self.pagination,
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            pagination: PaginationConfig::default(),
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// List products from a raw `page`/`limit` query
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &PageQuery) -> ProductResult<PageResult> {
        let request = PageRequest::from_query(query, &self.pagination);
        self.list_page(request).await
    }

    /// List one page of products
    #[instrument(skip(self))]
    pub async fn list_page(&self, request: PageRequest) -> ProductResult<PageResult> {
        let total = self.repository.count().await?;
        let offset = request.offset();

        if offset >= total {
            tracing::debug!(offset, total, "Requested page is past the end");
            return Ok(PageResult::empty(request, total));
        }

        let mut products = self.repository.slice(offset, request.limit).await?;
        let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
        if products.len() > limit {
            tracing::warn!(
                returned = products.len(),
                limit,
                "Store returned more products than requested"
            );
            products.truncate(limit);
        }

        Ok(PageResult {
            page: request.page,
            limit: request.limit,
            total_products: total,
            products,
        })
    }

    /// Get a product by its identifier. Identifiers that are not UUIDs are not found.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let uuid = Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))?;

        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = self.repository.insert(input).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryProductRepository;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product::new(CreateProduct::named(format!("Product {i}"), i as i64)))
            .collect()
    }

    #[tokio::test]
    async fn test_list_third_page_of_twenty_five() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().times(1).returning(|| Ok(25));
        mock.expect_slice()
            .with(eq(20), eq(10))
            .times(1)
            .returning(|_, _| Ok(products(5)));

        let service = ProductService::new(mock);
        let page = service
            .list_products(&PageQuery::new(Some("3"), Some("10")))
            .await
            .unwrap();

        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_products, 25);
        assert_eq!(page.products.len(), 5);
    }

    #[tokio::test]
    async fn test_invalid_query_uses_defaults() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().returning(|| Ok(3));
        mock.expect_slice()
            .with(eq(0), eq(10))
            .returning(|_, _| Ok(products(3)));

        let service = ProductService::new(mock);
        let page = service
            .list_products(&PageQuery::new(Some("abc"), Some("-4")))
            .await
            .unwrap();

        assert_eq!((page.page, page.limit), (1, 10));
        assert_eq!(page.products.len(), 3);
    }

    #[tokio::test]
    async fn test_page_past_end_skips_slice() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().returning(|| Ok(25));
        mock.expect_slice().never();

        let service = ProductService::new(mock);
        let page = service
            .list_page(PageRequest { page: 4, limit: 10 })
            .await
            .unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.total_products, 25);
    }

    #[tokio::test]
    async fn test_over_delivering_store_is_truncated() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().returning(|| Ok(50));
        mock.expect_slice().returning(|_, _| Ok(products(12)));

        let service = ProductService::new(mock);
        let page = service
            .list_page(PageRequest { page: 1, limit: 5 })
            .await
            .unwrap();

        assert_eq!(page.products.len(), 5);
    }

    #[tokio::test]
    async fn test_configured_max_limit_is_applied() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().returning(|| Ok(500));
        mock.expect_slice()
            .with(eq(0), eq(100))
            .returning(|_, _| Ok(products(100)));

        let service = ProductService::new(mock)
            .with_pagination(PaginationConfig::default().with_max_limit(100));
        let page = service
            .list_products(&PageQuery::new(None, Some("1000")))
            .await
            .unwrap();

        assert_eq!(page.limit, 100);
    }

    #[tokio::test]
    async fn test_list_store_failure() {
        let mut mock = MockProductRepository::new();
        mock.expect_count()
            .returning(|| Err(ProductError::Store("timeout".into())));

        let service = ProductService::new(mock);
        let err = service.list_products(&PageQuery::default()).await.unwrap_err();
        assert!(matches!(err, ProductError::Store(_)));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let product = Product::new(CreateProduct::named("Chair", 4500));
        let id = product.id;

        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(product.clone())));

        let service = ProductService::new(mock);
        let found = service.get_product(&id.to_string()).await.unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn test_get_product_missing() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock);
        let id = Uuid::now_v7().to_string();
        let err = service.get_product(&id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(ref missing) if *missing == id));
    }

    #[tokio::test]
    async fn test_get_product_malformed_id_skips_store() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id().never();

        let service = ProductService::new(mock);
        let err = service.get_product("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_product_passes_through_conflict() {
        let mut mock = MockProductRepository::new();
        mock.expect_insert()
            .times(1)
            .returning(|input| Err(ProductError::DuplicateName(input.name.unwrap_or_default())));

        let service = ProductService::new(mock);
        let err = service
            .create_product(CreateProduct::named("Lamp", 100))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn test_create_product() {
        let mut mock = MockProductRepository::new();
        mock.expect_insert().returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock);
        let product = service
            .create_product(CreateProduct::named("Lamp", 100))
            .await
            .unwrap();
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.price, 100);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn listed_page_is_bounded_by_limit_and_remaining(
            total in 0u64..150,
            page in 1u64..30,
            limit in 1u64..40,
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            let result = runtime.block_on(async {
                let repository = InMemoryProductRepository::new();
                for i in 0..total {
                    repository
                        .insert(CreateProduct::named(format!("Product {i}"), i as i64))
                        .await
                        .unwrap();
                }
                ProductService::new(repository)
                    .list_page(PageRequest { page, limit })
                    .await
                    .unwrap()
            });

            let remaining = total.saturating_sub(limit * (page - 1));
            prop_assert_eq!(result.products.len() as u64, limit.min(remaining));
            prop_assert_eq!(result.total_products, total);
            prop_assert_eq!((result.page, result.limit), (page, limit));
        }
    }
}

//! HTTP handlers for Products API
//!
//! Every route runs behind a guard chain before its handler:
//! - `GET /`, `GET /{id}`: auth
//! - `POST /`: payload validation, then auth

use axum::{
    Extension, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::Uri,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use axum_helpers::{
    ApiResponse, AuthGuard, Authenticator, Claims, GuardChain, PayloadGuard, Validated,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    run_guards,
};
use std::sync::Arc;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductCategory, ProductStatus};
use crate::pagination::{PageQuery, PageResult};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(Product, CreateProduct, ProductStatus, ProductCategory, PageResult),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Guards for read routes.
pub fn read_guards(authenticator: Arc<dyn Authenticator>) -> GuardChain {
    GuardChain::new().then(AuthGuard::new(authenticator))
}

/// Guards for `POST /`. The payload is checked before the caller.
pub fn create_guards(authenticator: Arc<dyn Authenticator>) -> GuardChain {
    GuardChain::new()
        .then(PayloadGuard::<CreateProduct>::new())
        .then(AuthGuard::new(authenticator))
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    authenticator: Arc<dyn Authenticator>,
) -> Router {
    let shared_service = Arc::new(service);
    let read = read_guards(Arc::clone(&authenticator));
    let create = create_guards(authenticator);

    Router::new()
        .route(
            "/",
            get(list_products)
                .route_layer(from_fn_with_state(read.clone(), run_guards))
                .merge(post(create_product).route_layer(from_fn_with_state(create, run_guards))),
        )
        .route(
            "/{id}",
            get(get_product).route_layer(from_fn_with_state(read, run_guards)),
        )
        .with_state(shared_service)
}

/// List products, one page at a time
///
/// Invalid or missing `page`/`limit` values fall back to page 1 and the default page size.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(PageQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of products", body = ApiResponse<PageResult>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ProductResult<ApiResponse<PageResult>> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!("Unparseable listing query, using defaults: {}", rejection);
            PageQuery::default()
        }
    };

    let page = service.list_products(&query).await?;
    Ok(ApiResponse::ok(page))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Extension(claims): Extension<Claims>,
    Extension(Validated(input)): Extension<Validated<CreateProduct>>,
) -> ProductResult<ApiResponse<Product>> {
    tracing::debug!(created_by = %claims.sub, "Creating product");
    let product = service.create_product(input).await?;
    Ok(ApiResponse::created(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> ProductResult<ApiResponse<Product>> {
    // An id that does not decode to UTF-8 cannot name a product.
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::debug!("Undecodable product id: {}", rejection);
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            return Err(ProductError::NotFound(raw.to_string()));
        }
    };

    let product = service.get_product(&id).await?;
    Ok(ApiResponse::ok(product))
}

//! Page/limit coercion for product listing.
//!
//! Coercion is lenient: a missing, non-numeric or non-positive value falls
//! back to its default instead of rejecting the request.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::PaginationConfig;
use crate::models::Product;

pub const DEFAULT_PAGE: u64 = 1;

/// Raw listing query, exactly as sent by the client.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, default 1
    #[param(value_type = Option<u64>, example = 1)]
    pub page: Option<String>,
    /// Page size, default 10
    #[param(value_type = Option<u64>, example = 10)]
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }
}

/// Normalized page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
}

impl PageRequest {
    /// Coerces a raw query using the configured limits. Never fails.
    pub fn from_query(query: &PageQuery, config: &PaginationConfig) -> Self {
        let page = parse_positive(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(query.limit.as_deref()).unwrap_or(config.default_limit);
        let limit = match config.max_limit {
            Some(max) => limit.min(max).max(1),
            None => limit,
        };

        Self { page, limit }
    }

    /// Number of items before this page, saturating at `u64::MAX`.
    pub fn offset(&self) -> u64 {
        self.limit.saturating_mul(self.page.saturating_sub(1))
    }
}

/// One page of products plus the total size of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageResult {
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalProducts")]
    pub total_products: u64,
    pub products: Vec<Product>,
}

impl PageResult {
    pub fn empty(request: PageRequest, total_products: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total_products,
            products: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coerce(page: Option<&str>, limit: Option<&str>) -> PageRequest {
        PageRequest::from_query(&PageQuery::new(page, limit), &PaginationConfig::default())
    }

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(coerce(None, None), PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        for (page, limit) in [
            ("abc", "xyz"),
            ("0", "0"),
            ("-3", "-1"),
            ("", " "),
            ("1.5", "2e3"),
        ] {
            assert_eq!(
                coerce(Some(page), Some(limit)),
                PageRequest { page: 1, limit: 10 },
                "page={page:?} limit={limit:?}"
            );
        }
    }

    #[test]
    fn test_valid_values_are_kept() {
        assert_eq!(coerce(Some("3"), Some("25")), PageRequest { page: 3, limit: 25 });
        assert_eq!(coerce(Some(" 2 "), None), PageRequest { page: 2, limit: 10 });
    }

    #[test]
    fn test_max_limit_clamps() {
        let config = PaginationConfig::default().with_max_limit(50);
        let request = PageRequest::from_query(&PageQuery::new(None, Some("500")), &config);
        assert_eq!(request.limit, 50);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(PageRequest { page: 3, limit: 10 }.offset(), 20);
        assert_eq!(
            PageRequest {
                page: u64::MAX,
                limit: u64::MAX
            }
            .offset(),
            u64::MAX
        );
    }

    #[test]
    fn test_zero_max_limit_still_yields_one() {
        let config = PaginationConfig::default().with_max_limit(0);
        let request = PageRequest::from_query(&PageQuery::new(None, Some("5")), &config);
        assert_eq!(request.limit, 1);
    }

    #[test]
    fn test_page_result_wire_format() {
        let result = PageResult::empty(PageRequest { page: 2, limit: 5 }, 7);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "limit": 5, "totalProducts": 7, "products": []})
        );
    }

    proptest! {
        #[test]
        fn coercion_never_yields_zero(page in ".*", limit in ".*") {
            let request = coerce(Some(&page), Some(&limit));
            prop_assert!(request.page >= 1);
            prop_assert!(request.limit >= 1);
        }

        #[test]
        fn numeric_input_round_trips(page in 1u64..10_000, limit in 1u64..10_000) {
            let request = coerce(Some(&page.to_string()), Some(&limit.to_string()));
            prop_assert_eq!(request, PageRequest { page, limit });
        }
    }
}

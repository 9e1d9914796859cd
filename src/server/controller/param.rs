//! Query string parameters shared by listing endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// Highest page whose offset fits a SQL `OFFSET` at the largest page size.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// Resolved 1-indexed page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// Applies defaults to raw query values.
    ///
    /// A missing, non-numeric or below-1 page becomes 1 and pages above [`MAX_PAGE`] are
    /// capped. A missing, non-numeric or out-of-range limit becomes 10.
    pub fn resolve(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_number(page)
            .filter(|page| *page >= 1)
            .map_or(DEFAULT_PAGE, |page| page.min(MAX_PAGE));
        let limit = parse_number(limit)
            .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            .unwrap_or(DEFAULT_LIMIT);

        Self { page, limit }
    }
}

fn parse_number(value: Option<&str>) -> Option<u64> {
    value.and_then(|value| value.trim().parse().ok())
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1 (default: 1)
    #[param(value_type = Option<u64>)]
    pub page: Option<String>,
    /// Items per page, 1 to 100 (default: 10)
    #[param(value_type = Option<u64>)]
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::resolve(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopListParams {
    /// Only shops of this type: clinic, salon, parlor or other
    #[serde(rename = "type")]
    pub shop_type: Option<String>,
    /// Only shops owned by this user ID
    pub owner: Option<i32>,
    #[param(value_type = Option<u64>)]
    pub page: Option<String>,
    #[param(value_type = Option<u64>)]
    pub limit: Option<String>,
}

impl ShopListParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::resolve(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopSearchParams {
    /// Text to look for in shop names and types
    pub query: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListParams {
    /// Only appointments with this status
    pub status: Option<String>,
    #[param(value_type = Option<u64>)]
    pub page: Option<String>,
    #[param(value_type = Option<u64>)]
    pub limit: Option<String>,
}

impl AppointmentListParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::resolve(self.page.as_deref(), self.limit.as_deref())
    }
}

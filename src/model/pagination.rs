use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of results along with the numbers needed to render pagination controls.
///
/// Pages are 1-indexed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

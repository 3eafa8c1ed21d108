use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset pagination envelope with navigation links.
///
/// `previous_page` and `next_page` are `null` at the respective ends of the
/// collection.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PageDto<T> {
    pub count: u64,
    pub first_page: String,
    pub last_page: String,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    pub results: Vec<T>,
}

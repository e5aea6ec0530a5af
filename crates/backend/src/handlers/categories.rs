use axum::Json;

use contracts::category::{CategoryInfo, CategoryKey};

/// GET /api/categories
pub async fn list_all() -> Json<Vec<CategoryInfo>> {
    Json(CategoryKey::all().into_iter().map(CategoryInfo::of).collect())
}

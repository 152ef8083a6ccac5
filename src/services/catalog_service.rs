use crate::entities::{plan_entity as plans, product_entity as products};
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone)]
pub struct CatalogService {
    pool: DatabaseConnection,
}

impl CatalogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Active products in id order.
    pub async fn active_products(&self) -> AppResult<Vec<products::Model>> {
        let rows = products::Entity::find()
            .filter(products::Column::IsActive.eq(true))
            .order_by_asc(products::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Active products, optionally only those tagged with `skin_type`.
    ///
    /// Tags live in a JSON column, so the match happens here rather than in SQL.
    pub async fn list_products(&self, skin_type: Option<&str>) -> AppResult<Vec<ProductResponse>> {
        let skin_type = skin_type.map(str::trim).filter(|s| !s.is_empty());
        let products = self
            .active_products()
            .await?
            .into_iter()
            .filter(|p| skin_type.is_none_or(|t| p.skin_types.contains_tag(t)))
            .map(ProductResponse::from)
            .collect();
        Ok(products)
    }

    pub async fn get_product(&self, product_id: i64) -> AppResult<products::Model> {
        products::Entity::find_by_id(product_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Active plans, cheapest first.
    pub async fn list_plans(&self) -> AppResult<Vec<PlanResponse>> {
        let rows = plans::Entity::find()
            .filter(plans::Column::IsActive.eq(true))
            .order_by_asc(plans::Column::Price)
            .order_by_asc(plans::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(PlanResponse::from).collect())
    }
}

use crate::entities::products::ProductCategory;
use crate::entities::subscription_plans::PlanType;
use crate::entities::{TagList, plan_entity, product_entity};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: ProductCategory,
    pub ingredients: TagList,
    pub skin_types: TagList,
    pub benefits: TagList,
    pub usage_instructions: String,
    pub shelf_life_hours: i32,
    /// Paise
    pub price: i64,
    pub is_active: bool,
}

impl From<product_entity::Model> for ProductResponse {
    fn from(p: product_entity::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            ingredients: p.ingredients,
            skin_types: p.skin_types,
            benefits: p.benefits,
            usage_instructions: p.usage_instructions,
            shelf_life_hours: p.shelf_life_hours,
            price: p.price,
            is_active: p.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanResponse {
    pub id: i64,
    pub plan_type: PlanType,
    /// Paise
    pub price: i64,
    pub duration_days: i32,
    pub features: TagList,
    pub is_active: bool,
}

impl From<plan_entity::Model> for PlanResponse {
    fn from(p: plan_entity::Model) -> Self {
        Self {
            id: p.id,
            plan_type: p.plan_type,
            price: p.price,
            duration_days: p.duration_days,
            features: p.features,
            is_active: p.is_active,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Keep only products tagged with this skin type
    pub skin_type: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientQuery {
    /// Product to describe; general sourcing information when absent
    pub product_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanListResponse {
    pub subscriptions: Vec<PlanResponse>,
}

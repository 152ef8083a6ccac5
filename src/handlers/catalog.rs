use crate::models::*;
use crate::services::{CatalogService, content};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/products",
    tag = "catalog",
    params(ProductQuery),
    responses(
        (status = 200, description = "Active products", body = ProductListResponse)
    )
)]
pub async fn list_products(
    catalog_service: web::Data<CatalogService>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse> {
    match catalog_service.list_products(query.skin_type.as_deref()).await {
        Ok(products) => Ok(HttpResponse::Ok().json(ProductListResponse { products })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/products/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Product category showcase")
    )
)]
pub async fn product_categories() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(content::product_categories()))
}

#[utoipa::path(
    get,
    path = "/subscriptions",
    tag = "catalog",
    responses(
        (status = 200, description = "Active subscription plans", body = PlanListResponse)
    )
)]
pub async fn list_subscriptions(
    catalog_service: web::Data<CatalogService>,
) -> Result<HttpResponse> {
    match catalog_service.list_plans().await {
        Ok(subscriptions) => Ok(HttpResponse::Ok().json(PlanListResponse { subscriptions })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/ingredient-transparency",
    tag = "catalog",
    params(IngredientQuery),
    responses(
        (status = 200, description = "Ingredient and sourcing details"),
        (status = 404, description = "Product not found", body = ApiErrorResponse)
    )
)]
pub async fn ingredient_transparency(
    catalog_service: web::Data<CatalogService>,
    query: web::Query<IngredientQuery>,
) -> Result<HttpResponse> {
    let Some(product_id) = query.product_id else {
        return Ok(HttpResponse::Ok().json(content::general_ingredient_info()));
    };

    match catalog_service.get_product(product_id).await {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "product": ProductResponse::from(product),
            "ingredient_transparency": content::ingredient_details(),
            "sourcing_info": content::sourcing_info(),
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn catalog_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(list_products))
        .route("/products/categories", web::get().to(product_categories))
        .route("/subscriptions", web::get().to(list_subscriptions))
        .route(
            "/ingredient-transparency",
            web::get().to(ingredient_transparency),
        );
}

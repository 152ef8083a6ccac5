use crate::middlewares::CurrentUser;
use crate::models::*;
use crate::services::OrderService;
use crate::utils::PaginationParams;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/subscribe",
    tag = "order",
    request_body = SubscribeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscribed, first week of orders scheduled", body = SubscribeResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse),
        (status = 404, description = "Plan not found", body = ApiErrorResponse)
    )
)]
pub async fn subscribe(
    order_service: web::Data<OrderService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<SubscribeRequest>,
) -> Result<HttpResponse> {
    match order_service.subscribe(&user, request.subscription_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders in delivery order", body = OrderListResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn list_orders(
    order_service: web::Data<OrderService>,
    CurrentUser(user): CurrentUser,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match order_service.list_orders(user.id, &query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/today",
    tag = "order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders delivered today", body = TodayOrdersResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn today_orders(
    order_service: web::Data<OrderService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match order_service.today_orders(user.id).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(TodayOrdersResponse { orders })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/subscribe", web::post().to(subscribe))
        .route("/orders", web::get().to(list_orders))
        .route("/orders/today", web::get().to(today_orders));
}

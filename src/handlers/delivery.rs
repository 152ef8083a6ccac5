use crate::models::*;
use crate::services::DeliveryService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/delivery-zones",
    tag = "delivery",
    responses(
        (status = 200, description = "Active delivery zones", body = DeliveryZoneListResponse)
    )
)]
pub async fn list_zones(delivery_service: web::Data<DeliveryService>) -> Result<HttpResponse> {
    match delivery_service.list_zones().await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/check-delivery-availability",
    tag = "delivery",
    request_body = AvailabilityRequest,
    responses(
        (status = 200, description = "Whether the pincode is served", body = AvailabilityResponse),
        (status = 400, description = "Missing or malformed pincode", body = ApiErrorResponse)
    )
)]
pub async fn check_availability(
    delivery_service: web::Data<DeliveryService>,
    request: web::Json<AvailabilityRequest>,
) -> Result<HttpResponse> {
    match delivery_service
        .check_availability(request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn delivery_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/delivery-zones", web::get().to(list_zones))
        .route(
            "/check-delivery-availability",
            web::post().to(check_availability),
        );
}

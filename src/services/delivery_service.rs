use crate::entities::delivery_zone_entity as zones;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::validate_pincode;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

const COVERAGE_MESSAGE: &str = "Currently serving select metro areas with plans to expand soon!";

#[derive(Clone)]
pub struct DeliveryService {
    pool: DatabaseConnection,
}

impl DeliveryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    async fn active_zones(&self) -> AppResult<Vec<zones::Model>> {
        let rows = zones::Entity::find()
            .filter(zones::Column::IsActive.eq(true))
            .order_by_asc(zones::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_zones(&self) -> AppResult<DeliveryZoneListResponse> {
        let delivery_zones = self
            .active_zones()
            .await?
            .into_iter()
            .map(DeliveryZoneResponse::from)
            .collect();

        Ok(DeliveryZoneListResponse {
            delivery_zones,
            coverage_message: COVERAGE_MESSAGE.to_string(),
        })
    }

    pub async fn check_availability(
        &self,
        req: AvailabilityRequest,
    ) -> AppResult<AvailabilityResponse> {
        let raw = req
            .pincode
            .ok_or_else(|| AppError::ValidationError("Pincode is required".to_string()))?;
        let pincode = validate_pincode(&raw)?;

        let zone = self
            .active_zones()
            .await?
            .into_iter()
            .find(|z| z.pincodes.iter().any(|p| p == pincode));

        Ok(match zone {
            Some(zone) => AvailabilityResponse {
                available: true,
                message: format!("Great! We deliver to your area in {}", zone.zone_name),
                zone: Some(DeliveryZoneResponse::from(zone)),
                waitlist_option: None,
            },
            None => {
                log::info!("Delivery requested for uncovered pincode {pincode}");
                AvailabilityResponse {
                    available: false,
                    zone: None,
                    message: "Sorry, we don't deliver to your area yet. We're expanding soon!"
                        .to_string(),
                    waitlist_option: Some(true),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn request(pincode: Option<&str>) -> AvailabilityRequest {
        AvailabilityRequest {
            pincode: pincode.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_zones() {
        let svc = DeliveryService::new(test_pool().await);
        let resp = svc.list_zones().await.unwrap();
        assert_eq!(resp.delivery_zones.len(), 4);
        assert_eq!(resp.coverage_message, COVERAGE_MESSAGE);
        assert_eq!(
            resp.delivery_zones[0].delivery_slots.0.get("morning").map(String::as_str),
            Some("6-9")
        );
    }

    #[tokio::test]
    async fn test_covered_pincode() {
        let svc = DeliveryService::new(test_pool().await);
        let resp = svc.check_availability(request(Some("400050"))).await.unwrap();
        assert!(resp.available);
        assert_eq!(resp.zone.unwrap().zone_name, "Bandra-Andheri");
        assert!(resp.waitlist_option.is_none());
    }

    #[tokio::test]
    async fn test_uncovered_pincode_offers_waitlist() {
        let svc = DeliveryService::new(test_pool().await);
        let resp = svc.check_availability(request(Some("700001"))).await.unwrap();
        assert!(!resp.available);
        assert!(resp.zone.is_none());
        assert_eq!(resp.waitlist_option, Some(true));
    }

    #[tokio::test]
    async fn test_missing_or_malformed_pincode() {
        let svc = DeliveryService::new(test_pool().await);
        assert!(matches!(
            svc.check_availability(request(None)).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            svc.check_availability(request(Some("4000"))).await,
            Err(AppError::ValidationError(_))
        ));
    }
}

use crate::entities::feedback_entity as feedback;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{CatalogService, OrderService};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Informational loyalty points per submission.
pub const FEEDBACK_POINTS: i32 = 10;

fn check_scale(field: &str, value: i32) -> AppResult<()> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "{field} must be between 1 and 5"
        )))
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct FeedbackService {
    pool: DatabaseConnection,
    orders: OrderService,
    catalog: CatalogService,
}

impl FeedbackService {
    pub fn new(pool: DatabaseConnection, orders: OrderService, catalog: CatalogService) -> Self {
        Self {
            pool,
            orders,
            catalog,
        }
    }

    pub async fn submit(&self, user_id: i64, req: FeedbackRequest) -> AppResult<FeedbackResponse> {
        check_scale("rating", req.rating)?;
        if let Some(effectiveness) = req.effectiveness {
            check_scale("effectiveness", effectiveness)?;
        }

        let order = self.orders.find_user_order(user_id, req.order_id).await?;
        let product = self.catalog.get_product(req.product_id).await?;

        let saved = feedback::ActiveModel {
            user_id: Set(user_id),
            order_id: Set(order.id),
            product_id: Set(product.id),
            rating: Set(req.rating),
            skin_reaction: Set(req.skin_reaction),
            effectiveness: Set(req.effectiveness),
            texture_preference: Set(optional_text(req.texture_preference)),
            fragrance_preference: Set(optional_text(req.fragrance_preference)),
            comments: Set(req.comments.unwrap_or_default().trim().to_string()),
            would_reorder: Set(req.would_reorder.unwrap_or(true)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "User {} rated product {} {}/5 for order {}",
            user_id,
            product.id,
            saved.rating,
            order.order_number
        );

        Ok(FeedbackResponse {
            message: "Thank you for your feedback!".to_string(),
            points_earned: FEEDBACK_POINTS,
            feedback_id: saved.id,
        })
    }
}

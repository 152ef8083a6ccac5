use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::customization_preferences::{DeliveryTimePreference, Frequency, Packaging};
use crate::entities::orders::{DeliverySlot, OrderStatus};
use crate::entities::products::ProductCategory;
use crate::entities::skin_diary_entries::SkinCondition;
use crate::entities::subscription_plans::PlanType;
use crate::entities::user_feedback::SkinReaction;
use crate::entities::weather_data::WeatherCondition;
use crate::entities::{DeliverySlots, TagList};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::catalog::list_products,
        handlers::catalog::product_categories,
        handlers::catalog::list_subscriptions,
        handlers::catalog::ingredient_transparency,
        handlers::profile::skin_quiz,
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        handlers::profile::get_preferences,
        handlers::profile::save_preferences,
        handlers::order::subscribe,
        handlers::order::list_orders,
        handlers::order::today_orders,
        handlers::delivery::list_zones,
        handlers::delivery::check_availability,
        handlers::freshness::weather_adaptive_products,
        handlers::freshness::personalized_routine,
        handlers::freshness::fresh_batches,
        handlers::freshness::daily_fresh_report,
        handlers::engagement::submit_feedback,
        handlers::engagement::list_diary,
        handlers::engagement::create_diary_entry,
        handlers::engagement::referral_dashboard,
        handlers::engagement::create_referral,
        handlers::engagement::community_tips,
        handlers::engagement::sustainability_impact,
    ),
    components(
        schemas(
            ApiErrorResponse,
            ApiError,
            TagList,
            DeliverySlots,
            PlanType,
            ProductCategory,
            DeliverySlot,
            OrderStatus,
            WeatherCondition,
            DeliveryTimePreference,
            Frequency,
            Packaging,
            SkinReaction,
            SkinCondition,
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            UserResponse,
            AuthResponse,
            ProfileResponse,
            UpdateProfileResponse,
            ProductResponse,
            PlanResponse,
            ProductListResponse,
            PlanListResponse,
            SkinQuizRequest,
            SkinProfileResponse,
            Recommendations,
            SkinQuizResponse,
            SubscribeRequest,
            SubscribeResponse,
            OrderItemResponse,
            OrderResponse,
            OrderListResponse,
            TodayOrdersResponse,
            PreferenceRequest,
            PreferenceResponse,
            PreferenceEnvelope,
            DeliveryZoneResponse,
            DeliveryZoneListResponse,
            AvailabilityRequest,
            AvailabilityResponse,
            WeatherReading,
            WeatherAdaptiveResponse,
            FreshBatchResponse,
            FreshBatchesResponse,
            QualityAssurance,
            FreshnessReport,
            PreparationSchedule,
            DailyFreshReportResponse,
            RoutineStep,
            RoutineSession,
            WeeklyTreatment,
            PersonalizedRoutine,
            PersonalizedRoutineResponse,
            FeedbackRequest,
            FeedbackResponse,
            DiaryEntryRequest,
            DiaryEntryResponse,
            ImprovementTrend,
            ProgressSummary,
            DiaryListResponse,
            DiaryCreatedResponse,
            ReferralRequest,
            ReferralCreatedResponse,
            ReferralReward,
            ReferralStats,
            ProgramDetails,
            ReferralDashboardResponse,
            SustainabilityMetrics,
            SustainabilityResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "catalog", description = "Products, plans and ingredient information"),
        (name = "profile", description = "Skin quiz, account profile and preferences"),
        (name = "order", description = "Subscriptions and daily orders"),
        (name = "delivery", description = "Delivery coverage"),
        (name = "freshness", description = "Weather-adapted products, batches and routines"),
        (name = "engagement", description = "Feedback, skin diary, referrals and community"),
    ),
    info(
        title = "Freskin Backend API",
        version = "1.0.0",
        description = "Fresh, preservative-free skincare subscription API"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/register"));
        assert!(doc.paths.paths.contains_key("/orders/today"));
        assert!(doc.paths.paths.contains_key("/skin-diary"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}

use crate::database::DbPool;
use crate::error::AppError;
use crate::handlers;
use crate::services::*;
use crate::utils::JwtService;
use actix_web::web;

/// Every service the HTTP layer depends on, built once and cloned into
/// each worker.
#[derive(Clone)]
pub struct AppServices {
    pub jwt_service: JwtService,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub profile: ProfileService,
    pub orders: OrderService,
    pub preferences: PreferenceService,
    pub delivery: DeliveryService,
    pub weather: WeatherService,
    pub freshness: FreshnessService,
    pub feedback: FeedbackService,
    pub diary: DiaryService,
    pub referrals: ReferralService,
}

impl AppServices {
    pub fn new(
        pool: DbPool,
        jwt_service: JwtService,
        weather_source: WeatherSource,
        default_city: String,
    ) -> Self {
        let notifier = Notifier::new();
        let catalog = CatalogService::new(pool.clone());
        let profile = ProfileService::new(pool.clone(), catalog.clone());
        let orders = OrderService::new(pool.clone(), notifier.clone());
        let preferences = PreferenceService::new(pool.clone());
        let weather = WeatherService::new(
            pool.clone(),
            weather_source,
            default_city,
            catalog.clone(),
        );
        let freshness = FreshnessService::new(
            pool.clone(),
            catalog.clone(),
            profile.clone(),
            preferences.clone(),
            weather.clone(),
        );

        Self {
            auth: AuthService::new(pool.clone(), jwt_service.clone(), notifier.clone()),
            jwt_service,
            feedback: FeedbackService::new(pool.clone(), orders.clone(), catalog.clone()),
            delivery: DeliveryService::new(pool.clone()),
            diary: DiaryService::new(pool.clone()),
            referrals: ReferralService::new(pool, notifier),
            catalog,
            profile,
            orders,
            preferences,
            weather,
            freshness,
        }
    }

    /// Registers the services and all `/api` routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("Invalid request body: {err}")).into()
            }),
        )
        .app_data(
            web::QueryConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("Invalid query string: {err}")).into()
            }),
        )
        .app_data(web::Data::new(self.auth.clone()))
        .app_data(web::Data::new(self.catalog.clone()))
        .app_data(web::Data::new(self.profile.clone()))
        .app_data(web::Data::new(self.orders.clone()))
        .app_data(web::Data::new(self.preferences.clone()))
        .app_data(web::Data::new(self.delivery.clone()))
        .app_data(web::Data::new(self.weather.clone()))
        .app_data(web::Data::new(self.freshness.clone()))
        .app_data(web::Data::new(self.feedback.clone()))
        .app_data(web::Data::new(self.diary.clone()))
        .app_data(web::Data::new(self.referrals.clone()))
        .service(
            web::scope("/api")
                .configure(handlers::auth_config)
                .configure(handlers::catalog_config)
                .configure(handlers::profile_config)
                .configure(handlers::order_config)
                .configure(handlers::delivery_config)
                .configure(handlers::freshness_config)
                .configure(handlers::engagement_config),
        );
    }
}

use crate::entities::user_entity as users;
use crate::models::RegisterRequest;
use crate::services::{AuthService, Notifier};
use crate::utils::JwtService;
use sea_orm::{DatabaseConnection, EntityTrait};

pub fn auth_service(pool: &DatabaseConnection) -> AuthService {
    AuthService::new(
        pool.clone(),
        JwtService::new("test-secret", 3600),
        Notifier::new(),
    )
}

async fn register(pool: &DatabaseConnection, email: &str, referral_code: Option<&str>) -> users::Model {
    let resp = auth_service(pool)
        .register(RegisterRequest {
            name: "Test User".into(),
            email: email.into(),
            password: "Password123".into(),
            phone: None,
            referral_code: referral_code.map(str::to_string),
        })
        .await
        .expect("register");
    users::Entity::find_by_id(resp.user.id)
        .one(pool)
        .await
        .expect("query")
        .expect("user row")
}

pub async fn register_user(pool: &DatabaseConnection, email: &str) -> users::Model {
    register(pool, email, None).await
}

pub async fn register_user_with_referral(
    pool: &DatabaseConnection,
    email: &str,
    referral_code: &str,
) -> users::Model {
    register(pool, email, Some(referral_code)).await
}

use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::Notifier;
use crate::services::referral_service::complete_referral;
use crate::utils::{
    JwtService, hash_password, normalize_email, validate_name, validate_password, verify_password,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    notifier: Notifier,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService, notifier: Notifier) -> Self {
        Self {
            pool,
            jwt_service,
            notifier,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        let name = validate_name(&request.name)?;
        let email = normalize_email(&request.email)?;
        validate_password(&request.password)?;
        let phone = normalize_phone(request.phone.as_deref())?;

        if users::Entity::find()
            .filter(users::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let now = Utc::now();

        let txn = self.pool.begin().await?;
        let user = users::ActiveModel {
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            name: Set(name.clone()),
            phone: Set(phone),
            is_active: Set(true),
            subscription_plan_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        // unique index on email closes the race with a concurrent registration
        .map_err(|e| AppError::conflict_on_unique(e, "Email already registered"))?;

        if let Some(code) = request
            .referral_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            && !complete_referral(&txn, code, &email, now).await?
        {
            log::warn!("Registration used unknown or spent referral code {code}");
        }
        txn.commit().await?;

        let token = self.jwt_service.generate_token(user.id)?;
        log::info!("User registered: id={} email={}", user.id, user.email);
        self.notifier.send_welcome(&email, &name);

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let invalid = || AppError::AuthError("Invalid email or password".to_string());

        let email = normalize_email(&request.email).map_err(|_| invalid())?;
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.pool)
            .await?
            .ok_or_else(invalid)?;

        if !user.is_active || !verify_password(&request.password, &user.password_hash)? {
            return Err(invalid());
        }

        let token = self.jwt_service.generate_token(user.id)?;
        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Loads the live, active account a verified token points at.
    pub async fn resolve_user(&self, user_id: i64) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::AuthError("User not found or inactive".to_string()))
    }
}

pub(crate) fn normalize_phone(phone: Option<&str>) -> AppResult<Option<String>> {
    let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'));
    if !allowed || !(7..=15).contains(&digits) {
        return Err(AppError::ValidationError("Invalid phone number".to_string()));
    }
    Ok(Some(phone.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn service(pool: DatabaseConnection) -> AuthService {
        AuthService::new(pool, JwtService::new("test-secret", 3600), Notifier::new())
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Asha Rao".into(),
            email: email.into(),
            password: "Password123".into(),
            phone: Some("+91 98000 00000".into()),
            referral_code: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let auth = service(test_pool().await);

        let first = auth.register(request("asha@example.com")).await.unwrap();
        assert_eq!(first.user.email, "asha@example.com");

        let second = auth.register(request("ASHA@example.com ")).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let pool = test_pool().await;
        let auth = service(pool);
        let registered = auth.register(request("asha@example.com")).await.unwrap();

        let ok = auth
            .login(LoginRequest {
                email: "asha@example.com".into(),
                password: "Password123".into(),
            })
            .await
            .unwrap();
        assert_eq!(ok.user.id, registered.user.id);

        let bad = auth
            .login(LoginRequest {
                email: "asha@example.com".into(),
                password: "Password124".into(),
            })
            .await;
        assert!(matches!(bad, Err(AppError::AuthError(_))));

        let unknown = auth
            .login(LoginRequest {
                email: "nobody@example.com".into(),
                password: "Password123".into(),
            })
            .await;
        assert!(matches!(unknown, Err(AppError::AuthError(_))));
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let auth = service(test_pool().await);

        let mut weak = request("weak@example.com");
        weak.password = "password".into();
        assert!(matches!(
            auth.register(weak).await,
            Err(AppError::ValidationError(_))
        ));

        let mut bad_email = request("not-an-email");
        bad_email.email = "not-an-email".into();
        assert!(matches!(
            auth.register(bad_email).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_token_resolves_to_user() {
        let auth = service(test_pool().await);
        let registered = auth.register(request("asha@example.com")).await.unwrap();

        let user_id = JwtService::new("test-secret", 3600)
            .verify_token(&registered.token)
            .unwrap();
        let user = auth.resolve_user(user_id).await.unwrap();
        assert_eq!(user.email, "asha@example.com");

        assert!(matches!(
            auth.resolve_user(user_id + 100).await,
            Err(AppError::AuthError(_))
        ));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(None).unwrap(), None);
        assert_eq!(normalize_phone(Some("  ")).unwrap(), None);
        assert!(normalize_phone(Some("+91 98000-00000")).unwrap().is_some());
        assert!(normalize_phone(Some("call me")).is_err());
    }
}

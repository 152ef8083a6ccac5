use crate::entities::referral_entity as referrals;
use crate::entities::referrals::ReferralStatus;
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::Notifier;
use crate::utils::{
    generate_referral_code, normalize_email, parse_personal_referral_code, personal_referral_code,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};

/// Credit for each friend who signs up, in paise.
pub const REFERRAL_REWARD: i64 = 20_000;

#[derive(Clone)]
pub struct ReferralService {
    pool: DatabaseConnection,
    notifier: Notifier,
}

impl ReferralService {
    pub fn new(pool: DatabaseConnection, notifier: Notifier) -> Self {
        Self { pool, notifier }
    }

    pub async fn invite(
        &self,
        user: &users::Model,
        request: ReferralRequest,
    ) -> AppResult<ReferralCreatedResponse> {
        let friend_email = request
            .friend_email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("Friend email is required".to_string()))?;
        let friend_email = normalize_email(friend_email)?;
        if friend_email == user.email {
            return Err(AppError::ValidationError(
                "You cannot refer yourself".to_string(),
            ));
        }

        let already_invited = referrals::Entity::find()
            .filter(referrals::Column::ReferrerId.eq(user.id))
            .filter(referrals::Column::FriendEmail.eq(friend_email.as_str()))
            .one(&self.pool)
            .await?
            .is_some();
        if already_invited {
            return Err(AppError::Conflict(
                "This friend has already been invited".to_string(),
            ));
        }

        let referral = referrals::ActiveModel {
            referrer_id: Set(user.id),
            friend_email: Set(friend_email.clone()),
            referral_code: Set(generate_referral_code(user.id)),
            status: Set(ReferralStatus::Pending),
            reward_amount: Set(REFERRAL_REWARD),
            created_at: Set(Utc::now()),
            completed_at: Set(None),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Referral code collision, please retry"))?;

        self.notifier
            .send_referral_invitation(&friend_email, &user.name, &referral.referral_code);

        Ok(ReferralCreatedResponse {
            message: "Referral invitation sent successfully".to_string(),
            referral_code: referral.referral_code,
            reward: "Both you and your friend get Rs 200 off your next order!".to_string(),
        })
    }

    pub async fn dashboard(&self, user: &users::Model) -> AppResult<ReferralDashboardResponse> {
        let rows = referrals::Entity::find()
            .filter(referrals::Column::ReferrerId.eq(user.id))
            .order_by_desc(referrals::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        let completed: Vec<&referrals::Model> = rows
            .iter()
            .filter(|r| r.status == ReferralStatus::Completed)
            .collect();

        let stats = ReferralStats {
            total_referrals: rows.len() as u64,
            successful_referrals: completed.len() as u64,
            pending_referrals: (rows.len() - completed.len()) as u64,
            total_rewards_earned: completed.iter().map(|r| r.reward_amount).sum(),
            current_referral_code: personal_referral_code(user.id),
            referral_rewards: completed
                .iter()
                .map(|r| ReferralReward {
                    friend_email: r.friend_email.clone(),
                    reward: r.reward_amount,
                    date: r.completed_at,
                })
                .collect(),
        };

        Ok(ReferralDashboardResponse {
            referral_stats: stats,
            program_details: ProgramDetails {
                friend_discount: "Rs 200 off first order".to_string(),
                your_reward: "Rs 200 credit".to_string(),
                additional_benefits: "Extra eco-points for both".to_string(),
            },
        })
    }
}

/// Credits the referral a newcomer registered with.
///
/// `code` is either an invitation code, which only redeems for the email it was
/// sent to, or a referrer's personal code, which records a completed referral
/// for `friend_email` (reusing a pending invite to that email if there is one).
/// Returns `false` when nothing matches. Runs on the caller's connection so
/// registration can do it inside its own transaction.
pub async fn complete_referral<C: ConnectionTrait>(
    conn: &C,
    code: &str,
    friend_email: &str,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    let invited = referrals::Entity::find()
        .filter(referrals::Column::ReferralCode.eq(code))
        .filter(referrals::Column::FriendEmail.eq(friend_email))
        .filter(referrals::Column::Status.eq(ReferralStatus::Pending))
        .one(conn)
        .await?;
    if let Some(referral) = invited {
        mark_completed(conn, referral, now).await?;
        return Ok(true);
    }

    let Some(referrer_id) = parse_personal_referral_code(code) else {
        return Ok(false);
    };
    let Some(referrer) = users::Entity::find_by_id(referrer_id).one(conn).await? else {
        return Ok(false);
    };
    if !referrer.is_active || referrer.email == friend_email {
        return Ok(false);
    }

    let pending = referrals::Entity::find()
        .filter(referrals::Column::ReferrerId.eq(referrer.id))
        .filter(referrals::Column::FriendEmail.eq(friend_email))
        .filter(referrals::Column::Status.eq(ReferralStatus::Pending))
        .one(conn)
        .await?;
    match pending {
        Some(referral) => mark_completed(conn, referral, now).await?,
        None => {
            referrals::ActiveModel {
                referrer_id: Set(referrer.id),
                friend_email: Set(friend_email.to_string()),
                referral_code: Set(generate_referral_code(referrer.id)),
                status: Set(ReferralStatus::Completed),
                reward_amount: Set(REFERRAL_REWARD),
                created_at: Set(now),
                completed_at: Set(Some(now)),
                ..Default::default()
            }
            .insert(conn)
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "Referral code collision, please retry")
            })?;
        }
    }
    Ok(true)
}

async fn mark_completed<C: ConnectionTrait>(
    conn: &C,
    referral: referrals::Model,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let mut am = referral.into_active_model();
    am.status = Set(ReferralStatus::Completed);
    am.completed_at = Set(Some(now));
    am.update(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::services::test_support::{register_user, register_user_with_referral};

    #[tokio::test]
    async fn test_invite_and_complete_referral() {
        let pool = test_pool().await;
        let referrer = register_user(&pool, "asha@example.com").await;
        let svc = ReferralService::new(pool.clone(), Notifier::new());

        let created = svc
            .invite(
                &referrer,
                ReferralRequest {
                    friend_email: Some("Friend@Example.com".into()),
                },
            )
            .await
            .unwrap();
        assert!(created.referral_code.starts_with(&format!("FRESH{}", referrer.id)));

        let before = svc.dashboard(&referrer).await.unwrap();
        assert_eq!(before.referral_stats.total_referrals, 1);
        assert_eq!(before.referral_stats.pending_referrals, 1);
        assert_eq!(before.referral_stats.total_rewards_earned, 0);

        register_user_with_referral(&pool, "friend@example.com", &created.referral_code).await;

        let after = svc.dashboard(&referrer).await.unwrap();
        assert_eq!(after.referral_stats.successful_referrals, 1);
        assert_eq!(after.referral_stats.pending_referrals, 0);
        assert_eq!(after.referral_stats.total_rewards_earned, REFERRAL_REWARD);
        assert_eq!(
            after.referral_stats.current_referral_code,
            format!("FRESH{}LOVE", referrer.id)
        );
        assert_eq!(after.referral_stats.referral_rewards.len(), 1);
    }

    #[tokio::test]
    async fn test_invite_rejects_bad_input() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = ReferralService::new(pool, Notifier::new());

        let missing = svc.invite(&user, ReferralRequest { friend_email: None }).await;
        assert!(matches!(missing, Err(AppError::ValidationError(_))));

        let own = svc
            .invite(
                &user,
                ReferralRequest {
                    friend_email: Some("asha@example.com".into()),
                },
            )
            .await;
        assert!(matches!(own, Err(AppError::ValidationError(_))));

        let friend = ReferralRequest {
            friend_email: Some("friend@example.com".into()),
        };
        svc.invite(&user, friend).await.unwrap();
        let again = svc
            .invite(
                &user,
                ReferralRequest {
                    friend_email: Some("friend@example.com".into()),
                },
            )
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_invite_code_only_redeems_for_invited_email() {
        let pool = test_pool().await;
        let referrer = register_user(&pool, "asha@example.com").await;
        let svc = ReferralService::new(pool.clone(), Notifier::new());

        let created = svc
            .invite(
                &referrer,
                ReferralRequest {
                    friend_email: Some("friend@example.com".into()),
                },
            )
            .await
            .unwrap();

        register_user_with_referral(&pool, "stranger@example.com", &created.referral_code).await;

        let stats = svc.dashboard(&referrer).await.unwrap().referral_stats;
        assert_eq!(stats.successful_referrals, 0);
        assert_eq!(stats.pending_referrals, 1);
        assert_eq!(stats.total_rewards_earned, 0);

        register_user_with_referral(&pool, "FRIEND@example.com", &created.referral_code).await;

        let stats = svc.dashboard(&referrer).await.unwrap().referral_stats;
        assert_eq!(stats.successful_referrals, 1);
        assert_eq!(stats.referral_rewards[0].friend_email, "friend@example.com");
    }

    #[tokio::test]
    async fn test_personal_code_is_redeemable() {
        let pool = test_pool().await;
        let referrer = register_user(&pool, "asha@example.com").await;
        let svc = ReferralService::new(pool.clone(), Notifier::new());

        svc.invite(
            &referrer,
            ReferralRequest {
                friend_email: Some("invited@example.com".into()),
            },
        )
        .await
        .unwrap();

        let code = svc
            .dashboard(&referrer)
            .await
            .unwrap()
            .referral_stats
            .current_referral_code;
        register_user_with_referral(&pool, "walkin@example.com", &code).await;
        register_user_with_referral(&pool, "invited@example.com", &code).await;

        let stats = svc.dashboard(&referrer).await.unwrap().referral_stats;
        assert_eq!(stats.total_referrals, 2);
        assert_eq!(stats.successful_referrals, 2);
        assert_eq!(stats.pending_referrals, 0);
        assert_eq!(stats.total_rewards_earned, 2 * REFERRAL_REWARD);
    }

    #[tokio::test]
    async fn test_unknown_personal_code_is_ignored() {
        let pool = test_pool().await;
        let user = register_user_with_referral(&pool, "solo@example.com", "FRESH9999LOVE").await;
        let svc = ReferralService::new(pool, Notifier::new());

        let stats = svc.dashboard(&user).await.unwrap().referral_stats;
        assert_eq!(stats.total_referrals, 0);
    }
}

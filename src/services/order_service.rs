use crate::entities::orders::{DeliverySlot, OrderStatus};
use crate::entities::{
    order_entity as orders, order_item_entity as order_items, plan_entity as plans,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::Notifier;
use crate::utils::{PaginationParams, generate_order_number};
use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::sea_query::{CaseStatement, Order, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use std::collections::HashMap;

/// Days of deliveries scheduled when a plan is taken.
pub const INITIAL_ORDER_DAYS: u64 = 7;

/// Slot position within a day. Slot names do not sort alphabetically.
fn slot_rank() -> SimpleExpr {
    let mut case = CaseStatement::new();
    for (rank, slot) in DeliverySlot::DAILY.into_iter().enumerate() {
        case = case.case(orders::Column::DeliveryTime.eq(slot), rank as i32);
    }
    case.finally(DeliverySlot::DAILY.len() as i32).into()
}

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
    notifier: Notifier,
}

/// The 7 x 3 grid of placeholder orders starting the day after `now`.
///
/// Pricing and addressing happen at checkout, so every order starts at zero
/// with an empty address.
pub fn initial_orders(user_id: i64, now: DateTime<Utc>) -> Vec<orders::ActiveModel> {
    let tomorrow = now.date_naive() + Days::new(1);
    (0..INITIAL_ORDER_DAYS)
        .filter_map(|offset| tomorrow.checked_add_days(Days::new(offset)))
        .flat_map(|date| {
            DeliverySlot::DAILY.into_iter().map(move |slot| orders::ActiveModel {
                user_id: Set(user_id),
                order_number: Set(generate_order_number()),
                delivery_date: Set(date),
                delivery_time: Set(slot),
                status: Set(OrderStatus::Preparing),
                total_amount: Set(0),
                delivery_address: Set(String::new()),
                special_instructions: Set(String::new()),
                created_at: Set(now),
                ..Default::default()
            })
        })
        .collect()
}

impl OrderService {
    pub fn new(pool: DatabaseConnection, notifier: Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Attaches the plan to the user and schedules the first week of orders,
    /// both in one transaction.
    pub async fn subscribe(
        &self,
        user: &users::Model,
        plan_id: i64,
    ) -> AppResult<SubscribeResponse> {
        let plan = plans::Entity::find_by_id(plan_id)
            .filter(plans::Column::IsActive.eq(true))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Subscription plan not found".to_string()))?;

        let now = Utc::now();
        let new_orders = initial_orders(user.id, now);
        let orders_created = new_orders.len();

        let txn = self.pool.begin().await?;

        let mut am = user.clone().into_active_model();
        am.subscription_plan_id = Set(Some(plan.id));
        am.updated_at = Set(now);
        am.update(&txn).await?;

        orders::Entity::insert_many(new_orders)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Order number collision, please retry"))?;

        txn.commit().await?;

        log::info!(
            "User {} subscribed to plan {} ({}), {} orders scheduled",
            user.id,
            plan.id,
            plan.plan_type,
            orders_created
        );
        self.notifier
            .send_subscription_confirmation(&user.email, &user.name, plan.plan_type);

        Ok(SubscribeResponse {
            message: format!("Subscribed to the {} plan", plan.plan_type),
            subscription: PlanResponse::from(plan),
            orders_created,
        })
    }

    async fn attach_items<C: ConnectionTrait>(
        conn: &C,
        rows: Vec<orders::Model>,
    ) -> AppResult<Vec<OrderResponse>> {
        let ids: Vec<i64> = rows.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i64, Vec<order_items::Model>> = HashMap::new();
        if !ids.is_empty() {
            for item in order_items::Entity::find()
                .filter(order_items::Column::OrderId.is_in(ids))
                .order_by_asc(order_items::Column::Id)
                .all(conn)
                .await?
            {
                items_by_order.entry(item.order_id).or_default().push(item);
            }
        }

        Ok(rows
            .into_iter()
            .map(|o| {
                let items = items_by_order.remove(&o.id).unwrap_or_default();
                OrderResponse::with_items(o, items)
            })
            .collect())
    }

    /// Slots sort as morning, evening, weekly_treatment; the id is the tiebreaker.
    fn schedule_order(rows: &mut [orders::Model]) {
        rows.sort_by(|a, b| {
            (a.delivery_date, a.delivery_time, a.id).cmp(&(b.delivery_date, b.delivery_time, b.id))
        });
    }

    pub async fn list_orders(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<OrderListResponse> {
        let total = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await?;

        let rows = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_asc(orders::Column::DeliveryDate)
            .order_by(slot_rank(), Order::Asc)
            .order_by_asc(orders::Column::Id)
            .offset(params.get_offset())
            .limit(params.get_limit())
            .all(&self.pool)
            .await?;

        Ok(OrderListResponse {
            orders: Self::attach_items(&self.pool, rows).await?,
            page: params.get_page(),
            per_page: params.get_per_page(),
            total,
        })
    }

    pub async fn orders_for_date(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> AppResult<Vec<OrderResponse>> {
        let mut rows = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .filter(orders::Column::DeliveryDate.eq(date))
            .all(&self.pool)
            .await?;
        Self::schedule_order(&mut rows);
        Self::attach_items(&self.pool, rows).await
    }

    pub async fn today_orders(&self, user_id: i64) -> AppResult<Vec<OrderResponse>> {
        self.orders_for_date(user_id, Utc::now().date_naive()).await
    }

    pub async fn count_orders(&self, user_id: i64) -> AppResult<u64> {
        let n = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .count(&self.pool)
            .await?;
        Ok(n)
    }

    pub async fn find_user_order(&self, user_id: i64, order_id: i64) -> AppResult<orders::Model> {
        orders::Entity::find_by_id(order_id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Moves an order one step along preparing -> dispatched -> delivered.
    pub async fn advance_status(
        &self,
        order_id: i64,
        next: OrderStatus,
    ) -> AppResult<orders::Model> {
        let order = orders::Entity::find_by_id(order_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::ValidationError(format!(
                "Cannot move order from {} to {}",
                order.status, next
            )));
        }

        let mut am = order.into_active_model();
        am.status = Set(next);
        Ok(am.update(&self.pool).await?)
    }
}

pub mod customization_preferences;
pub mod delivery_zones;
pub mod order_items;
pub mod orders;
pub mod product_batches;
pub mod products;
pub mod referrals;
pub mod skin_diary_entries;
pub mod skin_profiles;
pub mod subscription_plans;
pub mod types;
pub mod user_feedback;
pub mod users;
pub mod weather_data;

pub use customization_preferences as preference_entity;
pub use delivery_zones as delivery_zone_entity;
pub use order_items as order_item_entity;
pub use orders as order_entity;
pub use product_batches as product_batch_entity;
pub use products as product_entity;
pub use referrals as referral_entity;
pub use skin_diary_entries as diary_entity;
pub use skin_profiles as skin_profile_entity;
pub use subscription_plans as plan_entity;
pub use types::{DeliverySlots, TagList};
pub use user_feedback as feedback_entity;
pub use users as user_entity;
pub use weather_data as weather_entity;

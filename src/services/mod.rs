pub mod auth_service;
pub mod catalog_service;
pub mod content;
pub mod delivery_service;
pub mod diary_service;
pub mod feedback_service;
pub mod freshness_service;
pub mod notifier;
pub mod order_service;
pub mod preference_service;
pub mod profile_service;
pub mod recommendation;
pub mod referral_service;
pub mod sustainability;
pub mod weather_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::*;
pub use catalog_service::*;
pub use delivery_service::*;
pub use diary_service::*;
pub use feedback_service::*;
pub use freshness_service::*;
pub use notifier::*;
pub use order_service::*;
pub use preference_service::*;
pub use profile_service::*;
pub use referral_service::*;
pub use weather_service::*;

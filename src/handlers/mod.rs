pub mod auth;
pub mod catalog;
pub mod delivery;
pub mod engagement;
pub mod freshness;
pub mod order;
pub mod profile;

pub use auth::auth_config;
pub use catalog::catalog_config;
pub use delivery::delivery_config;
pub use engagement::engagement_config;
pub use freshness::freshness_config;
pub use order::order_config;
pub use profile::profile_config;

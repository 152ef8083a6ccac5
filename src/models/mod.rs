pub mod catalog;
pub mod common;
pub mod delivery;
pub mod engagement;
pub mod freshness;
pub mod order;
pub mod preference;
pub mod skin_profile;
pub mod user;
pub mod weather;

pub use catalog::*;
pub use common::*;
pub use delivery::*;
pub use engagement::*;
pub use freshness::*;
pub use order::*;
pub use preference::*;
pub use skin_profile::*;
pub use user::*;
pub use weather::*;

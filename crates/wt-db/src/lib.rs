pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connect;
pub use error::{DbError, Result};
pub use repositories::period_repository::PeriodRepository;
pub use repositories::push_subscription_repository::PushSubscriptionRepository;
pub use repositories::user_repository::UserRepository;

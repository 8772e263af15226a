pub mod period_repository;
pub mod push_subscription_repository;
pub mod user_repository;

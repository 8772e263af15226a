pub mod period;
pub mod push_subscription;
pub mod user;

pub mod models;

pub use models::period::Period;
pub use models::push_subscription::PushSubscription;
pub use models::user::User;

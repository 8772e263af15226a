use serde::Serialize;
use wt_core::PushSubscription;

#[derive(Debug, Serialize)]
pub struct SubscriptionDto {
    pub id: i64,
    pub identifier: String,
}

impl From<PushSubscription> for SubscriptionDto {
    fn from(subscription: PushSubscription) -> Self {
        Self {
            id: subscription.id,
            identifier: subscription.identifier,
        }
    }
}

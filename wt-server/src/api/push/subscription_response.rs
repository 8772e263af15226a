use crate::api::push::subscription_dto::SubscriptionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub subscription: SubscriptionDto,
}

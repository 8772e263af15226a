use crate::Result as ApiKeyResult;

use std::future::Future;

use wt_core::User;

/// Read-only view of the externally-owned user records.
///
/// The validator needs exactly one lookup; keeping it behind a trait keeps
/// this crate free of any storage dependency and lets tests swap in an
/// in-memory store.
pub trait UserStore: Send + Sync {
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = ApiKeyResult<Option<User>>> + Send;
}

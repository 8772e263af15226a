
use crate::{ApiKeyError, Result as ApiKeyResult, UserStore};

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use wt_core::User;

pub(crate) const TEST_SIGNING_KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

/// In-memory user store standing in for the repository.
pub(crate) struct MemoryUserStore {
    users: Mutex<HashMap<i64, User>>,
}

impl MemoryUserStore {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub(crate) fn remove(&self, id: i64) {
        self.users.lock().unwrap().remove(&id);
    }

    pub(crate) fn find_current(&self, id: i64) -> User {
        self.users.lock().unwrap().get(&id).cloned().unwrap()
    }

    pub(crate) fn set_password_hash(&self, id: i64, password_hash: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&id) {
            user.password_hash = password_hash.to_string();
        }
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> ApiKeyResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

/// A store whose lookups always fail, for the server-fault path.
pub(crate) struct BrokenUserStore;

impl UserStore for BrokenUserStore {
    async fn find_by_id(&self, _id: i64) -> ApiKeyResult<Option<User>> {
        Err(ApiKeyError::store("connection refused"))
    }
}

pub(crate) fn test_user(id: i64) -> User {
    User {
        id,
        username: format!("user-{id}"),
        password_hash: format!("pbkdf2_sha256$390000$salt-{id}$aGFzaA=="),
        created_at: Utc::now(),
    }
}

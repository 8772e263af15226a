use crate::{
    ApiKeyError, Result as ApiKeyResult, TokenCodec, TokenPayload, UserStore,
    credential_fingerprint,
};

use wt_core::User;

/// Issues and validates stateless API keys.
///
/// A key embeds the user's current credential fingerprint, so every key
/// ever issued for a user dies the moment their credential changes - the
/// credential store itself is the revocation list. Nothing is persisted
/// per token and no per-token state exists server-side.
pub struct ApiKeys {
    codec: TokenCodec,
}

impl ApiKeys {
    /// Build from the process-wide signing key. The key is configuration
    /// loaded once at startup; construction is the only place it enters.
    pub fn new(signing_key: &[u8]) -> Self {
        Self {
            codec: TokenCodec::new(signing_key),
        }
    }

    /// Issue the API key for a user.
    ///
    /// Pure function of (user id, current fingerprint): for an unchanged
    /// credential, repeated calls return the identical string, so a
    /// trigger URL built from it keeps working indefinitely.
    pub fn issue(&self, user: &User) -> String {
        self.codec.encode(&TokenPayload {
            user: user.id,
            fingerprint: credential_fingerprint(user),
        })
    }

    /// Resolve a token back to its user.
    ///
    /// Fails with `BadSignature` for anything structurally wrong,
    /// `UserNotFound` when the id no longer resolves, and `Expired` when
    /// the signature checks out but the credential changed since issuance.
    pub async fn validate<S: UserStore>(
        &self,
        store: &S,
        token: &str,
    ) -> ApiKeyResult<User> {
        let payload = self.codec.decode(token)?;

        let user = store
            .find_by_id(payload.user)
            .await?
            .ok_or_else(ApiKeyError::user_not_found)?;

        if credential_fingerprint(&user) != payload.fingerprint {
            return Err(ApiKeyError::expired());
        }

        Ok(user)
    }
}

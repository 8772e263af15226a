use serde::{Deserialize, Serialize};

/// The signed content of an API key.
///
/// Field order is fixed: serde_json writes struct fields in declaration
/// order, so encoding the same logical payload twice yields identical
/// bytes. That keeps the signed token stable across repeated issuance,
/// which matters because users paste the token into trigger-app URLs that
/// must keep working indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user: i64,
    pub fingerprint: String,
}

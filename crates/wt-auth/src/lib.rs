pub mod api_keys;
pub mod error;
pub mod fingerprint;
pub mod token_codec;
pub mod token_payload;
pub mod user_store;

pub use api_keys::ApiKeys;
pub use error::{ApiKeyError, Result};
pub use fingerprint::credential_fingerprint;
pub use token_codec::TokenCodec;
pub use token_payload::TokenPayload;
pub use user_store::UserStore;

#[cfg(test)]
mod tests;

use crate::{ApiKeyError, Result as ApiKeyResult, TokenPayload};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Context string mixed into the MAC key so API-key signatures can never
/// collide with any other use of the process secret.
const SIGNING_CONTEXT: &str = "api-key";

/// Separator between payload and signature segments. Not part of the
/// base64url alphabet, so splitting on it is unambiguous.
const DELIMITER: char = ':';

/// Serializes a [`TokenPayload`] into a signed opaque string and back.
///
/// Wire format:
/// `base64url(json(payload)) ':' base64url(hmac_sha256(key, payload_segment))`
///
/// The codec holds the derived MAC key for the process lifetime; there is
/// no runtime rotation.
pub struct TokenCodec {
    mac_key: [u8; 32],
}

impl TokenCodec {
    pub fn new(signing_key: &[u8]) -> Self {
        // Derive a use-specific key instead of handing the raw process
        // secret to the MAC.
        let mut hasher = Sha256::new();
        hasher.update(SIGNING_CONTEXT.as_bytes());
        hasher.update(b":");
        hasher.update(signing_key);

        Self {
            mac_key: hasher.finalize().into(),
        }
    }

    /// Encode and sign a payload. Deterministic: the same payload always
    /// produces the same token string.
    pub fn encode(&self, payload: &TokenPayload) -> String {
        let json = serde_json::to_vec(payload)
            .expect("TokenPayload serialization is infallible");
        let segment = URL_SAFE_NO_PAD.encode(json);
        let signature = URL_SAFE_NO_PAD.encode(self.sign(&segment));

        format!("{segment}{DELIMITER}{signature}")
    }

    /// Verify the signature and deserialize the payload.
    ///
    /// Every structural failure collapses into `BadSignature`; callers
    /// never learn whether the delimiter, the MAC, or the payload encoding
    /// was at fault.
    #[track_caller]
    pub fn decode(&self, token: &str) -> ApiKeyResult<TokenPayload> {
        let (segment, signature) = token
            .split_once(DELIMITER)
            .ok_or_else(|| ApiKeyError::bad_signature("missing signature segment"))?;

        let provided = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApiKeyError::bad_signature("signature is not base64url"))?;
        let expected = self.sign(segment);

        // Constant-time comparison; the MAC tag is the attacker-facing
        // surface here.
        if !bool::from(expected.as_slice().ct_eq(&provided)) {
            return Err(ApiKeyError::bad_signature("signature mismatch"));
        }

        let json = URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|_| ApiKeyError::bad_signature("payload is not base64url"))?;

        serde_json::from_slice(&json)
            .map_err(|_| ApiKeyError::bad_signature("payload does not decode"))
    }

    fn sign(&self, segment: &str) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(&self.mac_key)
            .expect("HMAC accepts any key length");
        mac.update(segment.as_bytes());
        mac.finalize().into_bytes().into()
    }
}

//! Session Token Signing
//!
//! The session cookie carries `<session_id>.<signature>` where the
//! signature is HMAC-SHA256 over the UUID string, base64url-encoded.
//! The store is only consulted after the signature verifies, so forged
//! or tampered cookies never reach it.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

/// Sign a session id into a cookie token
pub fn sign(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a cookie token and extract the session id.
///
/// Returns `None` for malformed tokens, bad signatures, or non-UUID
/// payloads.
pub fn verify(secret: &[u8; 32], token: &str) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}

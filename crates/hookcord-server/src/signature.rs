//! GitHub webhook signature verification (HMAC-SHA256)

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying `sha256=<hex digest>` of the raw body
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Check `signature_header` against the HMAC of `payload` keyed by `secret`.
///
/// Missing or malformed headers fail verification. Comparison is constant-time.
pub fn verify_signature(secret: &str, payload: &[u8], signature_header: Option<&str>) -> bool {
    let Some(hex_digest) = signature_header.and_then(|h| h.trim().strip_prefix(SIGNATURE_PREFIX))
    else {
        tracing::warn!("Missing or malformed signature header");
        return false;
    };

    let Ok(expected) = hex::decode(hex_digest) else {
        tracing::warn!("Signature header is not valid hex");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
pub(crate) fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(payload);
    format!("{}{}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes()))
}

//! Ed25519 request signature verification.
//!
//! Discord signs `timestamp || body` and sends the hex signature in
//! `X-Signature-Ed25519` next to the timestamp in `X-Signature-Timestamp`.

use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_hex_key;
use ring::signature::{UnparsedPublicKey, ED25519};

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

const PUBLIC_KEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    public_key: Vec<u8>,
}

impl SignatureVerifier {
    /// Build a verifier from the hex public key shown in the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self> {
        validate_hex_key("public_key", public_key, PUBLIC_KEY_LEN)?;
        let public_key = hex::decode(public_key).map_err(|e| AppError::SignatureError {
            message: format!("public key is not hex: {}", e),
        })?;
        Ok(Self { public_key })
    }

    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> Result<()> {
        let signature = hex::decode(signature).map_err(|e| AppError::SignatureError {
            message: format!("signature is not hex: {}", e),
        })?;
        if signature.len() != SIGNATURE_LEN {
            return Err(AppError::SignatureError {
                message: format!("signature must be {} bytes", SIGNATURE_LEN),
            });
        }

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        UnparsedPublicKey::new(&ED25519, &self.public_key)
            .verify(&message, &signature)
            .map_err(|_| AppError::SignatureError {
                message: "signature does not match".to_string(),
            })
    }
}

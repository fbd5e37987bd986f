//! Authentication service for the management API passkey.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const PASSKEY_MAC_KEY: &[u8] = b"shortlink/admin-passkey";

/// Service for authenticating API requests via Bearer passkeys.
///
/// Only an HMAC-SHA256 tag of the configured passkey is kept in memory.
/// Presented tokens are checked with a constant-time tag comparison.
pub struct AuthService {
    passkey_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for `passkey`.
    pub fn new(passkey: &str) -> Self {
        Self {
            passkey_tag: Self::mac(passkey).finalize().into_bytes().to_vec(),
        }
    }

    fn mac(token: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(PASSKEY_MAC_KEY).expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        mac
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is not the passkey.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        Self::mac(token)
            .verify_slice(&self.passkey_tag)
            .map_err(|_| {
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid passkey"}))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new("correct-horse-battery");
        assert!(service.authenticate("correct-horse-battery").is_ok());
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let service = AuthService::new("correct-horse-battery");

        let result = service.authenticate("wrong-passkey");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_is_exact() {
        let service = AuthService::new("correct-horse-battery");

        assert!(service.authenticate("").is_err());
        assert!(service.authenticate("correct-horse-battery ").is_err());
        assert!(service.authenticate("CORRECT-HORSE-BATTERY").is_err());
    }

    #[test]
    fn test_tag_is_not_the_passkey() {
        let service = AuthService::new("correct-horse-battery");

        assert_eq!(service.passkey_tag.len(), 32);
        assert_ne!(service.passkey_tag, b"correct-horse-battery".to_vec());
    }
}

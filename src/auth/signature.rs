//! HMAC-SHA256 signature generation for Binance `USER_DATA` endpoints.
//!
//! The signature is computed over the exact query string that is sent:
//! ```text
//! hex(HMAC-SHA256(query_string, api_secret))
//! ```
//!
//! It is appended afterwards as the final `signature` parameter and is never
//! itself part of the signed string.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical query string.
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 digest (64 characters).
///
/// # Example
///
/// ```rust
/// use binance_api_client::auth::sign_query;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_query("symbol=LTCBTC&timestamp=1499827319559", "secret")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(query: &str, secret: &str) -> Result<String, BinanceError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| BinanceError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// A canonical query string together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    canonical_query: String,
    signature: String,
}

impl SignedQuery {
    /// Sign `canonical_query` with the credentials' secret.
    pub fn sign(canonical_query: String, credentials: &Credentials) -> Result<Self, BinanceError> {
        let signature = sign_query(&canonical_query, credentials.expose_secret())?;
        Ok(Self {
            canonical_query,
            signature,
        })
    }

    /// The exact string that was signed.
    pub fn canonical_query(&self) -> &str {
        &self.canonical_query
    }

    /// The hex signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The query string to transmit: the signed string followed by `signature=<hex>`.
    pub fn into_query_string(self) -> String {
        if self.canonical_query.is_empty() {
            format!("signature={}", self.signature)
        } else {
            format!("{}&signature={}", self.canonical_query, self.signature)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    #[test]
    fn test_sign_known_vector() {
        // Example request from the Binance signed endpoint documentation.
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        let signature = sign_query(query, DOC_SECRET).unwrap();

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_format() {
        for query in ["", "a=1", "symbol=BTCUSDT&recvWindow=10000&timestamp=1"] {
            for secret in ["", "s", DOC_SECRET] {
                let sig = sign_query(query, secret).unwrap();
                assert_eq!(sig.len(), 64);
                assert!(sig.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
                assert_eq!(sig, sign_query(query, secret).unwrap());
            }
        }
    }

    #[test]
    fn test_signature_changes_with_query() {
        let sig1 = sign_query("timestamp=1", "secret").unwrap();
        let sig2 = sign_query("timestamp=2", "secret").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signed_query_appends_signature_last() {
        let creds = Credentials::new("key", "secret");
        let signed = SignedQuery::sign("recvWindow=10000&timestamp=1".to_string(), &creds).unwrap();
        let expected = sign_query("recvWindow=10000&timestamp=1", "secret").unwrap();

        assert_eq!(signed.canonical_query(), "recvWindow=10000&timestamp=1");
        assert_eq!(signed.signature(), expected);
        assert_eq!(
            signed.into_query_string(),
            format!("recvWindow=10000&timestamp=1&signature={expected}")
        );
    }

    #[test]
    fn test_signed_empty_query() {
        let creds = Credentials::new("key", "secret");
        let query = SignedQuery::sign(String::new(), &creds).unwrap().into_query_string();
        assert!(query.starts_with("signature="));
        assert_eq!(query.len(), "signature=".len() + 64);
    }
}

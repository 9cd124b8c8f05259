//! Authentication module for Binance API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - A replaceable clock for request timestamps
//! - HMAC-SHA256 signature generation for `USER_DATA` requests

mod clock;
mod credentials;
mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::{SignedQuery, sign_query};

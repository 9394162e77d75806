//! Authentication module for the Globalization Pipeline API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - A clock abstraction so the signed date can be controlled in tests
//! - GaaS-HMAC signature generation and header injection

mod clock;
mod credentials;
mod signer;

pub use clock::{Clock, FixedClock, SystemClock, format_rfc1123};
pub use credentials::{Credentials, IDENTITY_VAR, PASSWORD_VAR, USER_ID_VAR};
pub use signer::{
    AUTH_SCHEME, DATE_HEADER, RequestBody, RequestSigner, SignableRequest, string_to_sign,
};
pub(crate) use signer::is_unsigned_url;

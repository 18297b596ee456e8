//! User session commands

use crate::error::Result;
use crate::protocol::{CommandCode, PayloadWriter};
use super::{empty_request, request};

/// LOGIN_USER (38)
///
/// Payload: username (str-u8) + password (str-u8) + version (str-u32) +
/// context (str-u32). `None` for version or context writes a zero length.
pub fn login_user(
    username: &str,
    password: &str,
    version: Option<&str>,
    context: Option<&str>,
) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    payload
        .put_string_u8(username)?
        .put_string_u8(password)?
        .put_string_u32(version)?
        .put_string_u32(context)?;
    request(CommandCode::LoginUser, payload)
}

/// LOGOUT_USER (39)
pub fn logout_user() -> Result<Vec<u8>> {
    empty_request(CommandCode::LogoutUser)
}

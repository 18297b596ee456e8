//! System commands

use crate::error::Result;
use crate::protocol::CommandCode;
use super::empty_request;

/// PING (1)
pub fn ping() -> Result<Vec<u8>> {
    empty_request(CommandCode::Ping)
}

/// GET_STATS (10)
pub fn get_stats() -> Result<Vec<u8>> {
    empty_request(CommandCode::GetStats)
}

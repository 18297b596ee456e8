//! Command Payload Catalog
//!
//! One builder per protocol command. Each builder writes its fields in the
//! protocol's order and returns a complete request frame, header included.
//!
//! ### Commands
//! - 1:   PING                  - Payload: empty
//! - 10:  GET_STATS             - Payload: empty
//! - 38:  LOGIN_USER            - Payload: username, password, version, context
//! - 39:  LOGOUT_USER           - Payload: empty
//! - 100: POLL_MESSAGES         - Payload: consumer, stream, topic, partition, strategy, count, auto commit
//! - 101: SEND_MESSAGES         - Payload: message batch
//! - 120: GET_CONSUMER_OFFSET   - Payload: consumer, stream, topic, partition
//! - 121: STORE_CONSUMER_OFFSET - Payload: consumer, stream, topic, partition, offset
//! - 200: GET_STREAM            - Payload: stream
//! - 201: GET_STREAMS           - Payload: empty
//! - 202: CREATE_STREAM         - Payload: stream id, name
//! - 203: DELETE_STREAM         - Payload: stream
//! - 300: GET_TOPIC             - Payload: stream, topic
//! - 301: GET_TOPICS            - Payload: stream
//! - 302: CREATE_TOPIC          - Payload: stream, topic id, partitions, name, expiry
//! - 303: DELETE_TOPIC          - Payload: stream, topic
//! - 600: GET_CONSUMER_GROUP    - Payload: stream, topic, group
//! - 601: GET_CONSUMER_GROUPS   - Payload: stream, topic
//! - 602: CREATE_CONSUMER_GROUP - Payload: stream, topic, group id, name
//! - 603: DELETE_CONSUMER_GROUP - Payload: stream, topic, group

mod consumer_groups;
mod consumer_offsets;
mod messages;
mod streams;
mod system;
mod topics;
mod users;

pub use consumer_groups::{
    create_consumer_group, delete_consumer_group, get_consumer_group, get_consumer_groups,
};
pub use consumer_offsets::{get_consumer_offset, store_consumer_offset};
pub use messages::{poll_messages, send_messages};
pub use streams::{create_stream, delete_stream, get_stream, get_streams};
pub use system::{get_stats, ping};
pub use topics::{create_topic, delete_topic, get_topic, get_topics};
pub use users::{login_user, logout_user};

use crate::error::Result;
use crate::protocol::{build_request, CommandCode, PayloadWriter};

/// Frame a finished payload for `command`
fn request(command: CommandCode, payload: PayloadWriter) -> Result<Vec<u8>> {
    let frame = build_request(command.code(), payload.as_slice())?;
    tracing::trace!("Built {} frame: {} bytes", command, frame.len());
    Ok(frame)
}

/// Frame a command that carries no payload
///
/// The header is still written; only the payload is empty.
fn empty_request(command: CommandCode) -> Result<Vec<u8>> {
    request(command, PayloadWriter::new())
}

//! Command and status code tables
//!
//! The single source of command codes and status codes, shared by the
//! builders, the frame decoder and the CLI.

use std::fmt;
use std::str::FromStr;

use crate::error::WireError;

/// Command codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum CommandCode {
    Ping = 1,
    GetStats = 10,
    LoginUser = 38,
    LogoutUser = 39,
    PollMessages = 100,
    SendMessages = 101,
    GetConsumerOffset = 120,
    StoreConsumerOffset = 121,
    GetStream = 200,
    GetStreams = 201,
    CreateStream = 202,
    DeleteStream = 203,
    GetTopic = 300,
    GetTopics = 301,
    CreateTopic = 302,
    DeleteTopic = 303,
    GetConsumerGroup = 600,
    GetConsumerGroups = 601,
    CreateConsumerGroup = 602,
    DeleteConsumerGroup = 603,
}

impl CommandCode {
    /// Every command, in code order
    pub const ALL: [CommandCode; 20] = [
        CommandCode::Ping,
        CommandCode::GetStats,
        CommandCode::LoginUser,
        CommandCode::LogoutUser,
        CommandCode::PollMessages,
        CommandCode::SendMessages,
        CommandCode::GetConsumerOffset,
        CommandCode::StoreConsumerOffset,
        CommandCode::GetStream,
        CommandCode::GetStreams,
        CommandCode::CreateStream,
        CommandCode::DeleteStream,
        CommandCode::GetTopic,
        CommandCode::GetTopics,
        CommandCode::CreateTopic,
        CommandCode::DeleteTopic,
        CommandCode::GetConsumerGroup,
        CommandCode::GetConsumerGroups,
        CommandCode::CreateConsumerGroup,
        CommandCode::DeleteConsumerGroup,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.code() == code)
    }

    /// Upper-case label, e.g. `LOGIN_USER`
    pub fn label(self) -> &'static str {
        match self {
            CommandCode::Ping => "PING",
            CommandCode::GetStats => "GET_STATS",
            CommandCode::LoginUser => "LOGIN_USER",
            CommandCode::LogoutUser => "LOGOUT_USER",
            CommandCode::PollMessages => "POLL_MESSAGES",
            CommandCode::SendMessages => "SEND_MESSAGES",
            CommandCode::GetConsumerOffset => "GET_CONSUMER_OFFSET",
            CommandCode::StoreConsumerOffset => "STORE_CONSUMER_OFFSET",
            CommandCode::GetStream => "GET_STREAM",
            CommandCode::GetStreams => "GET_STREAMS",
            CommandCode::CreateStream => "CREATE_STREAM",
            CommandCode::DeleteStream => "DELETE_STREAM",
            CommandCode::GetTopic => "GET_TOPIC",
            CommandCode::GetTopics => "GET_TOPICS",
            CommandCode::CreateTopic => "CREATE_TOPIC",
            CommandCode::DeleteTopic => "DELETE_TOPIC",
            CommandCode::GetConsumerGroup => "GET_CONSUMER_GROUP",
            CommandCode::GetConsumerGroups => "GET_CONSUMER_GROUPS",
            CommandCode::CreateConsumerGroup => "CREATE_CONSUMER_GROUP",
            CommandCode::DeleteConsumerGroup => "DELETE_CONSUMER_GROUP",
        }
    }

    /// Dotted name as shown by dissectors, e.g. `user.login`
    pub fn name(self) -> &'static str {
        match self {
            CommandCode::Ping => "ping",
            CommandCode::GetStats => "stats",
            CommandCode::LoginUser => "user.login",
            CommandCode::LogoutUser => "user.logout",
            CommandCode::PollMessages => "message.poll",
            CommandCode::SendMessages => "message.send",
            CommandCode::GetConsumerOffset => "consumer_offset.get",
            CommandCode::StoreConsumerOffset => "consumer_offset.store",
            CommandCode::GetStream => "stream.get",
            CommandCode::GetStreams => "stream.list",
            CommandCode::CreateStream => "stream.create",
            CommandCode::DeleteStream => "stream.delete",
            CommandCode::GetTopic => "topic.get",
            CommandCode::GetTopics => "topic.list",
            CommandCode::CreateTopic => "topic.create",
            CommandCode::DeleteTopic => "topic.delete",
            CommandCode::GetConsumerGroup => "consumer_group.get",
            CommandCode::GetConsumerGroups => "consumer_group.list",
            CommandCode::CreateConsumerGroup => "consumer_group.create",
            CommandCode::DeleteConsumerGroup => "consumer_group.delete",
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<CommandCode> for u32 {
    fn from(command: CommandCode) -> Self {
        command.code()
    }
}

impl TryFrom<u32> for CommandCode {
    type Error = WireError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| WireError::Protocol(format!("Unknown command code: {}", code)))
    }
}

/// Accepts the label (`LOGIN_USER`, any case) or the dotted name (`user.login`)
impl FromStr for CommandCode {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.label().eq_ignore_ascii_case(s) || command.name() == s)
            .ok_or_else(|| WireError::InvalidArgument(format!("Unknown command: {}", s)))
    }
}

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    Ok = 0,
    Error = 1,
    InvalidConfiguration = 2,
    InvalidCommand = 3,
    InvalidFormat = 4,
    FeatureUnavailable = 5,
    InvalidIdentifier = 6,
    Disconnected = 8,
    Unauthenticated = 40,
    Unauthorized = 41,
    InvalidCredentials = 42,
}

impl Status {
    pub const ALL: [Status; 11] = [
        Status::Ok,
        Status::Error,
        Status::InvalidConfiguration,
        Status::InvalidCommand,
        Status::InvalidFormat,
        Status::FeatureUnavailable,
        Status::InvalidIdentifier,
        Status::Disconnected,
        Status::Unauthenticated,
        Status::Unauthorized,
        Status::InvalidCredentials,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Unlisted codes are still valid on the wire, they just have no name
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "Error",
            Status::InvalidConfiguration => "Invalid Configuration",
            Status::InvalidCommand => "Invalid Command",
            Status::InvalidFormat => "Invalid Format",
            Status::FeatureUnavailable => "Feature Unavailable",
            Status::InvalidIdentifier => "Invalid Identifier",
            Status::Disconnected => "Disconnected",
            Status::Unauthenticated => "Unauthenticated",
            Status::Unauthorized => "Unauthorized",
            Status::InvalidCredentials => "Invalid Credentials",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Status> for u32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

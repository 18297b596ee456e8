//! Configuration for iggy-testgen
//!
//! Fixture values used to assemble the standard corpus, with defaults that
//! reproduce the reference corpus byte for byte.

use std::path::PathBuf;

use crate::error::{Result, WireError};
use crate::protocol::MAX_STRING_U8_LEN;

/// Main configuration for corpus generation
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// File the concatenated corpus is written to
    pub output_path: PathBuf,

    // -------------------------------------------------------------------------
    // Credentials
    // -------------------------------------------------------------------------
    pub username: String,
    pub password: String,

    /// Client version sent on login (u32-prefixed, `None` = absent)
    pub client_version: Option<String>,

    /// Client context sent on login (u32-prefixed, `None` = absent)
    pub client_context: Option<String>,

    // -------------------------------------------------------------------------
    // Resource Names
    // -------------------------------------------------------------------------
    pub stream_name: String,
    pub topic_name: String,
    pub consumer_name: String,
    pub group_name: String,

    // -------------------------------------------------------------------------
    // Numeric Fixtures
    // -------------------------------------------------------------------------
    /// Partitions requested by CREATE_TOPIC
    pub partitions_count: u32,

    /// Messages requested by POLL_MESSAGES
    pub poll_count: u32,

    /// Messages carried by SEND_MESSAGES
    pub message_count: usize,

    /// Size of each sent message, in bytes
    pub message_size: usize,

    /// Offset written by STORE_CONSUMER_OFFSET
    pub stored_offset: u64,

    /// Status code of the error response entry
    pub error_status: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("test_messages.bin"),
            username: "testuser".to_string(),
            password: "testpass123".to_string(),
            client_version: Some("dissector-test-v1.0".to_string()),
            client_context: Some("wireshark-testing".to_string()),
            stream_name: "test_stream".to_string(),
            topic_name: "test_topic".to_string(),
            consumer_name: "test_consumer".to_string(),
            group_name: "test_group".to_string(),
            partitions_count: 3,
            poll_count: 10,
            message_count: 1,
            message_size: 100,
            stored_offset: 12345,
            error_status: 100,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that every fixture can be encoded
    ///
    /// Catches bad values up front so a failing run names the setting rather
    /// than the command that tripped over it.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("username", &self.username),
            ("password", &self.password),
            ("stream_name", &self.stream_name),
            ("topic_name", &self.topic_name),
            ("consumer_name", &self.consumer_name),
            ("group_name", &self.group_name),
        ];
        for (field, value) in names {
            if value.len() > MAX_STRING_U8_LEN {
                return Err(WireError::Config(format!(
                    "{} is {} bytes, maximum is {}",
                    field,
                    value.len(),
                    MAX_STRING_U8_LEN
                )));
            }
        }

        let batch_bytes = self.message_count.checked_mul(self.message_size);
        if batch_bytes.map_or(true, |total| u32::try_from(total).is_err()) {
            return Err(WireError::Config(format!(
                "{} messages of {} bytes exceed the u32 index range",
                self.message_count, self.message_size
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the corpus output file
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the login client version (`None` sends an empty field)
    pub fn client_version(mut self, version: Option<String>) -> Self {
        self.config.client_version = version;
        self
    }

    /// Set the login client context (`None` sends an empty field)
    pub fn client_context(mut self, context: Option<String>) -> Self {
        self.config.client_context = context;
        self
    }

    pub fn stream_name(mut self, name: impl Into<String>) -> Self {
        self.config.stream_name = name.into();
        self
    }

    pub fn topic_name(mut self, name: impl Into<String>) -> Self {
        self.config.topic_name = name.into();
        self
    }

    pub fn consumer_name(mut self, name: impl Into<String>) -> Self {
        self.config.consumer_name = name.into();
        self
    }

    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.config.group_name = name.into();
        self
    }

    pub fn partitions_count(mut self, count: u32) -> Self {
        self.config.partitions_count = count;
        self
    }

    pub fn poll_count(mut self, count: u32) -> Self {
        self.config.poll_count = count;
        self
    }

    /// Set how many messages SEND_MESSAGES carries
    pub fn message_count(mut self, count: usize) -> Self {
        self.config.message_count = count;
        self
    }

    /// Set the size of each sent message (in bytes)
    pub fn message_size(mut self, size: usize) -> Self {
        self.config.message_size = size;
        self
    }

    pub fn stored_offset(mut self, offset: u64) -> Self {
        self.config.stored_offset = offset;
        self
    }

    pub fn error_status(mut self, status: u32) -> Self {
        self.config.error_status = status;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

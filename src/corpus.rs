//! Corpus assembly
//!
//! Runs the command catalog with a fixed set of fixture values and collects
//! the frames, in order, under human-readable labels. The corpus is held in
//! memory; `write_to` persists it with a single write once every frame has
//! been built.

use std::fmt::Write as _;
use std::path::Path;

use bytes::Bytes;

use crate::commands;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    build_response, CommandCode, Consumer, Identifier, MessageBatch, Partitioning,
    PollingStrategy, Status,
};

/// Fill byte for generated message data
const MESSAGE_FILL: u8 = b'X';

/// What a corpus entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Request(CommandCode),
    Response(u32),
}

/// One labeled frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub label: String,
    pub kind: FrameKind,
    pub bytes: Vec<u8>,
}

impl CorpusEntry {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// CRC32 of the frame bytes
    pub fn checksum(&self) -> u32 {
        crc32fast::hash(&self.bytes)
    }

    /// Space-separated lower-case hex
    pub fn hex(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 3);
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // writing to a String cannot fail
            let _ = write!(out, "{:02x}", byte);
        }
        out
    }
}

/// Ordered collection of labeled frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_request(&mut self, command: CommandCode, bytes: Vec<u8>) {
        tracing::debug!("{}: {} bytes", command, bytes.len());
        self.entries.push(CorpusEntry {
            label: command.label().to_string(),
            kind: FrameKind::Request(command),
            bytes,
        });
    }

    pub fn push_response(&mut self, label: impl Into<String>, status: u32, bytes: Vec<u8>) {
        let label = label.into();
        tracing::debug!("{} (status {}): {} bytes", label, status, bytes.len());
        self.entries.push(CorpusEntry {
            label,
            kind: FrameKind::Response(status),
            bytes,
        });
    }

    /// The reference corpus: fifteen requests, then a success and an error
    /// response
    pub fn standard(config: &Config) -> Result<Self> {
        config.validate()?;
        let fixtures = Fixtures::new(config)?;
        let mut corpus = Self::new();

        corpus.push_request(CommandCode::Ping, commands::ping()?);
        corpus.push_request(
            CommandCode::LoginUser,
            commands::login_user(
                &config.username,
                &config.password,
                config.client_version.as_deref(),
                config.client_context.as_deref(),
            )?,
        );
        corpus.push_request(CommandCode::LogoutUser, commands::logout_user()?);

        corpus.push_request(
            CommandCode::CreateStream,
            commands::create_stream(0, &config.stream_name)?,
        );
        corpus.push_request(CommandCode::GetStream, commands::get_stream(&fixtures.stream)?);
        corpus.push_request(CommandCode::GetStreams, commands::get_streams()?);
        corpus.push_request(
            CommandCode::DeleteStream,
            commands::delete_stream(&fixtures.stream_name)?,
        );

        corpus.push_request(
            CommandCode::CreateTopic,
            commands::create_topic(
                &fixtures.stream,
                0,
                config.partitions_count,
                &config.topic_name,
                0,
            )?,
        );
        corpus.push_request(
            CommandCode::GetTopic,
            commands::get_topic(&fixtures.stream, &fixtures.topic)?,
        );

        corpus.push_request(
            CommandCode::PollMessages,
            commands::poll_messages(
                &fixtures.consumer,
                &fixtures.stream,
                &fixtures.topic,
                fixtures.partition_id,
                &PollingStrategy::first(),
                config.poll_count,
                true,
            )?,
        );
        corpus.push_request(
            CommandCode::SendMessages,
            commands::send_messages(&fixtures.batch)?,
        );

        corpus.push_request(
            CommandCode::StoreConsumerOffset,
            commands::store_consumer_offset(
                &fixtures.consumer,
                &fixtures.stream,
                &fixtures.topic,
                fixtures.partition_id,
                config.stored_offset,
            )?,
        );
        corpus.push_request(
            CommandCode::GetConsumerOffset,
            commands::get_consumer_offset(
                &fixtures.consumer,
                &fixtures.stream,
                &fixtures.topic,
                fixtures.partition_id,
            )?,
        );

        corpus.push_request(
            CommandCode::CreateConsumerGroup,
            commands::create_consumer_group(
                &fixtures.stream,
                &fixtures.topic,
                fixtures.group_id,
                &config.group_name,
            )?,
        );
        corpus.push_request(
            CommandCode::GetConsumerGroup,
            commands::get_consumer_group(
                &fixtures.stream,
                &fixtures.topic,
                &Identifier::numeric(fixtures.group_id),
            )?,
        );

        corpus.push_responses(config)?;
        Ok(corpus)
    }

    /// The reference corpus plus the remaining catalog commands, inserted
    /// before the responses
    pub fn full(config: &Config) -> Result<Self> {
        let mut corpus = Self::standard(config)?;
        let fixtures = Fixtures::new(config)?;
        let responses = corpus.split_off_responses();

        corpus.push_request(CommandCode::GetStats, commands::get_stats()?);
        corpus.push_request(CommandCode::GetTopics, commands::get_topics(&fixtures.stream)?);
        corpus.push_request(
            CommandCode::DeleteTopic,
            commands::delete_topic(&fixtures.stream, &Identifier::named(&config.topic_name)?)?,
        );
        corpus.push_request(
            CommandCode::GetConsumerGroups,
            commands::get_consumer_groups(&fixtures.stream, &fixtures.topic)?,
        );
        corpus.push_request(
            CommandCode::DeleteConsumerGroup,
            commands::delete_consumer_group(
                &fixtures.stream,
                &fixtures.topic,
                &Identifier::named(&config.group_name)?,
            )?,
        );

        corpus.entries.extend(responses);
        Ok(corpus)
    }

    fn push_responses(&mut self, config: &Config) -> Result<()> {
        let ok = Status::Ok.code();
        self.push_response("Success Response", ok, build_response(ok, &[])?);
        self.push_response(
            "Error Response",
            config.error_status,
            build_response(config.error_status, &[])?,
        );
        Ok(())
    }

    fn split_off_responses(&mut self) -> Vec<CorpusEntry> {
        let first_response = self
            .entries
            .iter()
            .position(|entry| matches!(entry.kind, FrameKind::Response(_)))
            .unwrap_or(self.entries.len());
        self.entries.split_off(first_response)
    }

    /// Keep only requests for `commands`; responses are always kept
    pub fn retain_commands(&mut self, commands: &[CommandCode]) {
        self.entries.retain(|entry| match entry.kind {
            FrameKind::Request(command) => commands.contains(&command),
            FrameKind::Response(_) => true,
        });
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes across all frames
    pub fn total_len(&self) -> usize {
        self.entries.iter().map(CorpusEntry::len).sum()
    }

    /// All frames concatenated in order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.total_len());
        for entry in &self.entries {
            bytes.extend_from_slice(&entry.bytes);
        }
        bytes
    }

    /// Write the concatenated corpus to `path` in one write
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes();
        std::fs::write(path, &bytes)?;
        tracing::info!(
            "Wrote {} frames ({} bytes) to {}",
            self.entries.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Typed values shared by several corpus commands
struct Fixtures {
    stream: Identifier,
    stream_name: Identifier,
    topic: Identifier,
    consumer: Consumer,
    partition_id: u32,
    group_id: u32,
    batch: MessageBatch,
}

impl Fixtures {
    fn new(config: &Config) -> Result<Self> {
        let stream = Identifier::numeric(1);
        let topic = Identifier::numeric(1);

        let message = Bytes::from(vec![MESSAGE_FILL; config.message_size]);
        let mut batch = MessageBatch::new(stream.clone(), topic.clone(), Partitioning::balanced());
        batch.messages = vec![message; config.message_count];

        Ok(Self {
            stream,
            stream_name: Identifier::named(&config.stream_name)?,
            topic,
            consumer: Consumer::new(Identifier::named(&config.consumer_name)?),
            partition_id: 1,
            group_id: 1,
            batch,
        })
    }
}

//! # iggy-testgen
//!
//! Deterministic frame generator for the IGGY binary protocol, for exercising
//! protocol dissectors and conformance tests without a live server:
//! - Primitive codec for integers, strings, identifiers and partitioning
//! - Request and response frame builders
//! - One payload builder per protocol command
//! - Labeled corpus assembly and persistence
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Corpus Assembler                         │
//! │              (labels, hex listing, single write)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Command Payload Catalog                      │
//! │            (one builder per protocol command)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Frame     │          │  Primitive  │
//!   │  Builder    │          │    Codec    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use iggy_testgen::commands;
//! use iggy_testgen::protocol::Identifier;
//!
//! let frame = commands::delete_stream(&Identifier::named("test_stream")?)?;
//! assert_eq!(&frame[..4], &17u32.to_le_bytes());
//! # Ok::<(), iggy_testgen::WireError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod commands;
pub mod corpus;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use config::Config;
pub use corpus::{Corpus, CorpusEntry, FrameKind};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of iggy-testgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

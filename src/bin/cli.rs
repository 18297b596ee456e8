//! iggy-testgen CLI
//!
//! Builds the fixture corpus, prints every frame as hex and writes the
//! concatenated bytes to a file.

use std::path::PathBuf;

use clap::Parser;
use iggy_testgen::protocol::CommandCode;
use iggy_testgen::{Config, Corpus};
use tracing_subscriber::{fmt, EnvFilter};

/// iggy-testgen
#[derive(Parser, Debug)]
#[command(name = "iggy-testgen")]
#[command(about = "Generate IGGY protocol test frames for dissector testing")]
#[command(version)]
struct Args {
    /// Output file for the concatenated corpus
    #[arg(short, long, default_value = "test_messages.bin")]
    output: PathBuf,

    /// Print the frames without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Include every catalog command, not only the reference set
    #[arg(long)]
    full: bool,

    /// Emit only these commands (label or dotted name, repeatable)
    #[arg(long = "only", value_name = "COMMAND")]
    only: Vec<CommandCode>,

    /// Login username
    #[arg(long)]
    username: Option<String>,

    /// Login password
    #[arg(long)]
    password: Option<String>,

    /// Stream name used by create/delete stream
    #[arg(long)]
    stream_name: Option<String>,

    /// Topic name used by create topic
    #[arg(long)]
    topic_name: Option<String>,

    /// Number of messages in the send-messages batch
    #[arg(long)]
    message_count: Option<usize>,

    /// Size of each message in bytes
    #[arg(long)]
    message_size: Option<usize>,
}

impl Args {
    fn config(&self) -> Config {
        let mut builder = Config::builder().output_path(&self.output);
        if let Some(username) = &self.username {
            builder = builder.username(username);
        }
        if let Some(password) = &self.password {
            builder = builder.password(password);
        }
        if let Some(name) = &self.stream_name {
            builder = builder.stream_name(name);
        }
        if let Some(name) = &self.topic_name {
            builder = builder.topic_name(name);
        }
        if let Some(count) = self.message_count {
            builder = builder.message_count(count);
        }
        if let Some(size) = self.message_size {
            builder = builder.message_size(size);
        }
        builder.build()
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,iggy_testgen=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    tracing::info!("iggy-testgen v{}", iggy_testgen::VERSION);

    let built = if args.full {
        Corpus::full(&config)
    } else {
        Corpus::standard(&config)
    };
    let mut corpus = match built {
        Ok(corpus) => corpus,
        Err(e) => {
            tracing::error!("Failed to build corpus: {}", e);
            std::process::exit(1);
        }
    };

    if !args.only.is_empty() {
        corpus.retain_commands(&args.only);
    }

    println!("{}", "=".repeat(80));
    println!("IGGY Protocol Test Messages");
    println!("{}", "=".repeat(80));

    for entry in corpus.entries() {
        println!("\n{}:", entry.label);
        println!("  Length: {} bytes", entry.len());
        println!("  CRC32: {:08x}", entry.checksum());
        println!("  Hex: {}", entry.hex());
    }

    println!("\n{}", "=".repeat(80));
    println!("Total size: {} bytes", corpus.total_len());

    if args.dry_run {
        println!("Dry run, nothing written");
        return;
    }

    if let Err(e) = corpus.write_to(&config.output_path) {
        tracing::error!("Failed to write {}: {}", config.output_path.display(), e);
        std::process::exit(1);
    }
    println!("All messages written to: {}", config.output_path.display());
}

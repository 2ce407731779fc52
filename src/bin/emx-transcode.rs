//! emx-transcode CLI
//!
//! Convert between bytes and text with a named codec, or report which files
//! look like binary data.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use emx_transcode::scan::{scan_path, ScanOptions};
use emx_transcode::Codec;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emx-transcode")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Base64/Hex/UTF-16BE/UTF-8 transcoding and binary detection")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render bytes as text (base64/hex encode, utf16be/utf8 decode)
    #[command(name = "to-text")]
    ToText {
        /// Codec: base64, base64url, hex, utf16be, utf8
        #[arg(short, long)]
        codec: Codec,

        /// Input file (default: stdin)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Turn text into bytes (base64/hex decode, utf16be/utf8 encode)
    #[command(name = "to-bytes")]
    ToBytes {
        /// Codec: base64, base64url, hex, utf16be, utf8
        #[arg(short, long)]
        codec: Codec,

        /// Input file (default: stdin)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Report whether files look like binary data
    Detect {
        /// Files and directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Maximum directory depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Follow symbolic links
        #[arg(long)]
        follow_links: bool,

        /// Include hidden files and directories
        #[arg(long)]
        hidden: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ToText { codec, input, output } => {
            to_text(codec, input.as_deref(), output.as_deref())?;
        }
        Commands::ToBytes { codec, input, output } => {
            to_bytes(codec, input.as_deref(), output.as_deref())?;
        }
        Commands::Detect { paths, max_depth, follow_links, hidden } => {
            let options = ScanOptions {
                follow_links,
                max_depth,
                include_hidden: hidden,
            };
            detect(&paths, &options, cli.verbose > 0)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read: {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("Failed to write: {}", path.display()))?;
            info!(path = %path.display(), bytes = data.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn to_text(codec: Codec, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let data = read_input(input)?;
    let mut text = codec.to_text(&data);
    debug!(%codec, input_bytes = data.len(), output_len = text.len(), "rendered text");

    // encoded text is a single line; keep the terminal prompt off it
    if output.is_none() && codec.is_binary_to_text() {
        text.push('\n');
    }
    write_output(output, text.as_bytes())
}

fn to_bytes(codec: Codec, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let data = read_input(input)?;
    let bytes = codec
        .to_bytes_raw(&data)
        .with_context(|| format!("Input is not valid UTF-8 text for {}", codec))?;
    debug!(%codec, input_bytes = data.len(), output_bytes = bytes.len(), "produced bytes");

    write_output(output, &bytes)
}

fn detect(paths: &[PathBuf], options: &ScanOptions, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for path in paths {
        let entries = scan_path(path, options)?;
        for entry in &entries {
            let kind = if entry.is_binary() { "binary" } else { "text" };
            match entry.detection.reason() {
                Some(reason) if verbose => writeln!(
                    stdout,
                    "{}  {}  {}  ({})",
                    kind,
                    entry.len,
                    entry.path.display(),
                    reason
                )?,
                _ => writeln!(stdout, "{}  {}  {}", kind, entry.len, entry.path.display())?,
            }
        }
    }

    Ok(())
}
